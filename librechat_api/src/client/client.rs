//! HTTP client for the chat backend.
//!
//! Requests are addressed by the route strings from [`crate::routes`]; the
//! client only prefixes them with `base_url` and attaches the bearer token.
//! An optional HTTP proxy is accepted in these formats:
//! * `http://USERNAME:PASSWORD@IP:PORT`
//! * `http://IP:PORT`
//! * `IP:PORT` *(scheme defaults to `http://`)*

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, ClientBuilder, Method, Proxy, Response};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{handle_api_error, LibreChatError};
use crate::types::error_types::ErrorResponse;
use crate::util::join_path;

/// Main client to interact with the chat backend.
#[derive(Clone)]
pub struct LibreChatClient {
    pub base_url: String,
    /// Optional HTTP proxy, normalized to start with a scheme.
    pub proxy: Option<String>,

    pub http: Client,
    pub token: Arc<Mutex<Option<String>>>,
}

impl Debug for LibreChatClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibreChatClient")
            .field("base_url", &self.base_url)
            .field("proxy", &self.proxy)
            .field("http", &"reqwest::Client")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl LibreChatClient {
    /// Construct a new [`LibreChatClient`] without a token.
    ///
    /// # Parameters
    /// * `base_url` – server origin (e.g. `https://chat.example.com`).
    /// * `proxy`    – optional proxy URL, see the module docs.
    pub fn new(base_url: String, proxy: Option<String>) -> Result<Self, LibreChatError> {
        Self::build(base_url, proxy, None)
    }

    /// Construct a client from a [`ClientConfig`], including its token.
    pub fn from_config(config: &ClientConfig) -> Result<Self, LibreChatError> {
        Self::build(
            config.base_url.clone(),
            config.proxy.clone(),
            config.token.clone(),
        )
    }

    fn build(
        base_url: String,
        proxy: Option<String>,
        token: Option<String>,
    ) -> Result<Self, LibreChatError> {
        let mut builder = ClientBuilder::new()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .use_rustls_tls();

        let proxy = proxy.map(|p| {
            if p.starts_with("http://") || p.starts_with("https://") {
                p
            } else {
                format!("http://{p}")
            }
        });

        if let Some(ref full) = proxy {
            builder = builder.proxy(Proxy::all(full.as_str())?);
        }

        let http = builder.build()?;

        Ok(Self {
            base_url,
            proxy,
            http,
            token: Arc::new(Mutex::new(token)),
        })
    }

    /// Manually set or clear the bearer token.
    pub async fn set_token(&self, token: Option<String>) {
        *self.token.lock().await = token;
    }

    /// Absolute URL for a route path such as `/librechat/api/convos?cursor=x`.
    pub fn url(&self, route: &str) -> String {
        join_path(&self.base_url, &[route])
    }

    async fn authed_request(&self, method: Method, route: &str) -> reqwest::RequestBuilder {
        let url = self.url(route);
        debug!(%method, %url, "sending request");

        let mut req = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json, text/plain, */*");

        if let Some(t) = self.token.lock().await.as_deref() {
            req = req.header(AUTHORIZATION, format!("Bearer {t}"));
        }

        req
    }

    pub async fn authed_get(&self, route: &str) -> Result<Response, LibreChatError> {
        Ok(self.authed_request(Method::GET, route).await.send().await?)
    }

    pub async fn authed_post<T: Serialize + ?Sized>(
        &self,
        route: &str,
        body: &T,
    ) -> Result<Response, LibreChatError> {
        Ok(self
            .authed_request(Method::POST, route)
            .await
            .json(body)
            .send()
            .await?)
    }

    pub async fn authed_post_empty(&self, route: &str) -> Result<Response, LibreChatError> {
        Ok(self.authed_request(Method::POST, route).await.send().await?)
    }

    pub async fn authed_put<T: Serialize + ?Sized>(
        &self,
        route: &str,
        body: &T,
    ) -> Result<Response, LibreChatError> {
        Ok(self
            .authed_request(Method::PUT, route)
            .await
            .json(body)
            .send()
            .await?)
    }

    pub async fn authed_patch<T: Serialize + ?Sized>(
        &self,
        route: &str,
        body: &T,
    ) -> Result<Response, LibreChatError> {
        Ok(self
            .authed_request(Method::PATCH, route)
            .await
            .json(body)
            .send()
            .await?)
    }

    pub async fn authed_delete(&self, route: &str) -> Result<Response, LibreChatError> {
        Ok(self
            .authed_request(Method::DELETE, route)
            .await
            .send()
            .await?)
    }

    /// GET `route` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, route: &str) -> Result<T, LibreChatError> {
        let resp = self.authed_get(route).await?;
        parse_json_if_ok(resp).await
    }
}

/// Parse the body as JSON **iff** the response status is success.
pub async fn parse_json_if_ok<T: DeserializeOwned>(resp: Response) -> Result<T, LibreChatError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;

    if !status.is_success() {
        warn!(status = status.as_u16(), "request failed");
        return Err(error_from_body(status.as_u16(), &bytes));
    }

    Ok(serde_json::from_slice::<T>(&bytes)?)
}

fn error_from_body(code: u16, body: &[u8]) -> LibreChatError {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(api_err) => handle_api_error(api_err),
        Err(_) => LibreChatError::HttpStatus {
            code,
            body: String::from_utf8_lossy(body).to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;

    fn client() -> LibreChatClient {
        LibreChatClient::new("https://chat.example.com/".to_string(), None).unwrap()
    }

    #[test]
    fn url_prefixes_route_with_base() {
        let client = client();
        assert_eq!(
            client.url(&routes::conversation_by_id("abc")),
            "https://chat.example.com/librechat/api/convos/abc"
        );
        assert_eq!(
            client.url(&routes::user_key_query("openAI")),
            "https://chat.example.com/librechat/api/keys?name=openAI"
        );
    }

    #[test]
    fn proxy_without_scheme_gets_http() {
        let client =
            LibreChatClient::new("http://localhost:3080".to_string(), Some("127.0.0.1:8080".to_string()))
                .unwrap();
        assert_eq!(client.proxy.as_deref(), Some("http://127.0.0.1:8080"));
    }

    #[test]
    fn debug_redacts_token() {
        let mut config = ClientConfig::new("http://localhost:3080");
        config.token = Some("secret-jwt".to_string());
        let client = LibreChatClient::from_config(&config).unwrap();
        assert!(!format!("{client:?}").contains("secret-jwt"));
    }

    #[tokio::test]
    async fn token_can_be_set_and_cleared() {
        let client = client();
        client.set_token(Some("jwt".to_string())).await;
        assert_eq!(client.token.lock().await.as_deref(), Some("jwt"));
        client.set_token(None).await;
        assert!(client.token.lock().await.is_none());
    }

    #[test]
    fn error_body_parsing() {
        let err = error_from_body(401, br#"{"message":"Unauthorized"}"#);
        assert!(matches!(err, LibreChatError::ApiError(ref e) if e.message == "Unauthorized"));

        let err = error_from_body(502, b"Bad Gateway");
        assert!(matches!(err, LibreChatError::HttpStatus { code: 502, ref body } if body == "Bad Gateway"));
    }
}
