//! Client configuration, read from the environment (and an optional `.env`).

use std::env;

use crate::error::LibreChatError;

pub const BASE_URL_VAR: &str = "LIBRECHAT_BASE_URL";
pub const PROXY_VAR: &str = "LIBRECHAT_PROXY";
pub const TOKEN_VAR: &str = "LIBRECHAT_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server origin, e.g. `https://chat.example.com`. Route paths are
    /// appended to it.
    pub base_url: String,
    /// Optional HTTP proxy, `http://[user:pass@]host:port`.
    pub proxy: Option<String>,
    /// Bearer token to start with.
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            proxy: None,
            token: None,
        }
    }

    /// Load a `.env` file if there is one, then read the `LIBRECHAT_*`
    /// variables.
    pub fn from_env() -> Result<Self, LibreChatError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(LibreChatError::Config(format!("failed to load .env: {e}")));
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LibreChatError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get(BASE_URL_VAR)
            .ok_or_else(|| LibreChatError::Config(format!("{BASE_URL_VAR} is not set")))?;

        Ok(Self {
            base_url,
            proxy: get(PROXY_VAR),
            token: get(TOKEN_VAR),
        })
    }
}
