//! Route constructors.
//!
//! Each function maps typed parameters to a path (plus query string) on the
//! backend. They are pure and never fail; pair them with
//! [`crate::LibreChatClient`] to actually send a request.

pub mod agents;
pub mod auth;
pub mod conversations;
pub mod files;
pub mod keys;
pub mod memories;
pub mod messages;
pub mod models;
pub mod prompts;
pub mod roles;
pub mod share;
pub mod user;

pub use agents::*;
pub use auth::*;
pub use conversations::*;
pub use files::*;
pub use keys::*;
pub use memories::*;
pub use messages::*;
pub use models::*;
pub use prompts::*;
pub use roles::*;
pub use share::*;
pub use user::*;

use crate::query::{build_query, build_search_params, encode_component, QueryParams};
use crate::util::join_path;

pub const API_ROOT: &str = "/librechat/api";

/// `API_ROOT` joined with `segments`.
pub(crate) fn api(segments: &[&str]) -> String {
    join_path(API_ROOT, segments)
}

/// `path` followed by the [`build_query`] encoding of `params`.
pub(crate) fn with_query(mut path: String, params: &QueryParams) -> String {
    path.push_str(&build_query(params));
    path
}

/// `path?key=value` with `key` always present, even for an empty `value`,
/// followed by whatever of `optional` survives [`build_query`] filtering.
pub(crate) fn with_required_query(
    mut path: String,
    key: &str,
    value: &str,
    optional: &QueryParams,
) -> String {
    path.push('?');
    path.push_str(key);
    path.push('=');
    path.push_str(&encode_component(value));
    if let Some(rest) = build_query(optional).strip_prefix('?') {
        path.push('&');
        path.push_str(rest);
    }
    path
}

/// `path` followed by `?` and the search-params encoding of `options`,
/// unless that encoding is empty.
pub(crate) fn with_search_params(mut path: String, options: &QueryParams) -> String {
    let encoded = build_search_params(options);
    if !encoded.is_empty() {
        path.push('?');
        path.push_str(&encoded);
    }
    path
}
