//! # LibreChat API
//!
//! Route construction for a LibreChat-style chat backend. Every function in
//! [`routes`] maps typed parameters to a REST path with an optional query
//! string, built on the encoders in [`query`]. A thin `reqwest`-based
//! [`LibreChatClient`] sends requests to those paths.

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod routes;
pub mod types;
pub mod util;

pub use client::*;
pub use config::ClientConfig;
pub use error::LibreChatError;
pub use query::{build_query, build_search_params, encode_component, QueryParams, QueryValue, Scalar};
pub use types::*;
