mod client;

pub use client::parse_json_if_ok;
pub use client::LibreChatClient;

pub use crate::error::{handle_api_error, LibreChatError};
