use super::{api, with_required_query};
use crate::query::QueryParams;

pub fn health() -> String {
    "/librechat/health".to_string()
}

pub fn user() -> String {
    api(&["user"])
}

pub fn balance() -> String {
    api(&["balance"])
}

pub fn user_plugins() -> String {
    api(&["user", "plugins"])
}

pub fn delete_user() -> String {
    api(&["user", "delete"])
}

pub fn verify_email() -> String {
    api(&["user", "verify"])
}

pub fn resend_verification_email() -> String {
    api(&["user", "verify", "resend"])
}

pub fn user_terms() -> String {
    api(&["user", "terms"])
}

pub fn accept_user_terms() -> String {
    api(&["user", "terms", "accept"])
}

pub fn banner() -> String {
    api(&["banner"])
}

pub fn config() -> String {
    api(&["config"])
}

pub fn plugins() -> String {
    api(&["plugins"])
}

/// Full-text message search. `cursor` continues a previous page.
pub fn search(q: &str, cursor: Option<&str>) -> String {
    let optional = QueryParams::new().with("cursor", cursor);
    with_required_query(api(&["search"]), "q", q, &optional)
}

pub fn search_enabled() -> String {
    api(&["search", "enable"])
}
