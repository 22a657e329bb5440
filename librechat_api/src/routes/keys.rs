use super::{api, with_required_query};
use crate::query::QueryParams;

pub fn keys() -> String {
    api(&["keys"])
}

/// Look up a stored user key by endpoint name.
pub fn user_key_query(name: &str) -> String {
    with_required_query(keys(), "name", name, &QueryParams::new())
}

pub fn revoke_user_key(name: &str) -> String {
    api(&["keys", name])
}

pub fn revoke_all_user_keys() -> String {
    format!("{}?all=true", keys())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_routes() {
        assert_eq!(user_key_query("openAI"), "/librechat/api/keys?name=openAI");
        assert_eq!(user_key_query("a b"), "/librechat/api/keys?name=a%20b");
        assert_eq!(user_key_query(""), "/librechat/api/keys?name=");
        assert_eq!(revoke_user_key("openAI"), "/librechat/api/keys/openAI");
        assert_eq!(revoke_all_user_keys(), "/librechat/api/keys?all=true");
    }
}
