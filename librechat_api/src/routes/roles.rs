use super::api;
use crate::util::join_path;

pub fn roles() -> String {
    api(&["roles"])
}

/// Role names are case-insensitive on the server; the path uses lowercase.
pub fn get_role(role_name: &str) -> String {
    api(&["roles", role_name.to_lowercase().as_str()])
}

pub fn update_prompt_permissions(role_name: &str) -> String {
    join_path(&get_role(role_name), &["prompts"])
}

pub fn update_memory_permissions(role_name: &str) -> String {
    join_path(&get_role(role_name), &["memories"])
}

pub fn update_agent_permissions(role_name: &str) -> String {
    join_path(&get_role(role_name), &["agents"])
}
