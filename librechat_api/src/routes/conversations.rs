use super::{api, with_query, with_required_query};
use crate::query::{encode_component, QueryParams};
use crate::types::queries::ConversationListParams;

pub fn conversations(params: &ConversationListParams) -> String {
    with_query(api(&["convos"]), &QueryParams::from(params))
}

pub fn conversation_by_id(id: &str) -> String {
    api(&["convos", id])
}

pub fn gen_title() -> String {
    api(&["convos", "gen_title"])
}

pub fn update_conversation() -> String {
    api(&["convos", "update"])
}

pub fn delete_conversation() -> String {
    api(&["convos"])
}

pub fn delete_all_conversation() -> String {
    api(&["convos", "all"])
}

pub fn import_conversation() -> String {
    api(&["convos", "import"])
}

pub fn fork_conversation() -> String {
    api(&["convos", "fork"])
}

pub fn duplicate_conversation() -> String {
    api(&["convos", "duplicate"])
}

/* Conversation tags */

/// Tags collection, or a single (encoded) tag.
pub fn conversation_tags(tag: Option<&str>) -> String {
    match tag.filter(|t| !t.is_empty()) {
        Some(tag) => api(&["tags", encode_component(tag).as_str()]),
        None => api(&["tags"]),
    }
}

pub fn conversation_tags_list(page_number: &str, sort: Option<&str>, order: Option<&str>) -> String {
    let optional = QueryParams::new().with("sort", sort).with("order", order);
    with_required_query(api(&["tags", "list"]), "pageNumber", page_number, &optional)
}

pub fn add_tag_to_conversation(conversation_id: &str) -> String {
    api(&["tags", "convo", conversation_id])
}
