use super::{api, with_query};
use crate::query::QueryParams;
use crate::types::queries::SharedLinksParams;

pub fn share_messages(share_id: &str) -> String {
    api(&["share", share_id])
}

pub fn get_shared_link(conversation_id: &str) -> String {
    api(&["share", "link", conversation_id])
}

/// One page of the user's shared links.
pub fn get_shared_links(params: &SharedLinksParams) -> String {
    with_query(api(&["share"]), &QueryParams::from(params))
}

pub fn create_shared_link(conversation_id: &str) -> String {
    api(&["share", conversation_id])
}

pub fn update_shared_link(share_id: &str) -> String {
    api(&["share", share_id])
}
