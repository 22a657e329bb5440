use super::{api, with_query};
use crate::types::queries::MessagesListParams;

/// Messages route.
///
/// * conversation and message id → `/messages/{conversation}/{message}`
/// * conversation id only → `/messages/{conversation}`
/// * otherwise → `/messages` with the remaining params as a query string
///
/// Empty ids count as missing.
pub fn messages(params: &MessagesListParams) -> String {
    let conversation = params.conversation_id.as_deref().filter(|id| !id.is_empty());
    let message = params.message_id.as_deref().filter(|id| !id.is_empty());

    match (conversation, message) {
        (Some(conversation), Some(message)) => api(&["messages", conversation, message]),
        (Some(conversation), None) => api(&["messages", conversation]),
        _ => with_query(api(&["messages"]), &params.to_query_params()),
    }
}

pub fn feedback(conversation_id: &str, message_id: &str) -> String {
    api(&["messages", conversation_id, message_id, "feedback"])
}
