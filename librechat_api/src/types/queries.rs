use serde::{Deserialize, Serialize};

use crate::query::QueryParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Parameters for listing messages.
///
/// When `conversation_id` is set the route addresses the conversation (or a
/// single message in it) by path, and the remaining fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl MessagesListParams {
    /// Query parameters other than the path ids.
    pub fn to_query_params(&self) -> QueryParams {
        QueryParams::new()
            .with("cursor", self.cursor.as_deref())
            .with("sortBy", self.sort_by.as_deref())
            .with("sortDirection", self.sort_direction.map(SortDirection::as_str))
            .with("pageSize", self.page_size)
            .with("search", self.search.as_deref())
    }
}

/// Parameters for listing conversations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl From<&ConversationListParams> for QueryParams {
    fn from(params: &ConversationListParams) -> Self {
        QueryParams::new()
            .with("cursor", params.cursor.as_deref())
            .with("isArchived", params.is_archived)
            .with("sortBy", params.sort_by.as_deref())
            .with("sortDirection", params.sort_direction.map(SortDirection::as_str))
            .with("tags", params.tags.clone())
            .with("search", params.search.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SharedLinksSortBy {
    Title,
    CreatedAt,
}

impl SharedLinksSortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SharedLinksSortBy::Title => "title",
            SharedLinksSortBy::CreatedAt => "createdAt",
        }
    }
}

/// Parameters for paging through shared links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedLinksParams {
    pub page_size: u32,
    pub is_public: bool,
    pub sort_by: SharedLinksSortBy,
    pub sort_direction: SortDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl From<&SharedLinksParams> for QueryParams {
    fn from(params: &SharedLinksParams) -> Self {
        QueryParams::new()
            .with("pageSize", params.page_size)
            .with("isPublic", params.is_public)
            .with("sortBy", params.sort_by.as_str())
            .with("sortDirection", params.sort_direction.as_str())
            .with("search", params.search.as_deref())
            .with("cursor", params.cursor.as_deref())
    }
}

/// Which assistants backend a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssistantsEndpoint {
    Assistants,
    AzureAssistants,
}

impl AssistantsEndpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            AssistantsEndpoint::Assistants => "assistants",
            AssistantsEndpoint::AzureAssistants => "azureAssistants",
        }
    }
}
