pub mod error_types;
pub mod queries;

// Re-export the main types commonly used
pub use error_types::ErrorResponse;
pub use queries::{
    AssistantsEndpoint, ConversationListParams, MessagesListParams, SharedLinksParams,
    SharedLinksSortBy, SortDirection,
};
