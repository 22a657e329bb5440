use librechat_api::routes::{self, AssistantsRoute};
use librechat_api::{
    AssistantsEndpoint, ConversationListParams, LibreChatClient, MessagesListParams, QueryValue,
    SortDirection,
};

#[test]
fn static_routes() {
    assert_eq!(routes::health(), "/librechat/health");
    assert_eq!(routes::balance(), "/librechat/api/balance");
    assert_eq!(routes::login(), "/librechat/api/auth/login");
    assert_eq!(routes::endpoints_config_override(), "/librechat/api/endpoints/config/override");
    assert_eq!(routes::delete_all_conversation(), "/librechat/api/convos/all");
    assert_eq!(routes::file_upload(), routes::files());
    assert_eq!(routes::post_prompt(), routes::prompts());
    assert_eq!(routes::memory_preferences(), "/librechat/api/memories/preferences");
    assert_eq!(routes::accept_user_terms(), "/librechat/api/user/terms/accept");
}

#[test]
fn conversation_listing_from_ui_json() {
    let params: ConversationListParams =
        serde_json::from_str(r#"{"cursor":"c 1","sortBy":"updatedAt","tags":[]}"#).unwrap();
    assert_eq!(
        routes::conversations(&params),
        "/librechat/api/convos?cursor=c%201&sortBy=updatedAt"
    );
}

#[test]
fn message_listing() {
    let params = MessagesListParams {
        sort_by: Some("createdAt".into()),
        sort_direction: Some(SortDirection::Desc),
        page_size: Some(25),
        ..Default::default()
    };
    assert_eq!(
        routes::messages(&params),
        "/librechat/api/messages?sortBy=createdAt&sortDirection=desc&pageSize=25"
    );
}

#[test]
fn assistants_with_extra_options() {
    let route = AssistantsRoute::new(2)
        .option("order", "desc")
        .option("after", QueryValue::Null)
        .endpoint(AssistantsEndpoint::Assistants);
    assert_eq!(
        routes::assistants(&route),
        "/librechat/api/assistants/v2?order=desc&endpoint=assistants"
    );
}

#[test]
fn client_prefixes_routes() {
    let client = LibreChatClient::new("http://localhost:3080".to_string(), None).unwrap();
    assert_eq!(
        client.url(&routes::get_random_prompts(3, 6)),
        "http://localhost:3080/librechat/api/prompts/random?limit=3&skip=6"
    );
    assert_eq!(
        client.url(&routes::health()),
        "http://localhost:3080/librechat/health"
    );
}
