//! End-to-end flows through state, controller, and HTTP client
//!
//! Each test drives `AppState` the way the UI does and lets the
//! `Controller` run real requests against a mockito server.

use mockito::{Matcher, Server};
use storefront_gui::api::ApiClient;
use storefront_gui::controller::Controller;
use storefront_gui::state::{AppEvent, AppState, Command};
use tokio::runtime::Handle;

const THREE_HITS: &str = r#"{
    "hits": [
        {"id": 1, "name": "Canvas Tote", "images": ["http://img/1.jpg"], "category_name": "bags",
         "sizes": [], "current_price": 100, "currency": "AED"},
        {"id": 2, "name": "Rain Jacket", "images": [], "category_name": "jackets",
         "sizes": ["M", "L"], "current_price": 85, "old_price": 120, "off_percent": 29, "currency": "USD"},
        {"id": 3, "name": "Silk Tie", "images": [], "category_name": "ties",
         "sizes": [], "current_price": 10, "currency": "KWD"}
    ],
    "query": ""
}"#;

async fn controller_for(server: &Server) -> Controller {
    let client = ApiClient::with_base_url(&server.url(), 5).unwrap();
    Controller::new(client, Handle::current())
}

/// Wait for one event and fold it (plus any follow-ups) into the state
async fn settle_one(controller: &mut Controller, state: &mut AppState) -> Vec<Command> {
    let event = controller.next_event().await.expect("controller channel closed");
    let follow_ups = state.apply_event(event);
    controller.dispatch_all(follow_ups.clone());
    follow_ups
}

async fn mount(server: &mut Server) -> (AppState, Controller) {
    server
        .mock("GET", "/api/search")
        .match_query(Matcher::UrlEncoded("query".into(), "".into()))
        .with_status(200)
        .with_body(THREE_HITS)
        .create_async()
        .await;

    let mut state = AppState::new();
    let mut controller = controller_for(server).await;
    controller.dispatch_all(state.initial_load());
    settle_one(&mut controller, &mut state).await;
    (state, controller)
}

#[tokio::test]
async fn test_mount_shows_all_products() {
    let mut server = Server::new_async().await;
    let (state, _controller) = mount(&mut server).await;

    assert_eq!(state.products().len(), 3);
    assert_eq!(state.visible_products().len(), 3);
    assert!(!state.is_searching());
    assert!(state.notice().is_none());
}

#[tokio::test]
async fn test_apply_max_price_filter() {
    let mut server = Server::new_async().await;
    let (mut state, _controller) = mount(&mut server).await;

    state.filter_draft.price_max = "30".to_string();
    // Drafts are not applied until Apply
    assert_eq!(state.visible_products().len(), 3);

    state.apply_filter_draft();

    let visible = state.visible_products();
    // 100 AED = 27.23 USD; 85 USD and 10 KWD (32.415 USD) are above 30
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].product.name, "Canvas Tote");
    assert!(visible.iter().all(|i| i.current_price_usd <= 30.0));
    assert_eq!(state.products().len(), 3);
}

#[tokio::test]
async fn test_chat_directive_searches_and_sets_ceiling() {
    let mut server = Server::new_async().await;
    let (mut state, mut controller) = mount(&mut server).await;

    let chat_mock = server
        .mock("POST", "/api/chat")
        .match_body(Matcher::PartialJsonString(
            r#"{"conversation": [{"role": "user", "content": "jackets under 100"}]}"#.to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"response": "Sure, here are some jackets", "query": "jackets under 100"}"#)
        .create_async()
        .await;
    let search_mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::UrlEncoded("query".into(), "jackets under 100".into()))
        .with_status(200)
        .with_body(
            r#"{"hits": [
                {"id": 2, "name": "Rain Jacket", "category_name": "jackets", "sizes": ["M"],
                 "current_price": 85, "currency": "USD"},
                {"id": 9, "name": "Wool Jacket", "category_name": "jackets", "sizes": ["L"],
                 "current_price": 140, "currency": "USD"}
            ]}"#,
        )
        .create_async()
        .await;

    state.chat.input = "jackets under 100".to_string();
    controller.dispatch_all(state.send_chat_message());

    let follow_ups = settle_one(&mut controller, &mut state).await;
    chat_mock.assert_async().await;
    assert_eq!(state.chat.messages().len(), 2);
    assert_eq!(state.chat.messages()[1].content, "Sure, here are some jackets");
    assert_eq!(state.filters().price_max, Some(100.0));
    assert!(matches!(
        follow_ups.as_slice(),
        [Command::FetchProducts { query, .. }] if query == "jackets under 100"
    ));

    settle_one(&mut controller, &mut state).await;
    search_mock.assert_async().await;
    assert_eq!(state.products().len(), 2);
    let visible = state.visible_products();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].product.name, "Rain Jacket");
}

#[tokio::test]
async fn test_failed_fetch_preserves_state() {
    let mut server = Server::new_async().await;
    let (mut state, mut controller) = mount(&mut server).await;
    state.filter_draft.category = Some("bags".to_string());
    state.apply_filter_draft();
    let before_products = state.products().to_vec();
    let before_visible = state.visible_products().len();

    server
        .mock("GET", "/api/search")
        .match_query(Matcher::UrlEncoded("query".into(), "boots".into()))
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    state.search_draft.query = "boots".to_string();
    controller.dispatch(state.submit_search());
    settle_one(&mut controller, &mut state).await;

    assert_eq!(state.products(), before_products.as_slice());
    assert_eq!(state.visible_products().len(), before_visible);
    let notice = state.notice().expect("failure should raise a notice");
    assert_eq!(notice.retry_query.as_deref(), Some("boots"));
}

#[tokio::test]
async fn test_unreachable_server_is_reported_not_raised() {
    let client = ApiClient::with_base_url("http://127.0.0.1:9", 2).unwrap();
    let mut controller = Controller::new(client, Handle::current());
    let mut state = AppState::new();

    controller.dispatch_all(state.initial_load());
    let event = controller.next_event().await.unwrap();
    assert!(matches!(event, AppEvent::ProductsFailed { seq: 1, .. }));

    state.apply_event(event);
    assert!(state.products().is_empty());
    assert!(state.notice().is_some());
    assert!(!state.is_searching());
}
