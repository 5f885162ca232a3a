//! Integration tests for the users fetch fired at startup.

mod common;

use crate::common::{TestCtx, settle, users_body, wait_for_network};
use kittest::Queryable;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_initial_fetch_displays_users() {
    let mut ctx = TestCtx::new_app().await;
    let harness = ctx.harness_mut();

    wait_for_network(harness).await;

    assert!(harness.query_by_label_contains("Emily Johnson").is_some());
    assert!(harness.query_by_label_contains("Michael Williams").is_some());
    assert!(
        harness
            .query_by_label_contains("Showing 3 of 3 users")
            .is_some(),
        "summary should count the fetched users"
    );
    assert!(!harness.state().state.grid.state().is_loading());
}

#[tokio::test]
async fn test_loading_message_while_fetching() {
    let mut ctx = TestCtx::new_app_with(
        ResponseTemplate::new(200)
            .set_body_json(users_body())
            .set_delay(std::time::Duration::from_secs(1)),
    )
    .await;
    let harness = ctx.harness_mut();

    harness.step();

    assert!(harness.state().state.grid.state().is_loading());
    assert!(
        harness.query_by_label_contains("Loading users").is_some(),
        "Should display 'Loading users...' while fetching"
    );
}

#[tokio::test]
async fn test_initial_fetch_is_triggered_once() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = roster_ui::state::State::test(mock_server.uri());
    let app = roster_ui::RosterApp::new(state);
    let mut harness = egui_kittest::Harness::new_eframe(|_| app);

    wait_for_network(&mut harness).await;
    settle(&mut harness);

    // The mock server verifies the call count when dropped.
}

#[tokio::test]
async fn test_failed_fetch_leaves_table_empty() {
    let mut ctx = TestCtx::new_app_with(ResponseTemplate::new(500)).await;
    let harness = ctx.harness_mut();

    wait_for_network(harness).await;

    let grid = harness.state().state.grid.state();
    assert!(!grid.is_loading());
    assert!(grid.rows().is_empty());
    assert!(
        harness
            .query_by_label_contains("Showing 0 of 0 users")
            .is_some()
    );
    assert!(harness.query_by_label("No data").is_some());
}
