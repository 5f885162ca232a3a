//! Integration tests for the theme switch and the pagination footer.

mod common;

use crate::common::{TestCtx, settle, user_json, wait_for_network};
use kittest::Queryable;
use serde_json::json;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_theme_toggle_switches_to_dark() {
    let mut ctx = TestCtx::loaded().await;
    let harness = ctx.harness_mut();
    assert!(!harness.state().state.is_dark());

    harness.get_by_label("Dark mode").click();
    settle(harness);

    assert!(harness.state().state.is_dark());
}

fn many_users(count: u64) -> serde_json::Value {
    let users: Vec<serde_json::Value> = (1..=count)
        .map(|id| user_json(id, &format!("User{id}"), "Test", "male", "Austin"))
        .collect();
    json!({ "users": users, "total": count, "skip": 0, "limit": 100 })
}

#[tokio::test]
async fn test_pages_of_ten_by_default() {
    let mut ctx =
        TestCtx::new_app_with(ResponseTemplate::new(200).set_body_json(many_users(23))).await;
    let harness = ctx.harness_mut();
    wait_for_network(harness).await;

    assert!(harness.query_by_label("1-10 of 23 users").is_some());
    assert_eq!(harness.query_all_by_label("Edit").count(), 10);

    harness.get_by_label("›").click();
    settle(harness);

    assert!(harness.query_by_label("11-20 of 23 users").is_some());
    assert_eq!(harness.state().state.surface.pagination().page(), 2);
}

#[tokio::test]
async fn test_deleting_rows_clamps_page() {
    let mut ctx =
        TestCtx::new_app_with(ResponseTemplate::new(200).set_body_json(many_users(11))).await;
    let harness = ctx.harness_mut();
    wait_for_network(harness).await;

    harness.state_mut().state.surface.set_page(2);
    settle(harness);
    assert!(harness.query_by_label("11-11 of 11 users").is_some());

    harness.state_mut().state.pending_delete = Some(ustr::Ustr::from("11"));
    settle(harness);
    harness.get_by_label("Yes").click();
    settle(harness);

    assert_eq!(harness.state().state.surface.pagination().page(), 1);
    assert!(harness.query_by_label("1-10 of 10 users").is_some());
}
