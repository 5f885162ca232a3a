//! Integration tests for column visibility and the global reset.

mod common;

use crate::common::{TestCtx, settle};
use chrono::Duration;
use kittest::Queryable;
use roster_business::GridAction;
use roster_business::users::ColumnKey;

#[tokio::test]
async fn test_hidden_column_disappears_from_table() {
    let mut ctx = TestCtx::loaded().await;
    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Phoenix").is_some());

    harness
        .state_mut()
        .state
        .grid
        .dispatch(GridAction::ToggleColumn {
            column: ColumnKey::City,
            shown: false,
        });
    settle(harness);

    assert!(harness.query_by_label("Phoenix").is_none());
    assert!(harness.query_by_label("City").is_none());
    assert!(harness.query_by_label_contains("Emily Johnson").is_some());
}

#[tokio::test]
async fn test_id_column_cannot_be_hidden() {
    let mut ctx = TestCtx::loaded().await;
    let harness = ctx.harness_mut();

    let grid = &mut harness.state_mut().state.grid;
    grid.dispatch(GridAction::ToggleColumn {
        column: ColumnKey::City,
        shown: false,
    });
    grid.dispatch(GridAction::ToggleColumn {
        column: ColumnKey::Id,
        shown: false,
    });
    settle(harness);

    assert!(harness.query_by_label("ID").is_some());
    assert!(harness.query_by_label("Actions").is_some());
}

#[tokio::test]
async fn test_column_display_menu_lists_columns() {
    let mut ctx = TestCtx::loaded().await;
    let harness = ctx.harness_mut();

    harness.get_by_label("Column Display").click();
    settle(harness);

    // Header cell plus the checkbox in the open menu.
    assert_eq!(harness.query_all_by_label("Phone").count(), 2);
    assert_eq!(harness.query_all_by_label("Actions").count(), 1);
}

#[tokio::test]
async fn test_global_reset_restores_defaults() {
    let mut ctx = TestCtx::loaded().await;
    let harness = ctx.harness_mut();

    let now = harness.state().state.time.now();
    {
        let state = &mut harness.state_mut().state;
        state.grid.dispatch(GridAction::ToggleColumn {
            column: ColumnKey::Email,
            shown: false,
        });
        state.grid.dispatch(GridAction::SetSearch("sophia".to_string()));
        state.search.edit("sophia b", now);
        state.surface.cycle_sort(ColumnKey::Age);
    }
    settle(harness);
    assert!(
        harness
            .query_by_label_contains("Showing 1 of 3 users")
            .is_some()
    );

    harness.get_by_label("Reset").click();
    settle(harness);

    let state = &harness.state().state;
    assert_eq!(state.grid.state().query(), "");
    assert_eq!(state.search.draft(), "");
    assert!(!state.search.is_pending());
    assert_eq!(state.grid.state().surface_generation(), 1);
    assert_eq!(state.surface.sort(), None);
    assert_eq!(
        state.grid.state().layout().visible_keys(),
        ColumnKey::ALL.to_vec()
    );
    assert!(
        harness
            .query_by_label_contains("Showing 3 of 3 users")
            .is_some()
    );

    // The cancelled draft never fires.
    harness
        .state_mut()
        .state
        .time
        .advance(Duration::milliseconds(400));
    settle(harness);
    assert_eq!(harness.state().state.grid.state().query(), "");
}
