//! The one-shot users fetch fired at startup.

use log::warn;
use roster_business::users::fetch_users;
use roster_business::{BusinessConfig, GridAction};
use roster_states::Dispatcher;

/// Fetches the users off the UI thread and posts the outcome to the grid.
///
/// Native builds need a tokio runtime entered on the calling thread.
pub fn spawn_fetch(config: BusinessConfig, dispatcher: Dispatcher<GridAction>, ctx: egui::Context) {
    let task = async move {
        let action = match fetch_users(&config).await {
            Ok(rows) => GridAction::FetchSucceeded(rows),
            Err(err) => GridAction::FetchFailed(err.to_string()),
        };
        if let Err(err) = dispatcher.send(action) {
            warn!("Dropping fetch result: {err}");
        }
        ctx.request_repaint();
    };

    #[cfg(not(target_arch = "wasm32"))]
    tokio::spawn(task);

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(task);
}
