//! State plumbing shared by the roster crates.
//!
//! Domain crates describe their state as a [`Reducer`]; the UI owns a
//! [`Store`] and feeds it actions, either directly or through a
//! [`Dispatcher`] handed to asynchronous work.

mod basic_state;
mod debounce;
mod error;
mod reducer;
mod runtime;
mod state_sync_status;

pub use basic_state::Time;
pub use debounce::Debounce;
pub use error::StateError;
pub use reducer::Reducer;
pub use runtime::{Dispatcher, Store};
pub use state_sync_status::StateSyncStatus;
