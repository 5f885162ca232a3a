use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Store is gone, action `{action}` was dropped")]
    Disconnected { action: String },
}

impl StateError {
    pub fn disconnected(action: impl Into<String>) -> Self {
        Self::Disconnected {
            action: action.into(),
        }
    }
}
