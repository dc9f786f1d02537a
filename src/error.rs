//! Error Types
//!
//! Transport-level failures from the API layer, plus the fixed
//! user-facing message for each operation.

use thiserror::Error;

/// A request that never produced a usable backend answer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

/// User actions that talk to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Fetch,
    Add,
    Save,
    Delete,
}

impl Operation {
    /// Alert shown when the request itself failed
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Login => "Failed to log in. Please try again later.",
            Operation::Fetch => "Failed to fetch entries.",
            Operation::Add => "Failed to add entry. Please try again later.",
            Operation::Save => "Failed to save change. Please try again later.",
            Operation::Delete => "Failed to delete entry. Please try again later.",
        }
    }

    /// Confirmation prompt shown before the request is sent
    pub fn confirm_prompt(self) -> &'static str {
        match self {
            Operation::Add => "Are you sure you want to add this entry?",
            Operation::Save => "Are you sure you want to change this entry?",
            Operation::Delete => "Are you sure you want to delete this entry?",
            Operation::Login | Operation::Fetch => "",
        }
    }
}
