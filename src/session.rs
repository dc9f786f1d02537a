//! Session State
//!
//! In-memory login flag and login dialog visibility.

use crate::error::{ApiError, Operation};
use crate::models::LoginResponse;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub login_open: bool,
}

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected(String),
    Failed(&'static str),
}

impl LoginOutcome {
    pub fn from_result(result: Result<LoginResponse, ApiError>) -> Self {
        match result {
            Ok(resp) if resp.success => Self::Accepted,
            Ok(resp) => Self::Rejected(
                resp.message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Invalid username or password.".to_string()),
            ),
            Err(err) => {
                log::error!("[AUTH] login request failed: {}", err);
                Self::Failed(Operation::Login.failure_message())
            }
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Accepted => None,
            Self::Rejected(message) => Some(message.as_str()),
            Self::Failed(message) => Some(*message),
        }
    }

    /// The backend's refusal text; transport failures are logged where they happen
    pub fn refusal(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl Session {
    pub fn open_login(&mut self) {
        self.login_open = true;
    }

    pub fn close_login(&mut self) {
        self.login_open = false;
    }

    /// Logout is local only
    pub fn logout(&mut self) {
        self.logged_in = false;
    }

    /// Success logs in and closes the dialog; anything else changes nothing
    pub fn apply(&mut self, outcome: &LoginOutcome) {
        if *outcome == LoginOutcome::Accepted {
            self.logged_in = true;
            self.login_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(success: bool, message: Option<&str>) -> Result<LoginResponse, ApiError> {
        Ok(LoginResponse {
            success,
            message: message.map(String::from),
        })
    }

    #[test]
    fn test_login_success_opens_session() {
        let mut session = Session::default();
        session.open_login();
        let outcome = LoginOutcome::from_result(login(true, Some("Login successful.")));
        session.apply(&outcome);
        assert!(session.logged_in);
        assert!(!session.login_open);
        assert_eq!(outcome.message(), None);
    }

    #[test]
    fn test_login_rejection_changes_nothing() {
        let mut session = Session::default();
        session.open_login();
        let outcome = LoginOutcome::from_result(login(false, Some("Invalid username or password.")));
        session.apply(&outcome);
        assert!(!session.logged_in);
        assert!(session.login_open);
        assert_eq!(outcome.message(), Some("Invalid username or password."));
        assert_eq!(outcome.refusal(), Some("Invalid username or password."));
    }

    #[test]
    fn test_login_transport_failure() {
        let mut session = Session::default();
        session.open_login();
        let outcome = LoginOutcome::from_result(Err(ApiError::Transport("refused".into())));
        session.apply(&outcome);
        assert_eq!(session, Session { logged_in: false, login_open: true });
        assert_eq!(outcome.message(), Some("Failed to log in. Please try again later."));
        // already logged as an error; no second warning
        assert_eq!(outcome.refusal(), None);
        assert_eq!(LoginOutcome::Accepted.refusal(), None);
    }

    #[test]
    fn test_logout_is_immediate() {
        let mut session = Session { logged_in: true, login_open: false };
        session.logout();
        assert!(!session.logged_in);
    }
}
