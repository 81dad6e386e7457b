//! Account flows that do not need a session: forgot password

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("A reset request is already being sent")]
    RequestInFlight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Loose syntactic check; the API does the real verification
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// Forgot-password screen state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ForgotPasswordStep {
    #[default]
    EnterEmail,
    Sending,
    EmailSent,
    Failed(String),
}

impl ForgotPasswordStep {
    /// Validate the address and move to `Sending`
    pub fn submit(&mut self, email: &str) -> Result<ForgotPasswordRequest, AccountError> {
        if *self == ForgotPasswordStep::Sending {
            return Err(AccountError::RequestInFlight);
        }
        if !is_valid_email(email) {
            return Err(AccountError::InvalidEmail);
        }
        *self = ForgotPasswordStep::Sending;
        Ok(ForgotPasswordRequest {
            email: email.trim().to_lowercase(),
        })
    }

    /// Apply the API outcome; ignored unless a request is in flight
    pub fn resolve(&mut self, outcome: Result<(), String>) {
        if *self != ForgotPasswordStep::Sending {
            return;
        }
        *self = match outcome {
            Ok(()) => ForgotPasswordStep::EmailSent,
            Err(e) => ForgotPasswordStep::Failed(e),
        };
    }

    pub fn reset(&mut self) {
        *self = ForgotPasswordStep::EnterEmail;
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, ForgotPasswordStep::Sending)
    }
}
