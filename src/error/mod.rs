//! Unified error handling for Arcadia Notify

use crate::email::provider::EmailProviderError;
use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, NotifyError>;

/// Notification error types
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The delivery backend reported an error. The provider error is carried
    /// unchanged; callers own retry and user-facing messaging.
    #[error("Delivery error: {0}")]
    Delivery(#[from] EmailProviderError),

    #[error("Hashing error: {0}")]
    Hash(String),

    #[error("Code generation error: {0}")]
    Otp(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
