//! Email provider trait and error types

use crate::domain::{EmailMessage, EmailSendResult};
use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a delivery backend
#[derive(Error, Debug)]
pub enum EmailProviderError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// A delivery backend capable of sending one email per call.
///
/// Implementations make exactly one attempt; retry and backoff policy belongs
/// to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send an email message
    async fn send(&self, message: &EmailMessage) -> Result<EmailSendResult, EmailProviderError>;

    /// Test connectivity and credentials against the backend
    async fn test_connection(&self) -> Result<(), EmailProviderError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmailAddress;

    #[tokio::test]
    async fn test_mock_email_provider() {
        let mut mock = MockEmailProvider::new();

        mock.expect_provider_name().returning(|| "mock");

        mock.expect_test_connection().returning(|| Ok(()));

        mock.expect_send()
            .returning(|_| Ok(EmailSendResult::success(Some("msg-123".to_string()))));

        assert_eq!(mock.provider_name(), "mock");
        assert!(mock.test_connection().await.is_ok());

        let message = EmailMessage::new(
            EmailAddress::new("trader@example.com"),
            "Test",
            "<p>Hello</p>",
        );
        let result = mock.send(&message).await.unwrap();
        assert!(result.success);
    }

    #[test]
    fn test_email_provider_error_display() {
        let errors = vec![
            EmailProviderError::ConnectionError("timeout".to_string()),
            EmailProviderError::AuthenticationFailed("bad api key".to_string()),
            EmailProviderError::SendFailed("recipient rejected".to_string()),
            EmailProviderError::RateLimited,
            EmailProviderError::InvalidConfiguration("missing base url".to_string()),
        ];

        for err in errors {
            let msg = err.to_string();
            assert!(!msg.is_empty());
        }
    }
}
