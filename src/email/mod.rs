//! Email rendering and delivery
//!
//! This module provides the branded template shell and the delivery backends:
//! - Hosted delivery API (HTTP + JSON, the platform default)
//! - SMTP (using lettre)

pub mod http;
pub mod provider;
pub mod smtp;
pub mod template;

pub use http::HttpApiProvider;
pub use provider::{EmailProvider, EmailProviderError};
pub use smtp::SmtpEmailProvider;
pub use template::{render_shell, TemplateEngine};

use crate::domain::EmailProviderConfig;
use crate::error::{NotifyError, Result};

/// Build a delivery backend from configuration
pub fn build_provider(config: &EmailProviderConfig) -> Result<Box<dyn EmailProvider>> {
    match config {
        EmailProviderConfig::None => Err(NotifyError::Config(
            "email provider not configured".to_string(),
        )),
        EmailProviderConfig::Http(http_config) => {
            Ok(Box::new(HttpApiProvider::from_config(http_config)?))
        }
        EmailProviderConfig::Smtp(smtp_config) => {
            Ok(Box::new(SmtpEmailProvider::from_config(smtp_config)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HttpApiConfig, SmtpConfig};

    #[test]
    fn test_build_http_provider() {
        let config = EmailProviderConfig::Http(HttpApiConfig {
            base_url: "https://api.resend.com".to_string(),
            api_key: "re_test".to_string(),
            from_email: "support@arcadiamarkets.com".to_string(),
            from_name: None,
        });

        let provider = build_provider(&config).unwrap();
        assert_eq!(provider.provider_name(), "http");
    }

    #[test]
    fn test_build_smtp_provider() {
        let config = EmailProviderConfig::Smtp(SmtpConfig {
            host: "localhost".to_string(),
            port: 1025,
            username: None,
            password: None,
            use_tls: false,
            from_email: "support@arcadiamarkets.com".to_string(),
            from_name: None,
        });

        let provider = build_provider(&config).unwrap();
        assert_eq!(provider.provider_name(), "smtp");
    }

    #[test]
    fn test_build_none_provider_fails() {
        let result = build_provider(&EmailProviderConfig::None);
        assert!(matches!(result, Err(NotifyError::Config(_))));
    }
}
