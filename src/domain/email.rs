//! Email delivery domain types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Email provider configuration - supports multiple backend types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmailProviderConfig {
    /// No email provider configured
    #[default]
    None,

    /// Hosted delivery API (HTTP + JSON)
    Http(HttpApiConfig),

    /// SMTP email provider
    Smtp(SmtpConfig),
}

impl EmailProviderConfig {
    /// Check if email is configured (not None)
    pub fn is_configured(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Get the provider type as a string
    pub fn provider_type(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Http(_) => "http",
            Self::Smtp(_) => "smtp",
        }
    }
}

/// Configuration for the hosted email-delivery API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct HttpApiConfig {
    /// API base URL, e.g. "https://api.resend.com"
    #[serde(default = "default_api_base_url")]
    #[validate(length(min = 1, max = 255))]
    pub base_url: String,

    /// Bearer API key issued by the delivery service
    #[validate(length(min = 1))]
    pub api_key: String,

    /// From email address (must be a verified sender)
    #[validate(email)]
    pub from_email: String,

    /// From name (optional)
    pub from_name: Option<String>,
}

/// SMTP configuration for email sending
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct SmtpConfig {
    /// SMTP server host
    #[validate(length(min = 1, max = 255))]
    pub host: String,

    /// SMTP server port (typically 587 for TLS, 465 for SSL, 25 for unencrypted)
    pub port: u16,

    /// Username for authentication (optional)
    pub username: Option<String>,

    /// Password for authentication (optional)
    pub password: Option<String>,

    /// Use TLS encryption
    #[serde(default = "default_true")]
    pub use_tls: bool,

    /// From email address
    #[validate(email)]
    pub from_email: String,

    /// From name (optional)
    pub from_name: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_api_base_url() -> String {
    "https://api.resend.com".to_string()
}

/// Email address with optional display name
#[derive(Debug, Clone)]
pub struct EmailAddress {
    pub email: String,
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// Email message to be sent
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: Vec<EmailAddress>,
    pub subject: String,
    pub html_body: String,
    pub text_body: Option<String>,
}

impl EmailMessage {
    pub fn new(to: EmailAddress, subject: impl Into<String>, html_body: impl Into<String>) -> Self {
        Self {
            to: vec![to],
            subject: subject.into(),
            html_body: html_body.into(),
            text_body: None,
        }
    }

    pub fn with_text_body(mut self, text_body: impl Into<String>) -> Self {
        self.text_body = Some(text_body.into());
        self
    }
}

/// Result of sending an email
#[derive(Debug)]
pub struct EmailSendResult {
    pub success: bool,
    pub message_id: Option<String>,
    pub error: Option<String>,
}

impl EmailSendResult {
    pub fn success(message_id: Option<String>) -> Self {
        Self {
            success: true,
            message_id,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message_id: None,
            error: Some(error.into()),
        }
    }
}
