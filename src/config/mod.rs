//! Configuration management for Arcadia Notify

use crate::domain::{EmailProviderConfig, HttpApiConfig, SmtpConfig};
use anyhow::{Context, Result};
use std::env;

/// Notification configuration
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// Brand name used in subjects and the shell footer
    pub app_name: String,
    /// Fixed sender address for every outgoing email
    pub from_address: String,
    /// Fixed recipient for internal operational alerts
    pub ops_address: String,
    /// Delivery backend configuration
    pub provider: EmailProviderConfig,
}

impl NotifyConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let app_name =
            env::var("NOTIFY_APP_NAME").unwrap_or_else(|_| "Arcadia Markets".to_string());
        let from_address = env::var("NOTIFY_FROM_ADDRESS")
            .unwrap_or_else(|_| "support@arcadiamarkets.com".to_string());
        // Operational alerts go to the support mailbox unless split out
        let ops_address = env::var("NOTIFY_OPS_ADDRESS").unwrap_or_else(|_| from_address.clone());

        let provider = match env::var("EMAIL_PROVIDER")
            .unwrap_or_else(|_| "http".to_string())
            .as_str()
        {
            "http" => EmailProviderConfig::Http(HttpApiConfig {
                base_url: env::var("EMAIL_API_BASE_URL")
                    .unwrap_or_else(|_| "https://api.resend.com".to_string()),
                api_key: env::var("EMAIL_API_KEY").context("EMAIL_API_KEY is required")?,
                from_email: from_address.clone(),
                from_name: Some(app_name.clone()),
            }),
            "smtp" => EmailProviderConfig::Smtp(SmtpConfig {
                host: env::var("SMTP_HOST").context("SMTP_HOST is required")?,
                port: env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "587".to_string())
                    .parse()
                    .context("Invalid SMTP_PORT")?,
                username: env::var("SMTP_USERNAME").ok(),
                password: env::var("SMTP_PASSWORD").ok(),
                use_tls: env::var("SMTP_USE_TLS")
                    .map(|s| s.to_lowercase() != "false")
                    .unwrap_or(true),
                from_email: from_address.clone(),
                from_name: Some(app_name.clone()),
            }),
            "none" => EmailProviderConfig::None,
            other => anyhow::bail!("Unknown EMAIL_PROVIDER: {}", other),
        };

        Ok(Self {
            app_name,
            from_address,
            ops_address,
            provider,
        })
    }
}
