//! Hosted delivery-API provider
//!
//! Sends mail through a Resend-style HTTP delivery service: one JSON POST of
//! `{from, to, subject, html}` per message, authenticated with a bearer API
//! key. The service's error body is surfaced to the caller unchanged.

use super::provider::{EmailProvider, EmailProviderError};
use crate::domain::{EmailAddress, EmailMessage, EmailSendResult, HttpApiConfig};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delivery-API email provider
pub struct HttpApiProvider {
    client: Client,
    base_url: String,
    api_key: String,
    from_email: String,
    from_name: Option<String>,
}

#[derive(Serialize)]
struct SendPayload<'a> {
    from: String,
    to: Vec<String>,
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

#[derive(Deserialize)]
struct SendReceipt {
    id: Option<String>,
}

impl HttpApiProvider {
    /// Create a new provider from configuration
    pub fn from_config(config: &HttpApiConfig) -> Result<Self, EmailProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| EmailProviderError::InvalidConfiguration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
        })
    }

    fn build_from_address(&self) -> String {
        if let Some(name) = &self.from_name {
            format!("{} <{}>", name, self.from_email)
        } else {
            self.from_email.clone()
        }
    }

    fn format_recipient(addr: &EmailAddress) -> String {
        if let Some(name) = &addr.name {
            format!("{} <{}>", name, addr.email)
        } else {
            addr.email.clone()
        }
    }
}

#[async_trait]
impl EmailProvider for HttpApiProvider {
    async fn send(&self, message: &EmailMessage) -> Result<EmailSendResult, EmailProviderError> {
        let to: Vec<String> = message.to.iter().map(Self::format_recipient).collect();

        if to.is_empty() {
            return Err(EmailProviderError::InvalidConfiguration(
                "No recipients specified".to_string(),
            ));
        }

        let payload = SendPayload {
            from: self.build_from_address(),
            to,
            subject: &message.subject,
            html: &message.html_body,
            text: message.text_body.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    EmailProviderError::ConnectionError(e.to_string())
                } else {
                    EmailProviderError::SendFailed(e.to_string())
                }
            })?;

        match response.status() {
            status if status.is_success() => {
                let receipt = response.json::<SendReceipt>().await.ok();
                Ok(EmailSendResult::success(receipt.and_then(|r| r.id)))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let body = response.text().await.unwrap_or_default();
                Err(EmailProviderError::AuthenticationFailed(body))
            }
            StatusCode::TOO_MANY_REQUESTS => Err(EmailProviderError::RateLimited),
            status => {
                // Carry the API's error body through unmodified
                let body = response.text().await.unwrap_or_default();
                if body.is_empty() {
                    Err(EmailProviderError::SendFailed(status.to_string()))
                } else {
                    Err(EmailProviderError::SendFailed(body))
                }
            }
        }
    }

    async fn test_connection(&self) -> Result<(), EmailProviderError> {
        let response = self
            .client
            .get(format!("{}/domains", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| EmailProviderError::ConnectionError(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let body = response.text().await.unwrap_or_default();
                Err(EmailProviderError::AuthenticationFailed(body))
            }
            status => Err(EmailProviderError::ConnectionError(format!(
                "unexpected status {}",
                status
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> HttpApiConfig {
        HttpApiConfig {
            base_url: base_url.to_string(),
            api_key: "re_test_key".to_string(),
            from_email: "support@arcadiamarkets.com".to_string(),
            from_name: Some("Arcadia Markets".to_string()),
        }
    }

    fn test_message() -> EmailMessage {
        EmailMessage::new(
            EmailAddress::new("trader@example.com"),
            "Deposit Approved",
            "<p>Hello Alice,</p>",
        )
    }

    #[tokio::test]
    async fn test_send_posts_payload_and_returns_message_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("Authorization", "Bearer re_test_key"))
            .and(body_partial_json(json!({
                "from": "Arcadia Markets <support@arcadiamarkets.com>",
                "to": ["trader@example.com"],
                "subject": "Deposit Approved",
                "html": "<p>Hello Alice,</p>"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "email-123"})))
            .expect(1)
            .mount(&server)
            .await;

        let provider = HttpApiProvider::from_config(&test_config(&server.uri())).unwrap();
        let result = provider.send(&test_message()).await.unwrap();

        assert!(result.success);
        assert_eq!(result.message_id, Some("email-123".to_string()));
    }

    #[tokio::test]
    async fn test_send_surfaces_api_error_body_unchanged() {
        let server = MockServer::start().await;
        let error_body = r#"{"name":"validation_error","message":"Invalid `to` field"}"#;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(422).set_body_string(error_body))
            .mount(&server)
            .await;

        let provider = HttpApiProvider::from_config(&test_config(&server.uri())).unwrap();
        let result = provider.send(&test_message()).await;

        match result {
            Err(EmailProviderError::SendFailed(body)) => assert_eq!(body, error_body),
            other => panic!("Expected SendFailed with API body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_maps_unauthorized() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let provider = HttpApiProvider::from_config(&test_config(&server.uri())).unwrap();
        let result = provider.send(&test_message()).await;

        assert!(matches!(
            result,
            Err(EmailProviderError::AuthenticationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_send_maps_rate_limit() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let provider = HttpApiProvider::from_config(&test_config(&server.uri())).unwrap();
        let result = provider.send(&test_message()).await;

        assert!(matches!(result, Err(EmailProviderError::RateLimited)));
    }

    #[tokio::test]
    async fn test_send_no_recipients() {
        let server = MockServer::start().await;
        let provider = HttpApiProvider::from_config(&test_config(&server.uri())).unwrap();

        let message = EmailMessage {
            to: vec![],
            subject: "Test".to_string(),
            html_body: "<p>Test</p>".to_string(),
            text_body: None,
        };

        let result = provider.send(&message).await;
        match result {
            Err(EmailProviderError::InvalidConfiguration(msg)) => {
                assert!(msg.contains("No recipients"));
            }
            other => panic!("Expected InvalidConfiguration error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_connection_refused() {
        // Nothing listens on this port
        let provider = HttpApiProvider::from_config(&test_config("http://127.0.0.1:9")).unwrap();
        let result = provider.send(&test_message()).await;

        assert!(matches!(result, Err(EmailProviderError::ConnectionError(_))));
    }

    #[tokio::test]
    async fn test_send_without_from_name() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(body_partial_json(json!({"from": "support@arcadiamarkets.com"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "email-9"})))
            .mount(&server)
            .await;

        let config = HttpApiConfig {
            from_name: None,
            ..test_config(&server.uri())
        };
        let provider = HttpApiProvider::from_config(&config).unwrap();
        let result = provider.send(&test_message()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_connection_success() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/domains"))
            .and(header("Authorization", "Bearer re_test_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let provider = HttpApiProvider::from_config(&test_config(&server.uri())).unwrap();
        assert!(provider.test_connection().await.is_ok());
    }

    #[tokio::test]
    async fn test_connection_bad_key() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/domains"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let provider = HttpApiProvider::from_config(&test_config(&server.uri())).unwrap();
        let result = provider.test_connection().await;

        assert!(matches!(
            result,
            Err(EmailProviderError::AuthenticationFailed(_))
        ));
    }

    #[test]
    fn test_provider_name() {
        let provider = HttpApiProvider::from_config(&test_config("https://api.resend.com")).unwrap();
        assert_eq!(provider.provider_name(), "http");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let provider =
            HttpApiProvider::from_config(&test_config("https://api.resend.com/")).unwrap();
        assert_eq!(provider.base_url, "https://api.resend.com");
    }
}
