//! SMTP email provider implementation using lettre

use super::provider::{EmailProvider, EmailProviderError};
use crate::domain::{EmailAddress, EmailMessage, EmailSendResult, SmtpConfig};
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// SMTP-based email provider
pub struct SmtpEmailProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_email: String,
    from_name: Option<String>,
}

fn to_mailbox(email: &str, name: Option<&str>) -> Result<Mailbox, EmailProviderError> {
    let formatted = if let Some(name) = name {
        format!("{} <{}>", name, email)
    } else {
        email.to_string()
    };

    formatted.parse().map_err(|e| {
        EmailProviderError::InvalidConfiguration(format!("Invalid address {}: {}", email, e))
    })
}

impl SmtpEmailProvider {
    /// Create a new SMTP provider from configuration
    pub fn from_config(config: &SmtpConfig) -> Result<Self, EmailProviderError> {
        let mut builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| EmailProviderError::InvalidConfiguration(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };

        builder = builder.port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
        })
    }

    fn classify(error_msg: String) -> EmailProviderError {
        if error_msg.contains("authentication") || error_msg.contains("AUTH") {
            EmailProviderError::AuthenticationFailed(error_msg)
        } else if error_msg.contains("connection") || error_msg.contains("timeout") {
            EmailProviderError::ConnectionError(error_msg)
        } else {
            EmailProviderError::SendFailed(error_msg)
        }
    }
}

#[async_trait]
impl EmailProvider for SmtpEmailProvider {
    async fn send(&self, message: &EmailMessage) -> Result<EmailSendResult, EmailProviderError> {
        if message.to.is_empty() {
            return Err(EmailProviderError::InvalidConfiguration(
                "No recipients specified".to_string(),
            ));
        }

        let from = to_mailbox(&self.from_email, self.from_name.as_deref())?;

        let mut builder = Message::builder().from(from).subject(&message.subject);
        for EmailAddress { email, name } in &message.to {
            builder = builder.to(to_mailbox(email, name.as_deref())?);
        }

        // Multipart only when a plain-text alternative is supplied
        let email = if let Some(text_body) = &message.text_body {
            builder
                .multipart(
                    MultiPart::alternative()
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_PLAIN)
                                .body(text_body.clone()),
                        )
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_HTML)
                                .body(message.html_body.clone()),
                        ),
                )
                .map_err(|e| EmailProviderError::SendFailed(e.to_string()))?
        } else {
            builder
                .header(ContentType::TEXT_HTML)
                .body(message.html_body.clone())
                .map_err(|e| EmailProviderError::SendFailed(e.to_string()))?
        };

        match self.transport.send(email).await {
            Ok(response) => {
                let message_id = response.message().next().map(|s| s.to_string());
                Ok(EmailSendResult::success(message_id))
            }
            Err(e) => Err(Self::classify(e.to_string())),
        }
    }

    async fn test_connection(&self) -> Result<(), EmailProviderError> {
        self.transport
            .test_connection()
            .await
            .map(|_| ())
            .map_err(|e| {
                let error_msg = e.to_string();
                if error_msg.contains("authentication") || error_msg.contains("AUTH") {
                    EmailProviderError::AuthenticationFailed(error_msg)
                } else {
                    EmailProviderError::ConnectionError(error_msg)
                }
            })
    }

    fn provider_name(&self) -> &'static str {
        "smtp"
    }
}
