//! Notification mailer
//!
//! [`Mailer`] owns the fixed routing policy of the platform: user-facing
//! confirmations go to the caller-supplied address, administrative alerts go
//! to the configured operations mailbox. Each named sender fixes its subject
//! and title and interpolates the caller's fields verbatim into a small HTML
//! fragment; the generic [`Mailer::send`] wraps that fragment in the branded
//! shell and makes exactly one delivery attempt.
//!
//! A delivery failure is returned to the caller unchanged. There is no retry,
//! no backoff, and no classification beyond what the backend itself reports.

use crate::config::NotifyConfig;
use crate::crypto::OtpIssuer;
use crate::domain::{
    AccountDetails, EmailAddress, EmailMessage, KycNotice, OtpDelivery, RegistrationNotice,
    SubscriptionNotice, SubscriptionReceipt, TransferApproval, TransferNotice, VerificationNotice,
    WithdrawalReceipt, WithdrawalRequest,
};
use crate::email::{build_provider, render_shell, EmailProvider};
use crate::error::Result;
use std::sync::Arc;

/// Transactional and administrative notification sender
pub struct Mailer {
    app_name: String,
    ops_address: String,
    provider: Arc<dyn EmailProvider>,
    otp: OtpIssuer,
}

impl Mailer {
    /// Create a mailer with explicit dependencies
    pub fn new(config: &NotifyConfig, provider: Arc<dyn EmailProvider>, otp: OtpIssuer) -> Self {
        Self {
            app_name: config.app_name.clone(),
            ops_address: config.ops_address.clone(),
            provider,
            otp,
        }
    }

    /// Create a mailer from configuration, building the delivery backend and
    /// a fresh code issuer
    pub fn from_config(config: &NotifyConfig) -> Result<Self> {
        let provider: Arc<dyn EmailProvider> = Arc::from(build_provider(&config.provider)?);
        let otp = OtpIssuer::new(config.app_name.clone(), config.from_address.clone())?;
        Ok(Self::new(config, provider, otp))
    }

    /// The code issuer backing the change-password confirmation
    pub fn otp_issuer(&self) -> &OtpIssuer {
        &self.otp
    }

    /// Render the shell around a body fragment and dispatch it.
    ///
    /// One attempt; a backend error surfaces to the caller unchanged.
    pub async fn send(
        &self,
        to: EmailAddress,
        subject: &str,
        title: &str,
        body_html: &str,
    ) -> Result<()> {
        let html = render_shell(&self.app_name, title, body_html);
        tracing::debug!(to = %to.email, subject, "dispatching notification");

        let message = EmailMessage::new(to, subject, html);
        let result = self.provider.send(&message).await?;
        tracing::debug!(message_id = ?result.message_id, "notification accepted by backend");
        Ok(())
    }

    fn ops(&self) -> EmailAddress {
        EmailAddress::new(&self.ops_address)
    }

    // ------------------------------------------------------------------
    // User-facing confirmations
    // ------------------------------------------------------------------

    /// Email-confirmation code for a new signup
    pub async fn send_welcome(&self, input: &OtpDelivery) -> Result<()> {
        let subject = format!("Welcome to {}", self.app_name);
        let body = format!(
            r#"<p>Confirm your email to secure your account.</p>
<p style="font-size:18px;font-weight:bold;">OTP: {}</p>"#,
            input.code
        );
        self.send(EmailAddress::new(&input.to), &subject, &subject, &body)
            .await
    }

    /// Re-deliver the signup confirmation code
    pub async fn resend_welcome(&self, input: &OtpDelivery) -> Result<()> {
        self.send_welcome(input).await
    }

    /// Password-reset code requested by the user
    pub async fn send_password_otp(&self, input: &OtpDelivery) -> Result<()> {
        let body = format!(
            r#"<p>Password reset requested.</p>
<p style="font-size:18px;font-weight:bold;">OTP: {}</p>"#,
            input.code
        );
        self.send(
            EmailAddress::new(&input.to),
            "Password Reset",
            "Password Reset Request",
            &body,
        )
        .await
    }

    /// Change-password confirmation; the code is derived by this mailer's
    /// own issuer rather than supplied by the caller
    pub async fn send_change_password(&self, to: &str) -> Result<()> {
        let code = self.otp.generate()?;
        let body = format!(
            r#"<p>Your OTP:</p>
<p style="font-size:18px;font-weight:bold;">{}</p>"#,
            code
        );
        self.send(
            EmailAddress::new(to),
            "Change Password",
            "Change Password",
            &body,
        )
        .await
    }

    /// Deposit approved for the user's account
    pub async fn send_deposit_approval(&self, input: &TransferApproval) -> Result<()> {
        let body = format!(
            r#"<p>Hello {},</p>
<p>${} via {} approved.</p>
<p>{}</p>"#,
            input.from, input.amount, input.method, input.timestamp
        );
        self.send(
            EmailAddress::new(&input.to),
            "Deposit Approved",
            "Deposit Approved",
            &body,
        )
        .await
    }

    /// Settled deposit receipt for the user
    pub async fn send_deposit_receipt(&self, input: &TransferApproval) -> Result<()> {
        let body = format!(
            r#"<p>Hello {},</p>
<p>${} via {}</p>
<p>{}</p>"#,
            input.from, input.amount, input.method, input.timestamp
        );
        self.send(
            EmailAddress::new(&input.to),
            "Deposit Confirmation",
            "Deposit Confirmation",
            &body,
        )
        .await
    }

    /// Settled withdrawal receipt for the user
    pub async fn send_withdrawal_receipt(&self, input: &WithdrawalReceipt) -> Result<()> {
        let body = format!(
            r#"<p>Hello {},</p>
<p>${} via {}</p>
<p>{}</p>
<p>{}</p>"#,
            input.from, input.amount, input.method, input.address, input.timestamp
        );
        self.send(
            EmailAddress::new(&input.to),
            "Withdrawal Confirmation",
            "Withdrawal Confirmation",
            &body,
        )
        .await
    }

    /// Subscription confirmation for the user
    pub async fn send_subscription_receipt(&self, input: &SubscriptionReceipt) -> Result<()> {
        let body = format!(
            r#"<p>Hello {},</p>
<p>${} subscribed to {}</p>
<p>{}</p>"#,
            input.from, input.sub_amount, input.sub_name, input.timestamp
        );
        self.send(
            EmailAddress::new(&input.to),
            "Subscription Confirmation",
            "Subscription Confirmed",
            &body,
        )
        .await
    }

    /// Issued account credentials for the user
    pub async fn send_account_details(&self, input: &AccountDetails) -> Result<()> {
        let body = format!(
            r#"<p>Hello {},</p>
<p>Email: {}</p>
<p>Password: {}</p>"#,
            input.first_name, input.to, input.password
        );
        self.send(
            EmailAddress::new(&input.to),
            "Account Details",
            "Your Account Details",
            &body,
        )
        .await
    }

    // ------------------------------------------------------------------
    // Operational alerts
    // ------------------------------------------------------------------

    /// A user completed account verification
    pub async fn send_verification_alert(&self, input: &VerificationNotice) -> Result<()> {
        let body = format!(
            r#"<p>{} verified their account.</p>
<a href="{}">View document</a>"#,
            input.from, input.url
        );
        self.send(self.ops(), "Account Verification", "Account Verified", &body)
            .await
    }

    /// A deposit landed and needs review
    pub async fn send_deposit_alert(&self, input: &TransferNotice) -> Result<()> {
        let body = format!(
            r#"<p>{} sent ${} via {}.</p>
<p>{}</p>"#,
            input.from, input.amount, input.method, input.timestamp
        );
        self.send(self.ops(), "Deposit Notification", "Deposit Alert", &body)
            .await
    }

    /// A bank deposit was requested
    pub async fn send_bank_deposit_request(&self, input: &TransferNotice) -> Result<()> {
        let body = format!(
            r#"<p>{} requested bank deposit of ${} via {}.</p>
<p>{}</p>"#,
            input.from, input.amount, input.method, input.timestamp
        );
        self.send(
            self.ops(),
            "Bank Deposit Request",
            "Bank Deposit Request",
            &body,
        )
        .await
    }

    /// A new user signed up
    pub async fn send_registration_alert(&self, input: &RegistrationNotice) -> Result<()> {
        let body = format!(
            "<p>{} ({}) just signed up.</p>",
            input.first_name, input.email
        );
        self.send(self.ops(), "New Registration", "New User Signup", &body)
            .await
    }

    /// A withdrawal awaits review
    pub async fn send_withdrawal_request(&self, input: &WithdrawalRequest) -> Result<()> {
        let body = format!(
            r#"<p>{} requested ${}</p>
<p>Method: {}</p>
<p>Address: {}</p>"#,
            input.from, input.amount, input.method, input.address
        );
        self.send(
            self.ops(),
            "Withdrawal Request",
            "Withdrawal Request",
            &body,
        )
        .await
    }

    /// A user subscribed to a plan
    pub async fn send_subscription_alert(&self, input: &SubscriptionNotice) -> Result<()> {
        let body = format!(
            r#"<p>{} subscribed ${} to {}</p>
<p>{}</p>"#,
            input.from, input.sub_amount, input.sub_name, input.timestamp
        );
        self.send(self.ops(), "Plan Subscription", "Plan Subscription", &body)
            .await
    }

    /// A user submitted KYC documents
    pub async fn send_kyc_alert(&self, input: &KycNotice) -> Result<()> {
        let body = format!("<p>{} submitted KYC documents.</p>", input.first_name);
        self.send(self.ops(), "KYC Alert", "KYC Submitted", &body)
            .await
    }
}
