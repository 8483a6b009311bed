//! Notification payloads supplied by calling services
//!
//! Amounts and timestamps arrive pre-formatted: the mailer interpolates them
//! verbatim and performs no numeric or date parsing. Fields are not validated
//! here; an unusable recipient surfaces as whatever the delivery backend
//! reports.

use serde::Deserialize;

/// A one-time code to deliver to a user (welcome confirmation, password reset)
#[derive(Debug, Clone, Deserialize)]
pub struct OtpDelivery {
    pub to: String,
    pub code: String,
}

/// A user completed account verification; routed to operations
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationNotice {
    pub from: String,
    pub url: String,
}

/// A deposit-shaped event (deposit alert, bank deposit request)
#[derive(Debug, Clone, Deserialize)]
pub struct TransferNotice {
    pub from: String,
    pub amount: String,
    pub method: String,
    pub timestamp: String,
}

/// A deposit outcome addressed to the user (approval, confirmation)
#[derive(Debug, Clone, Deserialize)]
pub struct TransferApproval {
    pub to: String,
    pub from: String,
    pub amount: String,
    pub method: String,
    pub timestamp: String,
}

/// A new signup; routed to operations
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationNotice {
    pub first_name: String,
    pub email: String,
}

/// A withdrawal awaiting review; routed to operations
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalRequest {
    pub from: String,
    pub amount: String,
    pub method: String,
    pub address: String,
}

/// A settled withdrawal addressed to the user
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalReceipt {
    pub to: String,
    pub from: String,
    pub amount: String,
    pub method: String,
    pub address: String,
    pub timestamp: String,
}

/// A plan subscription event; routed to operations
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionNotice {
    pub from: String,
    pub sub_amount: String,
    pub sub_name: String,
    pub timestamp: String,
}

/// A plan subscription confirmation addressed to the user
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionReceipt {
    pub to: String,
    pub from: String,
    pub sub_amount: String,
    pub sub_name: String,
    pub timestamp: String,
}

/// Issued account credentials addressed to the user
#[derive(Debug, Clone, Deserialize)]
pub struct AccountDetails {
    pub to: String,
    pub first_name: String,
    pub password: String,
}

/// A KYC document submission; routed to operations
#[derive(Debug, Clone, Deserialize)]
pub struct KycNotice {
    pub first_name: String,
}
