//! Cryptographic utilities for Arcadia Notify

pub mod otp;
pub mod password;

pub use otp::OtpIssuer;
pub use password::CredentialHasher;
