//! # Storefront Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Error Categories                         │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │  Collaborators  │  │     Fetch               │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  DeliveryFailed │  │  FetchError { reason }  │ │
//! │  │  ConfigLoad     │  │                 │  │                         │ │
//! │  │  ConfigSave     │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for storefront operations.
pub type StorefrontResult<T> = Result<T, StorefrontError>;

/// Storefront error type.
#[derive(Debug, Error)]
pub enum StorefrontError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid storefront configuration.
    #[error("Invalid storefront configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Collaborator Errors
    // =========================================================================
    /// The mailer could not deliver a message.
    #[error("Failed to send email to {to}: {reason}")]
    DeliveryFailed { to: String, reason: String },
}

impl From<std::io::Error> for StorefrontError {
    fn from(err: std::io::Error) -> Self {
        StorefrontError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for StorefrontError {
    fn from(err: toml::de::Error) -> Self {
        StorefrontError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for StorefrontError {
    fn from(err: toml::ser::Error) -> Self {
        StorefrontError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Fetch Error
// =============================================================================

/// A rejected data fetch.
///
/// Callers read `reason` directly; Display prints it unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct FetchError {
    pub reason: String,
}

impl FetchError {
    pub fn new(reason: impl Into<String>) -> Self {
        FetchError {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StorefrontError::DeliveryFailed {
            to: "name@domain.com".to_string(),
            reason: "mailbox full".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to send email to name@domain.com: mailbox full"
        );
    }

    #[test]
    fn test_fetch_error_displays_reason() {
        let err = FetchError::new("Operation failed");
        assert_eq!(err.reason, "Operation failed");
        assert_eq!(err.to_string(), "Operation failed");
    }
}
