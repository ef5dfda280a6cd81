//! Error types for konnectops.
//!
//! Provider adapters never surface these past their boundary; they fold
//! everything into a [`GenerationOutcome`](crate::types::GenerationOutcome).
//! `KonnectError` covers the plumbing around them: directory listing,
//! configuration loading and input validation.

pub mod unified;

pub use unified::{ErrorCategory, RecoverySuggestion};

use thiserror::Error;

/// Primary error type for konnectops plumbing.
#[derive(Error, Debug)]
pub enum KonnectError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<reqwest::Error> for KonnectError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs can carry credentials in their query string.
        Self::Network(err.without_url())
    }
}

impl KonnectError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RateLimited(_) => ErrorCategory::RateLimit,
            Self::Network(_) => ErrorCategory::Network,
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Configuration(_) | Self::Toml(_) => ErrorCategory::Configuration,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::InvalidArgument(_) => ErrorCategory::InvalidInput,
            Self::Io(_) => ErrorCategory::Unknown,
        }
    }

    /// Whether this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit
                | ErrorCategory::Network
                | ErrorCategory::Timeout
                | ErrorCategory::Server
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, KonnectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status() {
        let err = KonnectError::api(404, "Not found");
        assert_eq!(err.to_string(), "API error (status 404): Not found");
    }

    #[test]
    fn status_codes_map_to_categories() {
        assert_eq!(
            KonnectError::api(403, "denied").category(),
            ErrorCategory::Authentication
        );
        assert_eq!(
            KonnectError::api(429, "slow down").category(),
            ErrorCategory::RateLimit
        );
        assert_eq!(KonnectError::api(503, "down").category(), ErrorCategory::Server);
        assert_eq!(KonnectError::api(400, "bad").category(), ErrorCategory::Api);
    }

    #[test]
    fn only_transient_categories_are_retryable() {
        assert!(KonnectError::Timeout(8000).is_retryable());
        assert!(KonnectError::api(500, "boom").is_retryable());
        assert!(!KonnectError::Configuration("missing".into()).is_retryable());
        assert!(!KonnectError::InvalidArgument("years".into()).is_retryable());
    }
}
