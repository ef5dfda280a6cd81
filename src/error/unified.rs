//! Unified error classification and recovery.

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Network,
    Timeout,
    Server,
    Api,
    Configuration,
    Serialization,
    InvalidInput,
    Unknown,
}

/// Suggested recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    /// Transient failure; a later attempt may succeed.
    RetryWithBackoff,
    /// Quota or billing limit; wait before trying again.
    RetryLater,
    /// A credential is missing or rejected.
    CheckCredentials,
    /// The environment offers nothing usable (e.g. no models).
    CheckConfiguration,
}
