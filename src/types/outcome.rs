//! Generation outcomes returned by provider adapters and the resolver.

use std::fmt;

use crate::error::RecoverySuggestion;

/// Result of a single provider attempt. Exactly one variant applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Usable, non-empty generated text.
    Text(String),
    /// No credential was configured; no request was made.
    NoKey,
    /// The model directory was empty or offered nothing selectable.
    NoModel,
    /// Rate or billing limit reached.
    QuotaExceeded,
    /// Network, parsing or unexpected-response failure.
    TransportError(String),
}

impl GenerationOutcome {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Suggested recovery for failure outcomes; `None` for `Text`.
    pub fn recovery_suggestion(&self) -> Option<RecoverySuggestion> {
        match self {
            Self::Text(_) => None,
            Self::NoKey => Some(RecoverySuggestion::CheckCredentials),
            Self::NoModel => Some(RecoverySuggestion::CheckConfiguration),
            Self::QuotaExceeded => Some(RecoverySuggestion::RetryLater),
            Self::TransportError(_) => Some(RecoverySuggestion::RetryWithBackoff),
        }
    }

    /// Whether re-invoking the resolver later may succeed without
    /// any configuration change.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::QuotaExceeded | Self::TransportError(_))
    }
}

impl fmt::Display for GenerationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::NoKey => f.write_str("no API key configured"),
            Self::NoModel => f.write_str("no generation model available"),
            Self::QuotaExceeded => f.write_str("quota exceeded"),
            Self::TransportError(message) => write!(f, "transport error: {message}"),
        }
    }
}

/// What the resolver hands back to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedResult {
    Text(String),
    /// Neither provider produced text. Holds the primary outcome first,
    /// then the secondary one, both verbatim.
    BothFailed(GenerationOutcome, GenerationOutcome),
}

impl ResolvedResult {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::BothFailed(..) => None,
        }
    }

    /// Take the generated text, or build a substitute from both failures.
    ///
    /// Callers use this to fall back to the local template generator.
    pub fn text_or_else<F>(self, fallback: F) -> String
    where
        F: FnOnce(&GenerationOutcome, &GenerationOutcome) -> String,
    {
        match self {
            Self::Text(text) => text,
            Self::BothFailed(primary, secondary) => fallback(&primary, &secondary),
        }
    }
}

impl fmt::Display for ResolvedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::BothFailed(primary, secondary) => write!(
                f,
                "all providers failed (primary: {primary}; secondary: {secondary})"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_outcomes_carry_recovery_suggestions() {
        assert_eq!(GenerationOutcome::Text("x".into()).recovery_suggestion(), None);
        assert_eq!(
            GenerationOutcome::NoKey.recovery_suggestion(),
            Some(RecoverySuggestion::CheckCredentials)
        );
        assert_eq!(
            GenerationOutcome::NoModel.recovery_suggestion(),
            Some(RecoverySuggestion::CheckConfiguration)
        );
        assert_eq!(
            GenerationOutcome::QuotaExceeded.recovery_suggestion(),
            Some(RecoverySuggestion::RetryLater)
        );
        assert!(GenerationOutcome::TransportError("reset".into()).is_retryable());
        assert!(!GenerationOutcome::NoKey.is_retryable());
    }

    #[test]
    fn both_failed_display_names_both_outcomes() {
        let result = ResolvedResult::BothFailed(
            GenerationOutcome::TransportError("a".into()),
            GenerationOutcome::QuotaExceeded,
        );
        assert_eq!(
            result.to_string(),
            "all providers failed (primary: transport error: a; secondary: quota exceeded)"
        );
    }

    #[test]
    fn text_or_else_only_runs_fallback_on_failure() {
        let ok = ResolvedResult::Text("generated".into());
        assert_eq!(ok.text_or_else(|_, _| unreachable!()), "generated");

        let failed = ResolvedResult::BothFailed(GenerationOutcome::NoKey, GenerationOutcome::NoKey);
        let text = failed.text_or_else(|p, s| format!("{p} / {s}"));
        assert_eq!(text, "no API key configured / no API key configured");
    }
}
