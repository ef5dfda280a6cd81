//! Unified resolver: primary provider, then secondary, then give up.

use tracing::{debug, info, warn};

use crate::config::KonnectConfig;
use crate::provider::{GenerationAdapter, GoogleAdapter, OpenAiCompatibleAdapter};
use crate::types::{GenerationOutcome, ResolvedResult};

/// Tries the primary adapter and falls back to the secondary one.
///
/// Calls are strictly sequential. The secondary is never consulted when
/// the primary returns text, so a request never pays for two providers.
/// `resolve` cannot fail: every path ends in a [`ResolvedResult`].
pub struct Resolver {
    primary: Box<dyn GenerationAdapter>,
    secondary: Box<dyn GenerationAdapter>,
}

impl Resolver {
    pub fn new(
        primary: impl GenerationAdapter + 'static,
        secondary: impl GenerationAdapter + 'static,
    ) -> Self {
        Self {
            primary: Box::new(primary),
            secondary: Box::new(secondary),
        }
    }

    /// Gemini primary and OpenAI-compatible secondary, both from `config`.
    pub fn from_config(config: &KonnectConfig) -> Self {
        Self::new(
            GoogleAdapter::from_config(config),
            OpenAiCompatibleAdapter::from_config(config),
        )
    }

    pub async fn resolve(&self, prompt: &str) -> ResolvedResult {
        debug!(provider = self.primary.provider_name(), "resolving with primary");
        let primary = match self.primary.generate(prompt).await {
            GenerationOutcome::Text(text) => return ResolvedResult::Text(text),
            other => other,
        };

        info!(
            primary = self.primary.provider_name(),
            secondary = self.secondary.provider_name(),
            outcome = %primary,
            "primary provider failed; falling back"
        );
        let secondary = match self.secondary.generate(prompt).await {
            GenerationOutcome::Text(text) => return ResolvedResult::Text(text),
            other => other,
        };

        warn!(%primary, %secondary, "all providers failed");
        ResolvedResult::BothFailed(primary, secondary)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;

    struct StubAdapter {
        name: &'static str,
        outcome: GenerationOutcome,
        calls: Arc<AtomicUsize>,
    }

    impl StubAdapter {
        fn new(name: &'static str, outcome: GenerationOutcome) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let stub = Self {
                name,
                outcome,
                calls: calls.clone(),
            };
            (stub, calls)
        }
    }

    #[async_trait]
    impl GenerationAdapter for StubAdapter {
        fn provider_name(&self) -> &str {
            self.name
        }

        async fn generate(&self, _prompt: &str) -> GenerationOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn primary_text_short_circuits_secondary() {
        let (primary, primary_calls) = StubAdapter::new("p", GenerationOutcome::Text("x".into()));
        let (secondary, secondary_calls) =
            StubAdapter::new("s", GenerationOutcome::Text("y".into()));
        let resolver = Resolver::new(primary, secondary);

        assert_eq!(resolver.resolve("prompt").await, ResolvedResult::Text("x".into()));
        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn quota_on_primary_falls_back_to_secondary() {
        let (primary, _) = StubAdapter::new("p", GenerationOutcome::QuotaExceeded);
        let (secondary, secondary_calls) =
            StubAdapter::new("s", GenerationOutcome::Text("y".into()));
        let resolver = Resolver::new(primary, secondary);

        assert_eq!(resolver.resolve("prompt").await, ResolvedResult::Text("y".into()));
        assert_eq!(secondary_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn total_failure_preserves_both_outcomes() {
        let (primary, _) = StubAdapter::new("p", GenerationOutcome::TransportError("a".into()));
        let (secondary, _) = StubAdapter::new("s", GenerationOutcome::QuotaExceeded);
        let resolver = Resolver::new(primary, secondary);

        assert_eq!(
            resolver.resolve("prompt").await,
            ResolvedResult::BothFailed(
                GenerationOutcome::TransportError("a".into()),
                GenerationOutcome::QuotaExceeded,
            )
        );
    }

    #[tokio::test]
    async fn each_resolve_attempts_each_adapter_at_most_once() {
        let (primary, primary_calls) = StubAdapter::new("p", GenerationOutcome::NoModel);
        let (secondary, secondary_calls) = StubAdapter::new("s", GenerationOutcome::NoKey);
        let resolver = Resolver::new(primary, secondary);

        resolver.resolve("one").await;
        resolver.resolve("two").await;

        assert_eq!(primary_calls.load(Ordering::SeqCst), 2);
        assert_eq!(secondary_calls.load(Ordering::SeqCst), 2);
    }
}
