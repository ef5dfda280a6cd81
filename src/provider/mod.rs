//! Provider adapters.
//!
//! Each adapter makes exactly one attempt per call and folds every failure
//! into a [`GenerationOutcome`]; nothing is raised past this boundary.

pub mod google;
pub mod http;
pub mod openai_compatible;

pub use google::{GoogleAdapter, GoogleProvider};
pub use openai_compatible::{OpenAiCompatibleAdapter, OpenAiCompatibleProvider};

use async_trait::async_trait;

use crate::types::GenerationOutcome;

/// A provider bound to its credential, ready to generate text.
#[async_trait]
pub trait GenerationAdapter: Send + Sync {
    /// Provider name (e.g., "google", "openai-compatible").
    fn provider_name(&self) -> &str;

    /// One generation attempt for `prompt`.
    async fn generate(&self, prompt: &str) -> GenerationOutcome;
}
