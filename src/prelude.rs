//! Convenience re-exports for common use.

pub use crate::config::KonnectConfig;
pub use crate::content::{local_blog, BlogBrief, ContentType, ImageStyle, LandingPage};
pub use crate::error::{KonnectError, Result};
pub use crate::generation::Resolver;
pub use crate::models::{ModelDescriptor, ModelDirectory, ModelDirectoryCache, ModelSelector};
pub use crate::provider::GenerationAdapter;
pub use crate::types::{Credential, GenerationOutcome, ResolvedResult};
