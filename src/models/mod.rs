//! Model descriptors, directory caching and selection.

pub mod directory;
pub mod selector;

pub use directory::{ModelDirectoryCache, ModelLister};
pub use selector::ModelSelector;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Capability a model must declare to serve text generation.
pub const GENERATE_CONTENT: &str = "generateContent";

/// One generation endpoint offered by the primary provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub identifier: String,
    pub capabilities: BTreeSet<String>,
}

impl ModelDescriptor {
    pub fn new<I, S>(identifier: impl Into<String>, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifier: identifier.into(),
            capabilities: capabilities.into_iter().map(Into::into).collect(),
        }
    }

    pub fn supports_generation(&self) -> bool {
        self.capabilities.contains(GENERATE_CONTENT)
    }
}

/// Models available to one credential, in provider order.
///
/// An empty directory is a valid listing result, not a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelDirectory(Vec<ModelDescriptor>);

impl ModelDirectory {
    pub fn new(models: Vec<ModelDescriptor>) -> Self {
        Self(models)
    }

    pub fn models(&self) -> &[ModelDescriptor] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModelDescriptor> {
        self.0.iter()
    }
}

impl FromIterator<ModelDescriptor> for ModelDirectory {
    fn from_iter<T: IntoIterator<Item = ModelDescriptor>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ModelDirectory {
    type Item = &'a ModelDescriptor;
    type IntoIter = std::slice::Iter<'a, ModelDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
