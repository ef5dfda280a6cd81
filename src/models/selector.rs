//! Picking a generation model out of a directory.

use super::ModelDirectory;

/// Chooses which model the primary adapter talks to.
pub struct ModelSelector;

impl ModelSelector {
    /// First model declaring `generateContent`; otherwise the first model
    /// in provider order; `None` for an empty directory.
    ///
    /// The first-model fallback keeps things working against a provider
    /// whose capability names we do not recognize.
    pub fn select(directory: &ModelDirectory) -> Option<&str> {
        directory
            .iter()
            .find(|model| model.supports_generation())
            .or_else(|| directory.models().first())
            .map(|model| model.identifier.as_str())
    }
}
