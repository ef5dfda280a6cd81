//! Landing-page template substitution.

use tracing::warn;

use super::prompts::seo_description;
use crate::error::{KonnectError, Result};
use crate::generation::Resolver;
use crate::types::ResolvedResult;

pub const LOCATION_PLACEHOLDER: &str = "{LOCATION}";
pub const PRICE_PLACEHOLDER: &str = "{PRICE}";
pub const DESC_PLACEHOLDER: &str = "{DESC}";

/// Values substituted into a pasted HTML template.
#[derive(Debug, Clone, Default)]
pub struct LandingPage {
    pub project: String,
    pub location: String,
    pub price: String,
    /// Project name already present in the template, replaced by `project`.
    pub old_name: Option<String>,
}

/// A rendered page plus the description lookup, if one was needed.
#[derive(Debug, Clone)]
pub struct RenderedLanding {
    pub html: String,
    pub description: Option<ResolvedResult>,
}

impl LandingPage {
    /// Replace the old project name, `{LOCATION}` and `{PRICE}`.
    ///
    /// `{DESC}` is left in place. A blank old name is ignored.
    pub fn substitute(&self, template: &str) -> Result<String> {
        if template.trim().is_empty() {
            return Err(KonnectError::InvalidArgument(
                "paste an HTML template first".into(),
            ));
        }

        let mut html = match self.old_name.as_deref().filter(|old| !old.is_empty()) {
            Some(old) => template.replace(old, &self.project),
            None => template.to_string(),
        };
        html = html
            .replace(LOCATION_PLACEHOLDER, &self.location)
            .replace(PRICE_PLACEHOLDER, &self.price);
        Ok(html)
    }

    /// Substitute, then fill `{DESC}` with a generated meta description.
    ///
    /// If generation fails on both providers the placeholder is blanked and
    /// the failure is returned in [`RenderedLanding::description`].
    pub async fn render(&self, template: &str, resolver: &Resolver) -> Result<RenderedLanding> {
        let html = self.substitute(template)?;
        if !html.contains(DESC_PLACEHOLDER) {
            return Ok(RenderedLanding {
                html,
                description: None,
            });
        }

        let resolved = resolver
            .resolve(&seo_description(&self.project, &self.location))
            .await;
        let description = match &resolved {
            ResolvedResult::Text(text) => text.trim().to_string(),
            ResolvedResult::BothFailed(..) => {
                warn!(%resolved, "meta description unavailable");
                String::new()
            }
        };

        Ok(RenderedLanding {
            html: html.replace(DESC_PLACEHOLDER, &description),
            description: Some(resolved),
        })
    }

    /// Download name for the rendered page.
    pub fn file_name(&self) -> String {
        let stem: String = self
            .project
            .trim()
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        if stem.is_empty() {
            "landing.html".to_string()
        } else {
            format!("{stem}.html")
        }
    }
}
