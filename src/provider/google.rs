//! Google Gemini provider: model listing and the primary adapter.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::KonnectConfig;
use crate::error::{KonnectError, Result};
use crate::models::{ModelDescriptor, ModelDirectory, ModelDirectoryCache, ModelLister, ModelSelector};
use crate::types::{Credential, GenerationOutcome};
use crate::util::timeout::with_timeout;

use super::http::{shared_client, status_to_error};
use super::GenerationAdapter;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Listing stops after this many pages even if the API keeps paging.
const MAX_LIST_PAGES: usize = 20;

/// Raw Gemini REST access.
pub struct GoogleProvider {
    base_url: String,
    timeout: Duration,
}

impl GoogleProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// One primary generation attempt, fully classified.
    ///
    /// Empty credential short-circuits to `NoKey` before any request.
    /// The model is resolved through `cache` and [`ModelSelector`].
    pub async fn generate(
        &self,
        prompt: &str,
        credential: &Credential,
        cache: &ModelDirectoryCache,
    ) -> GenerationOutcome {
        if credential.is_empty() {
            return GenerationOutcome::NoKey;
        }

        let directory = match cache.fetch(credential).await {
            Ok(directory) => directory,
            Err(err) => {
                warn!(error = %err, "Google model listing failed");
                return GenerationOutcome::TransportError(format!("model listing failed: {err}"));
            }
        };
        let Some(model) = ModelSelector::select(&directory) else {
            warn!("Google model directory is empty");
            return GenerationOutcome::NoModel;
        };

        match self.generate_content(model, prompt, credential).await {
            Ok(text) if !text.trim().is_empty() => GenerationOutcome::Text(text),
            Ok(_) => GenerationOutcome::TransportError("Gemini returned no text".into()),
            Err(err) => {
                let outcome = classify_failure(&err);
                warn!(model, error = %err, ?outcome, "Google generation failed");
                outcome
            }
        }
    }

    /// Issue a single `generateContent` call and return the joined text.
    pub async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
        credential: &Credential,
    ) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".into()),
                parts: vec![GeminiPart {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        debug!(model, "Google generate_content");

        let data: GeminiResponse = with_timeout("gemini generateContent", self.timeout, async {
            let resp = shared_client()
                .post(&url)
                .headers(api_key_headers(credential)?)
                .json(&body)
                .send()
                .await?;

            let status = resp.status().as_u16();
            if status != 200 {
                let body_text = resp.text().await.unwrap_or_default();
                return Err(status_to_error(status, &body_text));
            }
            let raw = resp.text().await?;
            Ok(serde_json::from_str(&raw)?)
        })
        .await?;

        if let Some(reason) = data.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(KonnectError::api(200, format!("prompt blocked: {reason}")));
        }

        let candidate = data
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| KonnectError::api(200, "No candidates in Gemini response"))?;

        Ok(candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl ModelLister for GoogleProvider {
    async fn list_models(&self, credential: &Credential) -> Result<ModelDirectory> {
        let url = format!("{}/models", self.base_url);
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        for _ in 0..MAX_LIST_PAGES {
            debug!(page = ?page_token, "Google list_models");

            let page: GeminiModelPage = with_timeout("gemini models.list", self.timeout, async {
                let mut request = shared_client()
                    .get(&url)
                    .headers(api_key_headers(credential)?)
                    .query(&[("pageSize", "1000")]);
                if let Some(token) = page_token.as_deref() {
                    request = request.query(&[("pageToken", token)]);
                }
                let resp = request.send().await?;

                let status = resp.status().as_u16();
                if status != 200 {
                    let body_text = resp.text().await.unwrap_or_default();
                    return Err(status_to_error(status, &body_text));
                }
                let raw = resp.text().await?;
                Ok(serde_json::from_str(&raw)?)
            })
            .await?;

            models.extend(page.models.into_iter().map(GeminiModel::into_descriptor));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(count = models.len(), "Google models listed");
        Ok(ModelDirectory::new(models))
    }
}

/// Primary adapter: a [`GoogleProvider`] bound to one credential and the
/// session's directory cache.
pub struct GoogleAdapter {
    provider: Arc<GoogleProvider>,
    credential: Credential,
    cache: Arc<ModelDirectoryCache>,
}

impl GoogleAdapter {
    pub fn new(
        provider: Arc<GoogleProvider>,
        credential: Credential,
        cache: Arc<ModelDirectoryCache>,
    ) -> Self {
        Self {
            provider,
            credential,
            cache,
        }
    }

    /// Build the provider, its directory cache and the adapter from config.
    pub fn from_config(config: &KonnectConfig) -> Self {
        let provider = Arc::new(GoogleProvider::new(
            config.primary_base_url(),
            config.timeout(),
        ));
        let cache = Arc::new(ModelDirectoryCache::new(provider.clone()));
        Self::new(provider, config.primary_key().clone(), cache)
    }

    pub fn cache(&self) -> &Arc<ModelDirectoryCache> {
        &self.cache
    }

    /// Model the next generation would use, listing models if needed.
    pub async fn selected_model(&self) -> Result<Option<String>> {
        if self.credential.is_empty() {
            return Err(KonnectError::Configuration("Missing GEMINI_API_KEY".into()));
        }
        let directory = self.cache.fetch(&self.credential).await?;
        Ok(ModelSelector::select(&directory).map(str::to_string))
    }

    pub async fn directory(&self) -> Result<Arc<ModelDirectory>> {
        if self.credential.is_empty() {
            return Err(KonnectError::Configuration("Missing GEMINI_API_KEY".into()));
        }
        self.cache.fetch(&self.credential).await
    }
}

#[async_trait]
impl GenerationAdapter for GoogleAdapter {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(&self, prompt: &str) -> GenerationOutcome {
        self.provider
            .generate(prompt, &self.credential, &self.cache)
            .await
    }
}

/// Best-effort quota detection for Gemini failures.
///
/// Structured signals (HTTP 429, `RESOURCE_EXHAUSTED`) are caught by
/// [`status_to_error`]; anything else falls back to matching the message
/// text, which depends on provider wording and is not exhaustive.
pub fn classify_failure(err: &KonnectError) -> GenerationOutcome {
    match err {
        KonnectError::RateLimited(_) => GenerationOutcome::QuotaExceeded,
        KonnectError::Api { status: 429, .. } => GenerationOutcome::QuotaExceeded,
        other => {
            let message = other.to_string();
            if quota_pattern().is_match(&message) {
                GenerationOutcome::QuotaExceeded
            } else {
                GenerationOutcome::TransportError(message)
            }
        }
    }
}

/// The key travels in `x-goog-api-key` so request URLs stay credential-free.
fn api_key_headers(credential: &Credential) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let mut value = HeaderValue::from_str(credential.expose())
        .map_err(|_| KonnectError::Configuration("API key contains invalid characters".into()))?;
    value.set_sensitive(true);
    headers.insert(API_KEY_HEADER, value);
    Ok(headers)
}

fn quota_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)quota|\b429\b|rate[ _-]?limit|resource[ _-]?exhausted")
            .expect("quota pattern is a valid regex")
    })
}

// Gemini wire types

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiModelPage {
    #[serde(default)]
    models: Vec<GeminiModel>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiModel {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

impl GeminiModel {
    fn into_descriptor(self) -> ModelDescriptor {
        let identifier = self
            .name
            .strip_prefix("models/")
            .map(str::to_string)
            .unwrap_or(self.name);
        ModelDescriptor::new(identifier, self.supported_generation_methods)
    }
}
