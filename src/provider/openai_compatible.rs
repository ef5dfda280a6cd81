//! OpenAI-compatible chat-completion provider, used as the secondary adapter.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::KonnectConfig;
use crate::error::KonnectError;
use crate::types::{Credential, GenerationOutcome};
use crate::util::timeout::with_timeout;

use super::http::{bearer_headers, shared_client};
use super::GenerationAdapter;

/// Chat-completion endpoint with a fixed model and temperature.
pub struct OpenAiCompatibleProvider {
    base_url: String,
    model: String,
    temperature: f64,
    timeout: Duration,
}

impl OpenAiCompatibleProvider {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        temperature: f64,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            temperature,
            timeout,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One chat-completion attempt with `prompt` as the only user message.
    ///
    /// Empty credential short-circuits to `NoKey` without a request.
    pub async fn generate(&self, prompt: &str, credential: &Credential) -> GenerationOutcome {
        if credential.is_empty() {
            return GenerationOutcome::NoKey;
        }

        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: [ChatRequestMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        debug!(model = %self.model, "OpenAI-compatible chat completion");

        let exchange = with_timeout("chat completion", self.timeout, async {
            let resp = shared_client()
                .post(&url)
                .headers(bearer_headers(credential.expose()))
                .json(&body)
                .send()
                .await?;
            let status = resp.status().as_u16();
            let text = resp.text().await?;
            Ok::<_, KonnectError>((status, text))
        })
        .await;

        let outcome = match exchange {
            Ok((200, text)) => parse_completion(&text),
            Ok((429, _)) => GenerationOutcome::QuotaExceeded,
            Ok((status, text)) => GenerationOutcome::TransportError(format!("HTTP {status}: {text}")),
            Err(err) => GenerationOutcome::TransportError(err.to_string()),
        };

        if !outcome.is_text() {
            warn!(model = %self.model, ?outcome, "OpenAI-compatible generation failed");
        }
        outcome
    }
}

fn parse_completion(body: &str) -> GenerationOutcome {
    let response: ChatResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(err) => {
            return GenerationOutcome::TransportError(format!("malformed response: {err}"));
        }
    };

    match response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
    {
        Some(text) if !text.trim().is_empty() => GenerationOutcome::Text(text),
        _ => GenerationOutcome::TransportError(
            "malformed response: no choices[0].message.content".into(),
        ),
    }
}

/// Secondary adapter: an [`OpenAiCompatibleProvider`] bound to one credential.
pub struct OpenAiCompatibleAdapter {
    provider: OpenAiCompatibleProvider,
    credential: Credential,
}

impl OpenAiCompatibleAdapter {
    pub fn new(provider: OpenAiCompatibleProvider, credential: Credential) -> Self {
        Self {
            provider,
            credential,
        }
    }

    pub fn from_config(config: &KonnectConfig) -> Self {
        let provider = OpenAiCompatibleProvider::new(
            config.secondary_base_url(),
            config.secondary_model(),
            config.temperature(),
            config.timeout(),
        );
        Self::new(provider, config.secondary_key().clone())
    }
}

#[async_trait]
impl GenerationAdapter for OpenAiCompatibleAdapter {
    fn provider_name(&self) -> &str {
        "openai-compatible"
    }

    async fn generate(&self, prompt: &str) -> GenerationOutcome {
        self.provider.generate(prompt, &self.credential).await
    }
}

// Chat-completion wire types

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatRequestMessage<'a>; 1],
    temperature: f64,
}

#[derive(Serialize)]
struct ChatRequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}
