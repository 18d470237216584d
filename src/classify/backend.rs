//! Model backends for classification.
//!
//! Two HTTP backends are supported:
//!
//! | Backend | Endpoint | Reply field |
//! |---------|----------|-------------|
//! | [`OllamaBackend`] | local `/api/generate` | `response` |
//! | [`OpenRouterBackend`] | OpenRouter chat completions | `choices[0].message.content` |
//!
//! Both request deterministic output (`temperature: 0`) and trim the reply.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, instrument};

use super::{ClassifyError, Result};

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_OLLAMA_MODEL: &str = "phi";
pub const DEFAULT_OPENROUTER_MODEL: &str = "openai/gpt-4o-mini";

const SYSTEM_PROMPT: &str = "You are a strict JSON classification engine.";

/// A text-completion model reachable by the classifier.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Send `prompt` and return the model's raw text reply.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Which backend to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    OpenRouter,
    Ollama,
}

impl std::str::FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openrouter" => Ok(Self::OpenRouter),
            "ollama" | "local" => Ok(Self::Ollama),
            other => Err(format!("unknown backend '{other}' (expected openrouter or ollama)")),
        }
    }
}

/// Backend selection and connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub backend: BackendKind,
    /// Model name; `None` picks the backend's default.
    pub model: Option<String>,
    pub ollama_url: String,
    pub openrouter_url: String,
    /// OpenRouter API key. Usually supplied via `OPENROUTER_API_KEY`.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    /// Total attempts per classification (first call plus retries).
    pub max_attempts: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            model: None,
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            openrouter_url: DEFAULT_OPENROUTER_URL.to_string(),
            api_key: None,
            timeout_secs: 30,
            max_attempts: 2,
        }
    }
}

impl ModelConfig {
    /// Model name after applying the backend default.
    pub fn model_name(&self) -> &str {
        match (&self.model, self.backend) {
            (Some(model), _) => model,
            (None, BackendKind::Ollama) => DEFAULT_OLLAMA_MODEL,
            (None, BackendKind::OpenRouter) => DEFAULT_OPENROUTER_MODEL,
        }
    }
}

/// Build the backend described by `config`.
pub fn from_config(config: &ModelConfig) -> Result<Box<dyn ModelBackend>> {
    let client = http_client(config.timeout_secs)?;
    let model = config.model_name().to_string();

    Ok(match config.backend {
        BackendKind::Ollama => Box::new(OllamaBackend {
            client,
            url: config.ollama_url.clone(),
            model,
        }),
        BackendKind::OpenRouter => {
            let api_key = config
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty())
                .ok_or(ClassifyError::MissingApiKey("openrouter"))?;
            Box::new(OpenRouterBackend {
                client,
                url: config.openrouter_url.clone(),
                model,
                api_key,
            })
        }
    })
}

fn http_client(timeout_secs: u64) -> Result<Client> {
    Ok(Client::builder()
        .use_rustls_tls()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}

/// POST a JSON body and return the decoded JSON reply.
async fn post_json(
    backend: &'static str,
    request: reqwest::RequestBuilder,
    body: &Value,
) -> Result<Value> {
    let response = request.json(body).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClassifyError::Status {
            backend,
            status: status.as_u16(),
            body,
        });
    }

    response.json().await.map_err(|e| ClassifyError::InvalidResponse {
        backend,
        reason: e.to_string(),
    })
}

/// Local model served by Ollama.
pub struct OllamaBackend {
    client: Client,
    url: String,
    model: String,
}

impl OllamaBackend {
    pub fn new(url: impl Into<String>, model: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout_secs)?,
            url: url.into(),
            model: model.into(),
        })
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": { "temperature": 0 }
        })
    }

    fn extract_reply(reply: &Value) -> Result<String> {
        reply["response"]
            .as_str()
            .map(|s| s.trim().to_string())
            .ok_or_else(|| ClassifyError::InvalidResponse {
                backend: "ollama",
                reason: "missing 'response' field".to_string(),
            })
    }
}

#[async_trait]
impl ModelBackend for OllamaBackend {
    fn name(&self) -> &'static str {
        "ollama"
    }

    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn complete(&self, prompt: &str) -> Result<String> {
        debug!(url = %self.url, "Calling Ollama");
        let reply = post_json(
            self.name(),
            self.client.post(&self.url),
            &self.request_body(prompt),
        )
        .await?;
        Self::extract_reply(&reply)
    }
}

/// Hosted model via the OpenRouter chat completions API.
pub struct OpenRouterBackend {
    client: Client,
    url: String,
    model: String,
    api_key: String,
}

impl OpenRouterBackend {
    pub fn new(
        url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout_secs)?,
            url: url.into(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ],
            "temperature": 0
        })
    }

    fn extract_reply(reply: &Value) -> Result<String> {
        reply["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .ok_or_else(|| ClassifyError::InvalidResponse {
                backend: "openrouter",
                reason: "missing 'choices[0].message.content'".to_string(),
            })
    }
}

#[async_trait]
impl ModelBackend for OpenRouterBackend {
    fn name(&self) -> &'static str {
        "openrouter"
    }

    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn complete(&self, prompt: &str) -> Result<String> {
        debug!(url = %self.url, "Calling OpenRouter");
        let request = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json");
        let reply = post_json(self.name(), request, &self.request_body(prompt)).await?;
        Self::extract_reply(&reply)
    }
}
