//! LLM client abstraction.
//!
//! A small trait over JSON-producing LLM backends so the plan generator can
//! run against a real endpoint in the daemon and a scripted fake in tests.
//! The HTTP client speaks both Ollama-style and OpenAI-compatible APIs,
//! selected explicitly by configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Which wire API the backend speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmBackend {
    Ollama,
    OpenAiCompatible,
}

/// LLM configuration, loaded from the daemon's config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_backend")]
    pub backend: LlmBackend,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_backend() -> LlmBackend {
    LlmBackend::Ollama
}

fn default_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_timeout_secs() -> u64 {
    // Plan generation asks for a long structured answer
    90
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            backend: default_backend(),
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// LLM errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    #[error("LLM is disabled in configuration")]
    Disabled,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("LLM returned empty response")]
    EmptyResponse,
}

/// A backend that turns prompts into one JSON object.
pub trait LlmClient: Send + Sync {
    fn complete_json(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<serde_json::Value, LlmError>;
}

/// Real client over HTTP.
pub struct HttpLlmClient {
    config: LlmConfig,
    client: reqwest::blocking::Client,
}

impl HttpLlmClient {
    pub fn new(config: LlmConfig) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { config, client })
    }

    fn map_send_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            LlmError::Timeout(self.config.timeout_secs)
        } else {
            LlmError::Http(format!("Request failed: {}", e))
        }
    }

    fn call_ollama(&self, prompt: &str) -> Result<serde_json::Value, LlmError> {
        let url = format!("{}/api/generate", self.config.endpoint);

        let request_body = serde_json::json!({
            "model": self.config.model,
            "prompt": prompt,
            "stream": false,
            "format": "json",
        });

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            return Err(LlmError::Http(format!("HTTP {} from Ollama", response.status())));
        }

        let response_json: serde_json::Value = response
            .json()
            .map_err(|e| LlmError::InvalidJson(format!("Failed to parse response: {}", e)))?;

        let text = response_json
            .get("response")
            .and_then(|v| v.as_str())
            .ok_or(LlmError::EmptyResponse)?;

        serde_json::from_str(text)
            .map_err(|e| LlmError::InvalidJson(format!("LLM output is not valid JSON: {}", e)))
    }

    fn call_openai_compatible(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<serde_json::Value, LlmError> {
        let url = format!("{}/v1/chat/completions", self.config.endpoint);

        let request_body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt},
            ],
            "response_format": {"type": "json_object"},
        });

        let mut request = self.client.post(&url).json(&request_body);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            return Err(LlmError::Http(format!(
                "HTTP {} from OpenAI-compatible API",
                response.status()
            )));
        }

        let response_json: serde_json::Value = response
            .json()
            .map_err(|e| LlmError::InvalidJson(format!("Failed to parse response: {}", e)))?;

        let text = response_json
            .get("choices")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("message"))
            .and_then(|v| v.get("content"))
            .and_then(|v| v.as_str())
            .ok_or(LlmError::EmptyResponse)?;

        serde_json::from_str(text)
            .map_err(|e| LlmError::InvalidJson(format!("LLM output is not valid JSON: {}", e)))
    }
}

impl LlmClient for HttpLlmClient {
    fn complete_json(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<serde_json::Value, LlmError> {
        if !self.config.enabled {
            return Err(LlmError::Disabled);
        }

        debug!(backend = ?self.config.backend, model = %self.config.model, "calling LLM backend");

        match self.config.backend {
            LlmBackend::Ollama => {
                // Ollama has no system role on /api/generate; fold the
                // system prompt into one prompt string.
                let prompt = format!("{}\n\n{}", system_prompt, user_prompt);
                self.call_ollama(&prompt)
            }
            LlmBackend::OpenAiCompatible => self.call_openai_compatible(system_prompt, user_prompt),
        }
    }
}

/// Fake client for tests: returns scripted responses in order, repeating
/// the last one.
pub struct FakeLlmClient {
    responses: std::sync::Mutex<Vec<Result<serde_json::Value, LlmError>>>,
    call_count: std::sync::Mutex<usize>,
}

impl FakeLlmClient {
    pub fn new(responses: Vec<Result<serde_json::Value, LlmError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses),
            call_count: std::sync::Mutex::new(0),
        }
    }

    pub fn always_valid(json: serde_json::Value) -> Self {
        Self::new(vec![Ok(json)])
    }

    pub fn always_error(error: LlmError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl LlmClient for FakeLlmClient {
    fn complete_json(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<serde_json::Value, LlmError> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        if responses.len() == 1 {
            responses[0].clone()
        } else {
            responses.remove(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_config_default() {
        let config = LlmConfig::default();
        assert!(config.enabled);
        assert_eq!(config.backend, LlmBackend::Ollama);
        assert_eq!(config.endpoint, "http://localhost:11434");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_secs, 90);
    }

    #[test]
    fn test_config_deserializes_with_partial_toml() {
        let config: LlmConfig =
            toml::from_str("endpoint = \"http://10.0.0.2:8080\"\nbackend = \"open_ai_compatible\"")
                .unwrap();
        assert_eq!(config.endpoint, "http://10.0.0.2:8080");
        assert_eq!(config.backend, LlmBackend::OpenAiCompatible);
        assert!(config.enabled);
    }

    #[test]
    fn test_fake_client_always_valid() {
        let json = serde_json::json!({"executiveSummary": "ok"});
        let client = FakeLlmClient::always_valid(json.clone());

        let result = client.complete_json("system", "user");
        assert_eq!(result.unwrap(), json);
        assert_eq!(client.call_count(), 1);

        let result2 = client.complete_json("system", "user");
        assert!(result2.is_ok());
        assert_eq!(client.call_count(), 2);
    }

    #[test]
    fn test_fake_client_always_error() {
        let client = FakeLlmClient::always_error(LlmError::Disabled);
        assert!(client.complete_json("s", "u").is_err());
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn test_fake_client_multiple_responses() {
        let client = FakeLlmClient::new(vec![
            Ok(serde_json::json!({"n": 1})),
            Err(LlmError::Timeout(90)),
        ]);

        assert!(client.complete_json("", "").is_ok());
        assert!(client.complete_json("", "").is_err());
        assert_eq!(client.call_count(), 2);
    }
}
