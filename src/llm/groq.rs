// src/llm/groq.rs
// Groq chat-completions provider (OpenAI-compatible).

use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use super::LlmProvider;
use crate::config::BanterConfig;

pub struct GroqProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: usize,
}

impl GroqProvider {
    pub fn new(config: &BanterConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.llm_timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.groq_base_url.clone(),
            api_key: config.groq_api_key.clone(),
            model: config.chat_model.clone(),
            temperature: config.chat_temperature,
            max_tokens: config.chat_max_tokens,
        })
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        // High temperature on purpose: variety over determinism.
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        debug!("Groq request: model={}", self.model);

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "<no body>".into());
            return Err(anyhow!("Groq API error {}: {}", status, error_text));
        }

        let raw = response.json::<Value>().await?;

        let content = raw["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow!("No content in Groq response"))?
            .to_string();

        Ok(content)
    }
}
