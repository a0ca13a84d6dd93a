// src/speech/synthesis.rs
// Text-to-speech via ElevenLabs. The collaborator streams the clip as binary
// chunks; they are stitched back together in receipt order before encoding.

use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use bytes::Bytes;
use futures::StreamExt;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

use crate::config::BanterConfig;

/// Speech-synthesis collaborator seam: text in, audio chunks out in receipt
/// order.
#[async_trait]
pub trait SpeechSynthesis: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<Bytes>>;
}

/// Synthesize `text` into a base64 MP3 payload.
///
/// Absence is the failure signal: a broken voice never aborts the reply that
/// carries it.
pub async fn synthesize_speech(provider: &dyn SpeechSynthesis, text: &str) -> Option<String> {
    match provider.synthesize(text).await {
        Ok(chunks) => {
            let mut audio = Vec::new();
            for chunk in &chunks {
                audio.extend_from_slice(chunk);
            }
            Some(BASE64.encode(audio))
        }
        Err(e) => {
            warn!("Speech synthesis failed: {e:#}");
            None
        }
    }
}

pub struct ElevenLabsClient {
    client: Client,
    base_url: String,
    api_key: String,
    voice_id: String,
    model_id: String,
    output_format: String,
    stability: f32,
    similarity_boost: f32,
    style: f32,
    use_speaker_boost: bool,
}

impl ElevenLabsClient {
    pub fn new(config: &BanterConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.tts_timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.eleven_base_url.clone(),
            api_key: config.eleven_api_key.clone(),
            voice_id: config.voice_id.clone(),
            model_id: config.tts_model.clone(),
            output_format: config.tts_output_format.clone(),
            stability: config.voice_stability,
            similarity_boost: config.voice_similarity_boost,
            style: config.voice_style,
            use_speaker_boost: config.voice_speaker_boost,
        })
    }
}

#[async_trait]
impl SpeechSynthesis for ElevenLabsClient {
    async fn synthesize(&self, text: &str) -> Result<Vec<Bytes>> {
        // Voice shaping is fixed configuration, not tunable per call.
        let body = json!({
            "text": text,
            "model_id": self.model_id,
            "voice_settings": {
                "stability": self.stability,
                "similarity_boost": self.similarity_boost,
                "style": self.style,
                "use_speaker_boost": self.use_speaker_boost,
            },
        });

        debug!("ElevenLabs request: voice={} chars={}", self.voice_id, text.len());

        let response = self
            .client
            .post(format!(
                "{}/v1/text-to-speech/{}",
                self.base_url, self.voice_id
            ))
            .query(&[("output_format", self.output_format.as_str())])
            .header("xi-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "<no body>".into());
            return Err(anyhow!("ElevenLabs API error {}: {}", status, error_text));
        }

        let mut stream = response.bytes_stream();
        let mut chunks = Vec::new();
        while let Some(chunk) = stream.next().await {
            chunks.push(chunk?);
        }

        Ok(chunks)
    }
}
