// src/speech/transcribe.rs
// Speech-to-text adapter. The upload is parked in a scoped temp file because
// the collaborator contract is path-in/text-out; the guard's drop removes the
// file on every exit path, including failure.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, multipart};
use serde_json::Value;
use tracing::debug;

use crate::config::BanterConfig;

/// Speech-to-text collaborator seam: audio file path in, transcription out.
#[async_trait]
pub trait Transcribe: Send + Sync {
    async fn transcribe(&self, path: &Path) -> Result<String>;
}

/// Run one transcription over an in-memory audio payload.
pub async fn transcribe_audio(provider: &dyn Transcribe, audio: &[u8]) -> Result<String> {
    let file = tempfile::Builder::new()
        .prefix("banter-audio-")
        .suffix(".wav")
        .tempfile()
        .context("failed to create temp audio file")?;

    tokio::fs::write(file.path(), audio)
        .await
        .context("failed to write temp audio file")?;

    provider.transcribe(file.path()).await
}

pub struct GroqWhisperClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GroqWhisperClient {
    pub fn new(config: &BanterConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.stt_timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.groq_base_url.clone(),
            api_key: config.groq_api_key.clone(),
            model: config.whisper_model.clone(),
        })
    }
}

#[async_trait]
impl Transcribe for GroqWhisperClient {
    async fn transcribe(&self, path: &Path) -> Result<String> {
        let audio = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read audio file {}", path.display()))?;

        debug!("Whisper request: model={} bytes={}", self.model, audio.len());

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.wav")
            .to_string();

        let form = multipart::Form::new()
            .part(
                "file",
                multipart::Part::bytes(audio)
                    .file_name(file_name)
                    .mime_str("audio/wav")?,
            )
            .text("model", self.model.clone());

        let response = self
            .client
            .post(format!("{}/v1/audio/transcriptions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "<no body>".into());
            return Err(anyhow!("Whisper API error {}: {}", status, error_text));
        }

        let raw = response.json::<Value>().await?;

        let text = raw["text"]
            .as_str()
            .ok_or_else(|| anyhow!("No text in transcription response"))?
            .to_string();

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    struct RecordingTranscriber {
        seen: Mutex<Option<(PathBuf, Vec<u8>)>>,
    }

    #[async_trait]
    impl Transcribe for RecordingTranscriber {
        async fn transcribe(&self, path: &Path) -> Result<String> {
            let bytes = tokio::fs::read(path).await?;
            *self.seen.lock().unwrap() = Some((path.to_path_buf(), bytes));
            Ok("hello there".to_string())
        }
    }

    struct FailingTranscriber {
        seen: Mutex<Option<PathBuf>>,
    }

    #[async_trait]
    impl Transcribe for FailingTranscriber {
        async fn transcribe(&self, path: &Path) -> Result<String> {
            *self.seen.lock().unwrap() = Some(path.to_path_buf());
            Err(anyhow!("model overloaded"))
        }
    }

    #[tokio::test]
    async fn payload_reaches_the_collaborator_and_temp_file_is_removed() {
        let provider = RecordingTranscriber {
            seen: Mutex::new(None),
        };

        let text = transcribe_audio(&provider, b"RIFFfake-audio").await.unwrap();
        assert_eq!(text, "hello there");

        let (path, bytes) = provider.seen.lock().unwrap().take().unwrap();
        assert_eq!(bytes, b"RIFFfake-audio");
        assert!(!path.exists(), "temp file should be gone after the call");
    }

    #[tokio::test]
    async fn temp_file_is_removed_on_failure_too() {
        let provider = FailingTranscriber {
            seen: Mutex::new(None),
        };

        let err = transcribe_audio(&provider, b"RIFFfake-audio").await;
        assert!(err.is_err());

        let path = provider.seen.lock().unwrap().take().unwrap();
        assert!(!path.exists(), "temp file should be gone after a failed call");
    }
}
