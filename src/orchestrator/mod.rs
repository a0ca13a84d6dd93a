// src/orchestrator/mod.rs
// The one place that knows both pipelines. Generation and parsing are
// strictly sequential; the GIF lookup and the voice clip are independent of
// each other and run concurrently before the reply is assembled.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::gif::{GifSearch, fetch_gif};
use crate::llm::{self, LlmProvider};
use crate::reply::{self, Reply};
use crate::speech::synthesis::{SpeechSynthesis, synthesize_speech};
use crate::speech::transcribe::{Transcribe, transcribe_audio};

#[derive(Debug, Error)]
pub enum RespondError {
    /// The language-generation call itself failed. Unlike the GIF and voice
    /// collaborators there is no safe default to substitute; the HTTP layer
    /// answers 502.
    #[error("language generation failed: {0}")]
    Generation(#[source] anyhow::Error),
}

/// Holds one long-lived handle per collaborator, constructed at startup and
/// injected. No other state: every request is self-contained.
pub struct Orchestrator {
    llm: Arc<dyn LlmProvider>,
    gifs: Arc<dyn GifSearch>,
    tts: Arc<dyn SpeechSynthesis>,
    stt: Arc<dyn Transcribe>,
}

impl Orchestrator {
    pub fn new(
        llm: Arc<dyn LlmProvider>,
        gifs: Arc<dyn GifSearch>,
        tts: Arc<dyn SpeechSynthesis>,
        stt: Arc<dyn Transcribe>,
    ) -> Self {
        Self {
            llm,
            gifs,
            tts,
            stt,
        }
    }

    /// Full reply pipeline: generate, parse, then fetch the GIF and the voice
    /// clip concurrently and assemble the reply.
    pub async fn respond(&self, user_text: &str) -> Result<Reply, RespondError> {
        let raw = llm::generate(self.llm.as_ref(), user_text)
            .await
            .map_err(RespondError::Generation)?;

        let parsed = reply::parse(&raw);
        debug!(
            "parsed reply: {} message chars, gif query {:?}",
            parsed.message.len(),
            parsed.gif_query
        );

        let (gif, audio) = tokio::join!(
            fetch_gif(self.gifs.as_ref(), &parsed.gif_query),
            synthesize_speech(self.tts.as_ref(), &parsed.message),
        );

        info!(
            "reply assembled via {} (audio: {})",
            self.llm.name(),
            if audio.is_some() { "yes" } else { "absent" }
        );

        Ok(Reply {
            message: parsed.message,
            gif,
            audio,
        })
    }

    /// Transcription-only pipeline.
    pub async fn transcribe(&self, audio: &[u8]) -> anyhow::Result<String> {
        transcribe_audio(self.stt.as_ref(), audio).await
    }
}
