// src/llm/mod.rs
// Response generation through the chat-completions collaborator.

mod groq;

pub use groq::GroqProvider;

use anyhow::Result;
use async_trait::async_trait;

use crate::persona::CLUELESS_PERSONA_PROMPT;

/// Language-generation collaborator seam.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// One chat completion: system instruction plus a single user message in,
    /// generated text out.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Wrap the user's text in the fixed prompt template and ask the provider for
/// a raw reply.
///
/// Failures are deliberately not contained here; the orchestrator decides the
/// user-visible outcome.
pub async fn generate(provider: &dyn LlmProvider, user_text: &str) -> Result<String> {
    let user = format!(
        "The user said: {user_text}. Try your best to help, even if you don't understand."
    );
    provider.complete(CLUELESS_PERSONA_PROMPT, &user).await
}
