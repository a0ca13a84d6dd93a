// src/speech/mod.rs
// Voice out and voice in: synthesis of reply audio, transcription of user
// audio.

pub mod synthesis;
pub mod transcribe;

pub use synthesis::{ElevenLabsClient, SpeechSynthesis, synthesize_speech};
pub use transcribe::{GroqWhisperClient, Transcribe, transcribe_audio};
