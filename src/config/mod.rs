// src/config/mod.rs
// All tunables come from the environment (.env supported). Provider
// credentials are required and checked at startup; everything else defaults.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct BanterConfig {
    // ── Provider credentials
    pub groq_api_key: String,
    pub eleven_api_key: String,
    pub giphy_api_key: String,

    // ── Language generation
    pub groq_base_url: String,
    pub chat_model: String,
    pub chat_temperature: f32,
    pub chat_max_tokens: usize,

    // ── Transcription
    pub whisper_model: String,

    // ── Speech synthesis
    pub eleven_base_url: String,
    pub voice_id: String,
    pub tts_model: String,
    pub tts_output_format: String,
    pub voice_stability: f32,
    pub voice_similarity_boost: f32,
    pub voice_style: f32,
    pub voice_speaker_boost: bool,

    // ── GIF search
    pub giphy_base_url: String,
    pub gif_limit: usize,
    pub gif_rating: String,

    // ── Timeouts (in seconds, one per collaborator)
    pub llm_timeout: u64,
    pub stt_timeout: u64,
    pub tts_timeout: u64,
    pub gif_timeout: u64,

    // ── Server
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

// Values may carry inline comments and stray whitespace; strip both before
// parsing, and fall back to the default on parse failure.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

// Credentials are read as-is and never echoed anywhere.
fn secret_env(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

impl BanterConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            groq_api_key: secret_env("GROQ_API_KEY"),
            eleven_api_key: secret_env("ELEVEN_API_KEY"),
            giphy_api_key: secret_env("GIPHY_API_KEY"),
            groq_base_url: env_var_or("GROQ_BASE_URL", "https://api.groq.com/openai".to_string()),
            chat_model: env_var_or("BANTER_CHAT_MODEL", "llama3-70b-8192".to_string()),
            chat_temperature: env_var_or("BANTER_CHAT_TEMPERATURE", 1.2),
            chat_max_tokens: env_var_or("BANTER_CHAT_MAX_TOKENS", 250),
            whisper_model: env_var_or("BANTER_WHISPER_MODEL", "whisper-large-v3".to_string()),
            eleven_base_url: env_var_or("ELEVEN_BASE_URL", "https://api.elevenlabs.io".to_string()),
            voice_id: env_var_or("BANTER_VOICE_ID", "pNInz6obpgDQGcFmaJgB".to_string()),
            tts_model: env_var_or("BANTER_TTS_MODEL", "eleven_turbo_v2_5".to_string()),
            tts_output_format: env_var_or("BANTER_TTS_OUTPUT_FORMAT", "mp3_22050_32".to_string()),
            voice_stability: env_var_or("BANTER_VOICE_STABILITY", 0.3),
            voice_similarity_boost: env_var_or("BANTER_VOICE_SIMILARITY_BOOST", 0.8),
            voice_style: env_var_or("BANTER_VOICE_STYLE", 1.0),
            voice_speaker_boost: env_var_or("BANTER_VOICE_SPEAKER_BOOST", true),
            giphy_base_url: env_var_or("GIPHY_BASE_URL", "https://api.giphy.com".to_string()),
            gif_limit: env_var_or("BANTER_GIF_LIMIT", 10),
            gif_rating: env_var_or("BANTER_GIF_RATING", "pg".to_string()),
            llm_timeout: env_var_or("BANTER_LLM_TIMEOUT", 30),
            stt_timeout: env_var_or("BANTER_STT_TIMEOUT", 60),
            tts_timeout: env_var_or("BANTER_TTS_TIMEOUT", 30),
            gif_timeout: env_var_or("BANTER_GIF_TIMEOUT", 10),
            host: env_var_or("BANTER_HOST", "0.0.0.0".to_string()),
            port: env_var_or("BANTER_PORT", 3001),
            log_level: env_var_or("BANTER_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Fail fast when a provider credential is missing rather than at the
    /// first collaborator call.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (key, value) in [
            ("GROQ_API_KEY", &self.groq_api_key),
            ("ELEVEN_API_KEY", &self.eleven_api_key),
            ("GIPHY_API_KEY", &self.giphy_api_key),
        ] {
            if value.is_empty() {
                anyhow::bail!("{key} is not set");
            }
        }
        Ok(())
    }

    /// Server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<BanterConfig> = Lazy::new(BanterConfig::from_env);
