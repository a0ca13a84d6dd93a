// src/main.rs

use std::sync::Arc;

use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use banter::api::http::http_router;
use banter::config::CONFIG;
use banter::gif::GiphyClient;
use banter::llm::GroqProvider;
use banter::orchestrator::Orchestrator;
use banter::speech::synthesis::ElevenLabsClient;
use banter::speech::transcribe::GroqWhisperClient;
use banter::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(CONFIG.log_level.parse::<Level>().unwrap_or(Level::INFO))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting banter");
    info!("Chat model: {}", CONFIG.chat_model);
    info!("Voice: {} ({})", CONFIG.voice_id, CONFIG.tts_model);

    CONFIG.validate()?;

    // One client per collaborator, constructed once and injected. There is no
    // other process-wide state.
    let llm = Arc::new(GroqProvider::new(&CONFIG)?);
    let gifs = Arc::new(GiphyClient::new(&CONFIG)?);
    let tts = Arc::new(ElevenLabsClient::new(&CONFIG)?);
    let stt = Arc::new(GroqWhisperClient::new(&CONFIG)?);

    let orchestrator = Arc::new(Orchestrator::new(llm, gifs, tts, stt));
    let app_state = Arc::new(AppState { orchestrator });

    let app = http_router(app_state);

    let bind_address = CONFIG.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
