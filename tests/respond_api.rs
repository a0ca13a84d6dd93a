// tests/respond_api.rs
// In-process router tests with mock collaborators. No network.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use bytes::Bytes;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use banter::api::http::http_router;
use banter::gif::{FALLBACK_GIF_URL, GifSearch};
use banter::llm::LlmProvider;
use banter::orchestrator::Orchestrator;
use banter::speech::synthesis::SpeechSynthesis;
use banter::speech::transcribe::Transcribe;
use banter::state::AppState;

struct CannedLlm(&'static str);

#[async_trait]
impl LlmProvider for CannedLlm {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
        Ok(self.0.to_string())
    }
}

struct DeadLlm;

#[async_trait]
impl LlmProvider for DeadLlm {
    fn name(&self) -> &'static str {
        "dead"
    }

    async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
        Err(anyhow!("upstream down"))
    }
}

struct OneGif(&'static str);

#[async_trait]
impl GifSearch for OneGif {
    async fn search(&self, _query: &str) -> Result<Vec<String>> {
        Ok(vec![self.0.to_string()])
    }
}

struct NoGifs;

#[async_trait]
impl GifSearch for NoGifs {
    async fn search(&self, _query: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

struct CannedVoice;

#[async_trait]
impl SpeechSynthesis for CannedVoice {
    async fn synthesize(&self, _text: &str) -> Result<Vec<Bytes>> {
        Ok(vec![Bytes::from_static(b"mp3")])
    }
}

struct BrokenVoice;

#[async_trait]
impl SpeechSynthesis for BrokenVoice {
    async fn synthesize(&self, _text: &str) -> Result<Vec<Bytes>> {
        Err(anyhow!("no voice today"))
    }
}

struct EchoTranscriber;

#[async_trait]
impl Transcribe for EchoTranscriber {
    async fn transcribe(&self, _path: &Path) -> Result<String> {
        Ok("what is up".to_string())
    }
}

fn app(
    llm: Arc<dyn LlmProvider>,
    gifs: Arc<dyn GifSearch>,
    tts: Arc<dyn SpeechSynthesis>,
    stt: Arc<dyn Transcribe>,
) -> Router {
    let orchestrator = Arc::new(Orchestrator::new(llm, gifs, tts, stt));
    http_router(Arc::new(AppState { orchestrator }))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn respond_returns_message_gif_and_audio() {
    let app = app(
        Arc::new(CannedLlm("Paris! Wait, is that a country? GIF: confused map")),
        Arc::new(OneGif("https://gifs.example/map.gif")),
        Arc::new(CannedVoice),
        Arc::new(EchoTranscriber),
    );

    let response = app
        .oneshot(
            Request::post("/respond")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"text":"What is the capital of France?"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Paris! Wait, is that a country?");
    assert_eq!(body["gif"], "https://gifs.example/map.gif");
    // base64("mp3")
    assert_eq!(body["audio"], "bXAz");
}

#[tokio::test]
async fn respond_degrades_but_still_answers() {
    let app = app(
        Arc::new(CannedLlm("Hmm. GIF: shrug")),
        Arc::new(NoGifs),
        Arc::new(BrokenVoice),
        Arc::new(EchoTranscriber),
    );

    let response = app
        .oneshot(
            Request::post("/respond")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"text":"hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Hmm.");
    assert_eq!(body["gif"], FALLBACK_GIF_URL);
    assert!(body["audio"].is_null());
}

#[tokio::test]
async fn respond_maps_generation_failure_to_bad_gateway() {
    let app = app(
        Arc::new(DeadLlm),
        Arc::new(OneGif("https://gifs.example/a.gif")),
        Arc::new(CannedVoice),
        Arc::new(EchoTranscriber),
    );

    let response = app
        .oneshot(
            Request::post("/respond")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"text":"hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn transcribe_accepts_an_audio_file() {
    let app = app(
        Arc::new(CannedLlm("x GIF: y")),
        Arc::new(NoGifs),
        Arc::new(BrokenVoice),
        Arc::new(EchoTranscriber),
    );

    let boundary = "banter-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"audio\"; filename=\"clip.wav\"\r\n\
         Content-Type: audio/wav\r\n\r\n\
         RIFFfake-audio\r\n\
         --{boundary}--\r\n"
    );

    let response = app
        .oneshot(
            Request::post("/transcribe")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["transcription"], "what is up");
}

#[tokio::test]
async fn transcribe_without_a_file_is_a_400() {
    let app = app(
        Arc::new(CannedLlm("x GIF: y")),
        Arc::new(NoGifs),
        Arc::new(BrokenVoice),
        Arc::new(EchoTranscriber),
    );

    let boundary = "banter-test-boundary";

    let response = app
        .oneshot(
            Request::post("/transcribe")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(format!("--{boundary}--\r\n")))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "No audio file");
}

#[tokio::test]
async fn health_answers_ok() {
    let app = app(
        Arc::new(CannedLlm("x GIF: y")),
        Arc::new(NoGifs),
        Arc::new(BrokenVoice),
        Arc::new(EchoTranscriber),
    );

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
