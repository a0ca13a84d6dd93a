// src/api/http/transcribe.rs

use axum::{
    Json,
    extract::{Multipart, State},
    response::IntoResponse,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::api::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcription: String,
}

pub async fn transcribe_handler(
    State(app_state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let result: ApiResult<_> = async {
        let mut audio: Option<Vec<u8>> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(format!("malformed multipart body: {e}")))?
        {
            if field.name() == Some("audio") {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("failed to read audio field: {e}")))?;
                audio = Some(data.to_vec());
            }
        }

        let audio = audio.ok_or_else(|| ApiError::bad_request("No audio file"))?;
        info!("transcribe request: {} bytes", audio.len());

        let transcription = app_state
            .orchestrator
            .transcribe(&audio)
            .await
            .map_err(|e| {
                error!("transcription failed: {e:#}");
                ApiError::internal("transcription failed")
            })?;

        Ok(Json(TranscribeResponse { transcription }))
    }
    .await;

    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}
