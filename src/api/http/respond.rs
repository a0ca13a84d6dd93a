// src/api/http/respond.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::api::error::{ApiError, ApiResult};
use crate::orchestrator::RespondError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RespondRequest {
    pub text: String,
}

pub async fn respond_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<RespondRequest>,
) -> impl IntoResponse {
    let result: ApiResult<_> = async {
        info!("respond request: {} chars", request.text.len());

        let reply = app_state
            .orchestrator
            .respond(&request.text)
            .await
            .map_err(|e| {
                error!("respond pipeline failed: {e}");
                match e {
                    RespondError::Generation(_) => ApiError::bad_gateway("language generation failed"),
                }
            })?;

        Ok(Json(reply))
    }
    .await;

    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}
