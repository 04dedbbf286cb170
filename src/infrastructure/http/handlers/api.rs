//! JSON API Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{AnalyzeText, ListVoices, SynthesizeSpeech};
use crate::infrastructure::http::dto::{
    AnalysisDto, ApiResponse, SynthesisDto, TextRequest, VoicesDto,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /api/analyze
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Result<Json<ApiResponse<AnalysisDto>>, ApiError> {
    let response = state
        .analyze_handler
        .handle(AnalyzeText { text: req.text })?;

    Ok(Json(ApiResponse::success(AnalysisDto::from(&response))))
}

/// POST /api/synthesize
pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Result<Json<ApiResponse<SynthesisDto>>, ApiError> {
    let response = state
        .synthesize_handler
        .handle(SynthesizeSpeech { text: req.text })
        .await?;

    Ok(Json(ApiResponse::success(SynthesisDto::from(&response))))
}

/// GET /api/voices
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<VoicesDto>>, ApiError> {
    let response = state.list_voices_handler.handle(ListVoices).await?;

    Ok(Json(ApiResponse::success(VoicesDto {
        backend: response.backend,
        total: response.voices.len(),
        voices: response.voices,
    })))
}
