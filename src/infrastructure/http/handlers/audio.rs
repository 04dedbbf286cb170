//! Audio Handlers - 音频文件下载

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use crate::application::GetAudio;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /audio - 最近一次生成的音频
pub async fn latest_audio(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    stream_audio(&state, GetAudio::default()).await
}

/// GET /audio/:audio_id
pub async fn audio_by_id(
    State(state): State<Arc<AppState>>,
    Path(audio_id): Path<String>,
) -> Result<Response, ApiError> {
    stream_audio(
        &state,
        GetAudio {
            audio_id: Some(audio_id),
        },
    )
    .await
}

async fn stream_audio(state: &AppState, query: GetAudio) -> Result<Response, ApiError> {
    let audio = state.get_audio_handler.handle(query).await?;

    let file = match tokio::fs::File::open(&audio.path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ApiError::NotFound(format!(
                "Audio not found: {}",
                audio.audio_id
            )))
        }
        Err(e) => {
            return Err(ApiError::Internal(format!(
                "Failed to open audio file: {}",
                e
            )))
        }
    };

    // 流式返回文件内容
    let stream = ReaderStream::new(file);
    let body = Body::from_stream(stream);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, audio.content_type)
        .header(header::CONTENT_LENGTH, audio.size_bytes)
        .header(header::CACHE_CONTROL, "no-store")
        .header(
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}.wav\"", audio.audio_id),
        )
        .body(body)
        .map_err(|e| ApiError::Internal(e.to_string()))
}
