//! HTTP Routes
//!
//! Page Endpoints:
//! - /                      GET   输入表单
//! - /                      POST  合成并展示结果（表单字段 text）
//! - /audio                 GET   最近一次生成的音频
//! - /audio/:audio_id       GET   指定音频
//!
//! API Endpoints:
//! - /api/ping              GET   健康检查
//! - /api/analyze           POST  情绪分析（不合成）
//! - /api/synthesize        POST  情绪分析 + 合成
//! - /api/voices            GET   列出后端音色

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index).post(handlers::speak))
        .route("/audio", get(handlers::latest_audio))
        .route("/audio/:audio_id", get(handlers::audio_by_id))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/analyze", post(handlers::analyze))
        .route("/synthesize", post(handlers::synthesize))
        .route("/voices", get(handlers::list_voices))
}
