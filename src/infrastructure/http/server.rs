//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::request_context_middleware;
use super::routes::create_routes;
use super::state::AppState;

/// 请求体大小上限（表单/JSON 文本）
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 构建带中间件的 Router
pub fn build_router(state: Arc<AppState>) -> Router {
    // CORS 配置 - 允许所有来源的跨域请求
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .expose_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    create_routes()
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(request_context_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state.clone());
        let addr = self.config.addr();

        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::testing::RecordingBackend;
    use crate::application::{AudioNaming, EmpathyEngine, EngineOptions, SpeechBackendPort};
    use crate::infrastructure::adapters::{
        FileAudioStore, FileAudioStoreConfig, ToneBackend, WavInspector,
    };
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    async fn test_router(backend: Arc<dyn SpeechBackendPort>) -> (Router, TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let engine = EmpathyEngine::new(backend, EngineOptions::default())
            .await
            .unwrap()
            .with_inspector(Arc::new(WavInspector::new()));
        let store = FileAudioStore::new(FileAudioStoreConfig {
            output_dir: temp_dir.path().to_path_buf(),
            naming: AudioNaming::ContentHash,
            ..Default::default()
        })
        .unwrap();

        let state = AppState::new(Arc::new(engine), Arc::new(store));
        (build_router(Arc::new(state)), temp_dir)
    }

    fn form_request(text: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("text={}", text)))
            .unwrap()
    }

    fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let (app, _dir) = test_router(Arc::new(ToneBackend::new())).await;

        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Empathy Engine"));
        assert!(!html.contains("class=\"result\""));
    }

    #[tokio::test]
    async fn test_blank_form_is_bad_request() {
        let (app, dir) = test_router(Arc::new(ToneBackend::new())).await;

        let response = app.oneshot(form_request("+++")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_string(response).await;
        assert!(html.contains("Input text must not be empty."));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_audio_before_and_after_synthesis() {
        let (app, _dir) = test_router(Arc::new(ToneBackend::new())).await;

        let response = app.clone().oneshot(get("/audio")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(form_request("I+love+this%21"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<span class=\"emotion-name\">Positive</span>"));
        assert!(html.contains("67% intensity"));
        assert!(html.contains("280 wpm"));
        assert!(html.contains(">1.00<"));
        assert!(html.contains("src=\"/audio/"));

        let response = app.oneshot(get("/audio")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "audio/wav"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
    }

    #[tokio::test]
    async fn test_backend_failure_is_service_unavailable() {
        let backend = RecordingBackend {
            fail_with: Some("engine crashed".to_string()),
            ..Default::default()
        };
        let (app, _dir) = test_router(Arc::new(backend)).await;

        let response = app.oneshot(form_request("hello")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_api_analyze() {
        let (app, _dir) = test_router(Arc::new(ToneBackend::new())).await;

        let response = app
            .oneshot(json_request(
                "/api/analyze",
                serde_json::json!({"text": "I hate everything"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["errno"], 0);
        assert_eq!(json["data"]["emotion"], "negative");
        assert_eq!(json["data"]["compound"], -0.5719);
    }

    #[tokio::test]
    async fn test_api_synthesize_then_fetch_by_id() {
        let (app, _dir) = test_router(Arc::new(ToneBackend::new())).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "/api/synthesize",
                serde_json::json!({"text": "I hate everything"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        let data = &json["data"];
        assert_eq!(data["spoken_text"], "...I hate everything");
        assert!(data["duration_ms"].as_u64().unwrap() > 0);

        let audio_url = data["audio_url"].as_str().unwrap();
        let response = app.oneshot(get(audio_url)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_errors_use_status_codes() {
        let (app, _dir) = test_router(Arc::new(ToneBackend::new())).await;

        let response = app
            .clone()
            .oneshot(json_request("/api/synthesize", serde_json::json!({"text": " "})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["errno"], 400);

        let response = app
            .clone()
            .oneshot(get("/audio/0123456789abcdef0123456789abcdef"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app.oneshot(get("/audio/bad%2E%2Eid")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_ping_and_voices() {
        let (app, _dir) = test_router(Arc::new(ToneBackend::new())).await;

        let response = app.clone().oneshot(get("/api/ping")).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["backend"], "tone");

        let response = app.oneshot(get("/api/voices")).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["data"]["total"], 0);
    }
}
