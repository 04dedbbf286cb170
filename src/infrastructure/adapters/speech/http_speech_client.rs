//! HTTP Speech Client - 调用外部 TTS HTTP 服务
//!
//! 实现 SpeechBackendPort trait，通过 HTTP 调用外部 TTS 服务
//!
//! 外部 TTS API:
//! POST http://localhost:5002/api/tts/synthesize
//! Request: {"text": "...", "rate": 200, "volume": 0.8, "voice": "en"}  (JSON)
//! Response: audio/wav binary, metadata in headers
//!
//! GET http://localhost:5002/api/tts/voices
//! Response: [{"id": "...", "name": "...", "language": "..."}]

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{
    SpeechBackendPort, SynthesisError, SynthesisRequest, SynthesisResponse, VoiceInfo,
};

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct SynthesizeHttpRequest<'a> {
    text: &'a str,
    rate: u32,
    volume: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice: Option<&'a str>,
}

/// HTTP Speech 客户端配置
#[derive(Debug, Clone)]
pub struct HttpSpeechClientConfig {
    /// TTS 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpSpeechClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5002".to_string(),
            timeout_secs: 60,
        }
    }
}

impl HttpSpeechClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP Speech 客户端
pub struct HttpSpeechClient {
    client: Client,
    config: HttpSpeechClientConfig,
}

impl HttpSpeechClient {
    pub fn new(config: HttpSpeechClientConfig) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SynthesisError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn synthesize_url(&self) -> String {
        self.endpoint("/api/tts/synthesize")
    }

    fn voices_url(&self) -> String {
        self.endpoint("/api/tts/voices")
    }

    fn health_url(&self) -> String {
        self.endpoint("/health")
    }
}

fn map_send_error(e: reqwest::Error) -> SynthesisError {
    if e.is_timeout() {
        SynthesisError::Timeout
    } else if e.is_connect() {
        SynthesisError::NetworkError(format!("Cannot connect to TTS service: {}", e))
    } else {
        SynthesisError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl SpeechBackendPort for HttpSpeechClient {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SynthesisError> {
        let body = SynthesizeHttpRequest {
            text: &request.text,
            rate: request.rate,
            volume: request.volume,
            voice: request.voice.as_deref(),
        };

        tracing::debug!(
            url = %self.synthesize_url(),
            text_len = request.text.len(),
            rate = request.rate,
            volume = request.volume,
            "Sending TTS synthesize request"
        );

        let response = self
            .client
            .post(self.synthesize_url())
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SynthesisError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        if audio_data.is_empty() {
            return Err(SynthesisError::InvalidResponse(
                "TTS service returned empty audio".to_string(),
            ));
        }

        tracing::debug!(audio_size = audio_data.len(), "TTS synthesis completed");

        Ok(SynthesisResponse { audio_data })
    }

    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, SynthesisError> {
        let response = self
            .client
            .get(self.voices_url())
            .send()
            .await
            .map_err(map_send_error)?;

        // 服务不提供音色列表时视为无法校验
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(SynthesisError::ServiceError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .json::<Vec<VoiceInfo>>()
            .await
            .map_err(|e| SynthesisError::InvalidResponse(e.to_string()))
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
