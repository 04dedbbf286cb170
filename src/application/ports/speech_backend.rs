//! Speech Backend Port - 语音合成后端抽象
//!
//! 每次调用都携带完整的合成参数（文本、音色、语速、音量），
//! 后端本身不保存可变状态，并发请求之间互不影响

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 合成错误
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Voice not found: {0}")]
    VoiceNotFound(String),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// 单次合成请求
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    /// 实际朗读的文本（已应用犹豫前缀）
    pub text: String,
    /// 音色标识，None 使用后端默认音色
    pub voice: Option<String>,
    /// 语速（词/分钟）
    pub rate: u32,
    /// 音量 (0.0 - 1.0)
    pub volume: f64,
}

/// 合成结果
#[derive(Debug, Clone)]
pub struct SynthesisResponse {
    /// WAV 音频数据
    pub audio_data: Vec<u8>,
}

/// 后端报告的默认属性，用于确定基线
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BackendProperties {
    pub rate: Option<u32>,
    pub volume: Option<f64>,
}

/// 已安装音色
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub id: String,
    pub name: String,
    pub language: String,
}

/// Speech Backend Port
#[async_trait]
pub trait SpeechBackendPort: Send + Sync {
    /// 后端名称（用于日志）
    fn name(&self) -> &'static str;

    /// 默认语速/音量
    fn default_properties(&self) -> BackendProperties {
        BackendProperties::default()
    }

    /// 合成语音，阻塞直到后端完成
    async fn synthesize(&self, request: SynthesisRequest)
        -> Result<SynthesisResponse, SynthesisError>;

    /// 列出已安装音色
    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, SynthesisError> {
        Ok(Vec::new())
    }

    /// 检查后端是否可用
    async fn health_check(&self) -> bool {
        true
    }
}
