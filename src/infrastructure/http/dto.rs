//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{AnalyzeTextResponse, SynthesizeSpeechResponse, VoiceInfo};
use crate::domain::emotion::Emotion;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Speech DTOs
// ============================================================================

/// 文本请求（analyze / synthesize 共用）
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
}

/// 情绪分析结果
#[derive(Debug, Serialize)]
pub struct AnalysisDto {
    pub emotion: Emotion,
    pub intensity: f64,
    pub compound: f64,
    pub rate: u32,
    pub volume: f64,
}

impl From<&AnalyzeTextResponse> for AnalysisDto {
    fn from(response: &AnalyzeTextResponse) -> Self {
        Self {
            emotion: response.emotion.emotion,
            intensity: response.emotion.intensity,
            compound: response.emotion.raw_compound,
            rate: response.profile.rate,
            volume: response.profile.volume,
        }
    }
}

/// 合成结果
#[derive(Debug, Serialize)]
pub struct SynthesisDto {
    #[serde(flatten)]
    pub analysis: AnalysisDto,
    pub audio_id: String,
    pub audio_url: String,
    pub spoken_text: String,
    pub duration_ms: Option<u64>,
    pub generated_at: String,
}

impl From<&SynthesizeSpeechResponse> for SynthesisDto {
    fn from(response: &SynthesizeSpeechResponse) -> Self {
        let outcome = &response.outcome;
        Self {
            analysis: AnalysisDto {
                emotion: outcome.emotion.emotion,
                intensity: outcome.emotion.intensity,
                compound: outcome.emotion.raw_compound,
                rate: outcome.profile.rate,
                volume: outcome.profile.volume,
            },
            audio_id: response.audio_id.to_string(),
            audio_url: audio_url(response.audio_id.as_str()),
            spoken_text: outcome.spoken_text.clone(),
            duration_ms: outcome.audio_info.map(|info| info.duration_ms),
            generated_at: outcome.generated_at.to_rfc3339(),
        }
    }
}

/// 音色列表
#[derive(Debug, Serialize)]
pub struct VoicesDto {
    pub backend: &'static str,
    pub total: usize,
    pub voices: Vec<VoiceInfo>,
}

/// 音频下载地址
pub fn audio_url(audio_id: &str) -> String {
    format!("/audio/{}", audio_id)
}
