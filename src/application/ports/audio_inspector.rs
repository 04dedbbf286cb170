//! Audio Inspector Port - 音频信息提取
//!
//! 从后端返回的 WAV 数据中提取时长、采样率等信息

use serde::Serialize;
use thiserror::Error;

/// 解析错误
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Decoding error: {0}")]
    DecodingError(String),
}

/// 音频信息
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AudioInfo {
    /// 时长（毫秒）
    pub duration_ms: u64,
    /// 采样率
    pub sample_rate: u32,
    /// 声道数
    pub channels: u8,
    /// 位深度
    pub bits_per_sample: u16,
    /// 数据大小（字节）
    pub data_size: usize,
}

/// Audio Inspector Port
pub trait AudioInspectorPort: Send + Sync {
    fn inspect(&self, wav_data: &[u8]) -> Result<AudioInfo, InspectError>;
}
