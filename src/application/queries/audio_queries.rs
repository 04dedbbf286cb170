//! Audio Queries - 音频查询

use std::path::PathBuf;

use crate::application::ports::AudioId;

/// 获取音频查询
///
/// audio_id 为 None 时返回最近一次生成的音频
#[derive(Debug, Clone, Default)]
pub struct GetAudio {
    pub audio_id: Option<String>,
}

/// 获取音频响应
#[derive(Debug, Clone)]
pub struct GetAudioResponse {
    pub audio_id: AudioId,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub content_type: String,
}
