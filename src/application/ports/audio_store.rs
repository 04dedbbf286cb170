//! Audio Store Port - 合成音频的存储与查找
//!
//! 每个请求分配独立的输出路径（内容哈希），并记录最近一次生成的音频

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStoreError {
    #[error("Audio not found: {0}")]
    NotFound(String),

    #[error("Invalid audio id: {0}")]
    InvalidId(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 输出文件命名方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AudioNaming {
    /// 按 md5(text + voice) 命名，每段文本独立文件
    #[default]
    ContentHash,
    /// 固定单一输出文件，后写覆盖先写
    Fixed,
}

impl std::fmt::Display for AudioNaming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioNaming::ContentHash => write!(f, "content_hash"),
            AudioNaming::Fixed => write!(f, "fixed"),
        }
    }
}

const MAX_ID_LEN: usize = 64;

/// 音频标识
///
/// 不变量: 1-64 个字符，仅包含 ASCII 字母数字、'_'、'-'（可安全拼接为文件名）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AudioId(String);

impl AudioId {
    pub fn parse(id: &str) -> Result<Self, AudioStoreError> {
        let valid = !id.is_empty()
            && id.len() <= MAX_ID_LEN
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            return Err(AudioStoreError::InvalidId(id.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AudioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 生成内容哈希音频 ID
///
/// 基线参数在进程内固定，所以 text + voice 唯一决定合成结果
pub fn generate_audio_id(text: &str, voice: Option<&str>) -> AudioId {
    let mut context = md5::Context::new();
    context.consume(text.as_bytes());
    context.consume([0u8]);
    context.consume(voice.unwrap_or_default().as_bytes());
    AudioId(format!("{:x}", context.compute()))
}

/// 已存储的音频
#[derive(Debug, Clone)]
pub struct StoredAudio {
    pub id: AudioId,
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Audio Store Port
#[async_trait]
pub trait AudioStorePort: Send + Sync {
    /// 为一次合成分配音频 ID
    fn allocate(&self, text: &str, voice: Option<&str>) -> AudioId;

    /// 音频 ID 对应的文件路径
    fn audio_path(&self, id: &AudioId) -> PathBuf;

    /// 标记为最近一次生成的音频
    fn mark_latest(&self, id: &AudioId);

    /// 最近一次生成的音频，尚未生成时返回 None
    async fn latest(&self) -> Result<Option<StoredAudio>, AudioStoreError>;

    /// 按 ID 查找音频
    async fn resolve(&self, id: &AudioId) -> Result<StoredAudio, AudioStoreError>;
}
