//! Voice Queries

use crate::application::ports::VoiceInfo;

/// 列出合成后端已安装的音色
#[derive(Debug, Clone)]
pub struct ListVoices;

/// 音色列表响应
#[derive(Debug, Clone)]
pub struct ListVoicesResponse {
    /// 后端名称
    pub backend: &'static str,
    pub voices: Vec<VoiceInfo>,
}
