//! Domain Layer - 领域层
//!
//! 包含三个上下文:
//! - Sentiment: 词典情感评分
//! - Emotion Context: 情绪识别
//! - Voice Context: 情绪 → 语音参数

pub mod emotion;
pub mod sentiment;
pub mod voice;
