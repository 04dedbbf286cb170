//! Emotion Context - 情绪识别上下文
//!
//! 职责:
//! - compound 分数 → 情绪类别
//! - 强度计算（带下限）

mod detector;
mod value_objects;

pub use detector::EmotionDetector;
pub use value_objects::{
    Emotion, EmotionResult, MAX_INTENSITY, MIN_INTENSITY, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD,
};
