//! Voice Context - 语音参数上下文
//!
//! 职责:
//! - 基线语速/音量
//! - 情绪 → 语音参数映射
//! - 负向情绪的犹豫前缀

mod mapping;
mod value_objects;

pub use mapping::{emotion_to_voice, spoken_text, HESITATION_PREFIX};
pub use value_objects::{
    BaselineVoice, VoiceProfile, DEFAULT_BASE_RATE, DEFAULT_BASE_VOLUME, MAX_VOLUME, MIN_VOLUME,
};
