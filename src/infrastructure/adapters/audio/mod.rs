//! Audio Adapter - WAV 处理

mod wav_inspector;

pub use wav_inspector::*;
