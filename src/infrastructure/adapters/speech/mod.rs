//! Speech Adapter - 语音合成后端实现

mod espeak_backend;
mod http_speech_client;
mod tone_backend;

pub use espeak_backend::*;
pub use http_speech_client::*;
pub use tone_backend::*;
