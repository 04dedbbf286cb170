//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_inspector;
mod audio_store;
mod speech_backend;

pub use audio_inspector::{AudioInfo, AudioInspectorPort, InspectError};
pub use audio_store::{
    generate_audio_id, AudioId, AudioNaming, AudioStoreError, AudioStorePort, StoredAudio,
};
pub use speech_backend::{
    BackendProperties, SpeechBackendPort, SynthesisError, SynthesisRequest, SynthesisResponse,
    VoiceInfo,
};
