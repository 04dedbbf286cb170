//! 应用层 - 用例编排
//!
//! 包含：
//! - engine: EmpathyEngine（情绪识别 → 语音参数 → 合成 → 写文件）
//! - ports: 六边形架构端口定义（SpeechBackend、AudioStore、AudioInspector）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod engine;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{
        AnalyzeTextHandler, AnalyzeTextResponse, SynthesizeSpeechHandler,
        SynthesizeSpeechResponse,
    },
    AnalyzeText, SynthesizeSpeech,
};

pub use engine::{EmpathyEngine, EngineOptions, SynthesisOutcome};

pub use error::ApplicationError;

pub use ports::{
    // Audio inspector
    AudioInfo,
    AudioInspectorPort,
    InspectError,
    // Audio store
    generate_audio_id,
    AudioId,
    AudioNaming,
    AudioStoreError,
    AudioStorePort,
    StoredAudio,
    // Speech backend
    BackendProperties,
    SpeechBackendPort,
    SynthesisError,
    SynthesisRequest,
    SynthesisResponse,
    VoiceInfo,
};

pub use queries::{
    handlers::{GetAudioHandler, ListVoicesHandler},
    GetAudio, GetAudioResponse, ListVoices, ListVoicesResponse,
};
