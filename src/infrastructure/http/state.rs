//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AnalyzeTextHandler, SynthesizeSpeechHandler,
    // Query handlers
    GetAudioHandler, ListVoicesHandler,
    // Engine / Ports
    AudioStorePort, EmpathyEngine,
};

/// 应用状态
///
/// 引擎和存储在所有请求之间共享
pub struct AppState {
    // ========== Shared ==========
    pub engine: Arc<EmpathyEngine>,
    pub audio_store: Arc<dyn AudioStorePort>,

    // ========== Command Handlers ==========
    pub synthesize_handler: SynthesizeSpeechHandler,
    pub analyze_handler: AnalyzeTextHandler,

    // ========== Query Handlers ==========
    pub get_audio_handler: GetAudioHandler,
    pub list_voices_handler: ListVoicesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(engine: Arc<EmpathyEngine>, audio_store: Arc<dyn AudioStorePort>) -> Self {
        Self {
            engine: engine.clone(),
            audio_store: audio_store.clone(),

            // Command handlers
            synthesize_handler: SynthesizeSpeechHandler::new(engine.clone(), audio_store.clone()),
            analyze_handler: AnalyzeTextHandler::new(engine.clone()),

            // Query handlers
            get_audio_handler: GetAudioHandler::new(audio_store.clone()),
            list_voices_handler: ListVoicesHandler::new(engine.backend().clone()),
        }
    }
}
