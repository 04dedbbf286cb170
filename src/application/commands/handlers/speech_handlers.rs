//! Speech Command Handlers

use std::sync::Arc;

use crate::application::commands::{AnalyzeText, SynthesizeSpeech};
use crate::application::engine::{EmpathyEngine, SynthesisOutcome};
use crate::application::error::{ensure_text_present, ApplicationError};
use crate::application::ports::{AudioId, AudioStorePort};
use crate::domain::emotion::EmotionResult;
use crate::domain::voice::VoiceProfile;

// ============================================================================
// SynthesizeSpeech
// ============================================================================

/// 合成语音响应
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechResponse {
    pub audio_id: AudioId,
    pub outcome: SynthesisOutcome,
}

/// SynthesizeSpeech Handler
///
/// 为每次请求分配独立的输出文件，合成成功后标记为最近一次的音频
pub struct SynthesizeSpeechHandler {
    engine: Arc<EmpathyEngine>,
    audio_store: Arc<dyn AudioStorePort>,
}

impl SynthesizeSpeechHandler {
    pub fn new(engine: Arc<EmpathyEngine>, audio_store: Arc<dyn AudioStorePort>) -> Self {
        Self {
            engine,
            audio_store,
        }
    }

    pub async fn handle(
        &self,
        command: SynthesizeSpeech,
    ) -> Result<SynthesizeSpeechResponse, ApplicationError> {
        ensure_text_present(&command.text)?;

        let audio_id = self
            .audio_store
            .allocate(&command.text, self.engine.voice_id());
        let output_path = self.audio_store.audio_path(&audio_id);

        let outcome = self
            .engine
            .synthesize_to_file(&command.text, &output_path)
            .await?;

        self.audio_store.mark_latest(&audio_id);

        tracing::info!(
            audio_id = %audio_id,
            emotion = %outcome.emotion.emotion,
            "Speech request completed"
        );

        Ok(SynthesizeSpeechResponse { audio_id, outcome })
    }
}

// ============================================================================
// AnalyzeText
// ============================================================================

/// 分析文本响应
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeTextResponse {
    pub emotion: EmotionResult,
    pub profile: VoiceProfile,
}

/// AnalyzeText Handler
pub struct AnalyzeTextHandler {
    engine: Arc<EmpathyEngine>,
}

impl AnalyzeTextHandler {
    pub fn new(engine: Arc<EmpathyEngine>) -> Self {
        Self { engine }
    }

    pub fn handle(&self, command: AnalyzeText) -> Result<AnalyzeTextResponse, ApplicationError> {
        let (emotion, profile) = self.engine.analyze(&command.text)?;
        Ok(AnalyzeTextResponse { emotion, profile })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::testing::RecordingBackend;
    use crate::application::engine::EngineOptions;
    use crate::application::ports::AudioNaming;
    use crate::domain::emotion::Emotion;
    use crate::infrastructure::adapters::{FileAudioStore, FileAudioStoreConfig};
    use tempfile::tempdir;

    async fn handler(dir: &std::path::Path, naming: AudioNaming) -> SynthesizeSpeechHandler {
        let engine = EmpathyEngine::new(Arc::new(RecordingBackend::default()), EngineOptions::default())
            .await
            .unwrap();
        let store = FileAudioStore::new(FileAudioStoreConfig {
            output_dir: dir.to_path_buf(),
            naming,
            ..Default::default()
        })
        .unwrap();
        SynthesizeSpeechHandler::new(Arc::new(engine), Arc::new(store))
    }

    #[tokio::test]
    async fn test_distinct_texts_get_distinct_files() {
        let temp_dir = tempdir().unwrap();
        let handler = handler(temp_dir.path(), AudioNaming::ContentHash).await;

        let first = handler
            .handle(SynthesizeSpeech {
                text: "I love this!".to_string(),
            })
            .await
            .unwrap();
        let second = handler
            .handle(SynthesizeSpeech {
                text: "I hate everything".to_string(),
            })
            .await
            .unwrap();

        assert_ne!(first.audio_id, second.audio_id);
        assert!(first.outcome.path.exists());
        assert!(second.outcome.path.exists());
        assert_eq!(second.outcome.emotion.emotion, Emotion::Negative);
        assert_eq!(
            handler.audio_store.latest().await.unwrap().unwrap().id,
            second.audio_id
        );
    }

    #[tokio::test]
    async fn test_fixed_naming_overwrites_single_file() {
        let temp_dir = tempdir().unwrap();
        let handler = handler(temp_dir.path(), AudioNaming::Fixed).await;

        for text in ["I love this!", "The sky is blue."] {
            let response = handler
                .handle(SynthesizeSpeech {
                    text: text.to_string(),
                })
                .await
                .unwrap();
            assert_eq!(response.outcome.path, temp_dir.path().join("empathy_output.wav"));
        }

        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_blank_text_does_not_touch_store() {
        let temp_dir = tempdir().unwrap();
        let handler = handler(temp_dir.path(), AudioNaming::ContentHash).await;

        let result = handler
            .handle(SynthesizeSpeech {
                text: "  ".to_string(),
            })
            .await;
        assert!(result.unwrap_err().is_validation());
        assert!(handler.audio_store.latest().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_analyze_text() {
        let engine = EmpathyEngine::new(Arc::new(RecordingBackend::default()), EngineOptions::default())
            .await
            .unwrap();
        let handler = AnalyzeTextHandler::new(Arc::new(engine));

        let response = handler
            .handle(AnalyzeText {
                text: "The sky is blue.".to_string(),
            })
            .unwrap();
        assert_eq!(response.emotion.emotion, Emotion::Neutral);
        assert_eq!(response.profile.rate, 200);

        assert!(handler
            .handle(AnalyzeText {
                text: String::new()
            })
            .is_err());
    }
}
