//! Empathy Engine - 情绪化语音合成核心
//!
//! 文本 → 情绪识别 → 语音参数 → 合成后端 → 音频文件

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use uuid::Uuid;

use crate::application::error::{ensure_text_present, ApplicationError};
use crate::application::ports::{
    AudioInfo, AudioInspectorPort, SpeechBackendPort, SynthesisError, SynthesisRequest,
};
use crate::domain::emotion::{EmotionDetector, EmotionResult};
use crate::domain::voice::{emotion_to_voice, spoken_text, BaselineVoice, VoiceProfile};

/// 引擎构造选项
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// 指定音色，None 使用后端默认音色
    pub voice_id: Option<String>,
    /// 覆盖后端报告的基线语速
    pub base_rate: Option<u32>,
    /// 覆盖后端报告的基线音量
    pub base_volume: Option<f64>,
}

/// 一次合成的结果
#[derive(Debug, Clone)]
pub struct SynthesisOutcome {
    pub emotion: EmotionResult,
    pub profile: VoiceProfile,
    pub path: PathBuf,
    /// 实际朗读的文本
    pub spoken_text: String,
    /// WAV 信息（无法解析时为 None）
    pub audio_info: Option<AudioInfo>,
    pub generated_at: DateTime<Utc>,
}

/// Empathy Engine
///
/// 基线参数在构造时确定，之后只读；每次合成构造独立的 SynthesisRequest，
/// 引擎可以在多个请求之间共享
pub struct EmpathyEngine {
    detector: EmotionDetector,
    backend: Arc<dyn SpeechBackendPort>,
    inspector: Option<Arc<dyn AudioInspectorPort>>,
    baseline: BaselineVoice,
    voice_id: Option<String>,
}

impl EmpathyEngine {
    /// 创建引擎
    ///
    /// 指定音色时会检查后端是否安装了该音色（后端无法列出音色时跳过检查）
    pub async fn new(
        backend: Arc<dyn SpeechBackendPort>,
        options: EngineOptions,
    ) -> Result<Self, ApplicationError> {
        let reported = backend.default_properties();
        let mut baseline = BaselineVoice::from_reported(reported.rate, reported.volume);
        if let Some(rate) = options.base_rate {
            baseline.base_rate = rate;
        }
        if let Some(volume) = options.base_volume {
            baseline.base_volume = volume;
        }
        baseline.validate().map_err(ApplicationError::validation)?;

        if let Some(voice) = options.voice_id.as_deref() {
            let voices = backend.list_voices().await?;
            let installed = voices.is_empty()
                || voices.iter().any(|v| v.id == voice || v.name == voice);
            if !installed {
                return Err(SynthesisError::VoiceNotFound(voice.to_string()).into());
            }
        }

        tracing::info!(
            backend = backend.name(),
            base_rate = baseline.base_rate,
            base_volume = baseline.base_volume,
            voice = ?options.voice_id,
            "Empathy engine initialized"
        );

        Ok(Self {
            detector: EmotionDetector::new(),
            backend,
            inspector: None,
            baseline,
            voice_id: options.voice_id,
        })
    }

    /// 设置音频信息提取器
    pub fn with_inspector(mut self, inspector: Arc<dyn AudioInspectorPort>) -> Self {
        self.inspector = Some(inspector);
        self
    }

    pub fn baseline(&self) -> BaselineVoice {
        self.baseline
    }

    pub fn voice_id(&self) -> Option<&str> {
        self.voice_id.as_deref()
    }

    pub fn backend(&self) -> &Arc<dyn SpeechBackendPort> {
        &self.backend
    }

    /// 情绪 → 语音参数
    pub fn emotion_to_voice(&self, result: &EmotionResult) -> VoiceProfile {
        emotion_to_voice(&self.baseline, result)
    }

    /// 只分析，不合成
    pub fn analyze(&self, text: &str) -> Result<(EmotionResult, VoiceProfile), ApplicationError> {
        ensure_text_present(text)?;
        let emotion = self.detector.analyze(text);
        Ok((emotion, self.emotion_to_voice(&emotion)))
    }

    /// 合成语音并写入 output_path（覆盖已有文件）
    ///
    /// 空文本在访问文件系统和后端之前即被拒绝；后端错误原样向上传递，不重试
    pub async fn synthesize_to_file(
        &self,
        text: &str,
        output_path: impl AsRef<Path>,
    ) -> Result<SynthesisOutcome, ApplicationError> {
        ensure_text_present(text)?;

        let output_path = output_path.as_ref().to_path_buf();
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                ApplicationError::storage(format!(
                    "Failed to create output directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let emotion = self.detector.analyze(text);
        let profile = self.emotion_to_voice(&emotion);
        let spoken = spoken_text(text, emotion.emotion).into_owned();

        let request = SynthesisRequest {
            text: spoken.clone(),
            voice: self.voice_id.clone(),
            rate: profile.rate,
            volume: profile.volume,
        };

        let response = self.backend.synthesize(request).await?;
        write_replacing(&output_path, &response.audio_data).await?;

        let audio_info = self.inspector.as_ref().and_then(|inspector| {
            inspector
                .inspect(&response.audio_data)
                .map_err(|e| {
                    tracing::warn!(error = %e, "Failed to inspect synthesized audio");
                })
                .ok()
        });

        tracing::info!(
            backend = self.backend.name(),
            emotion = %emotion.emotion,
            intensity = emotion.intensity,
            rate = profile.rate,
            volume = profile.volume,
            path = %output_path.display(),
            audio_size = response.audio_data.len(),
            "Speech synthesized"
        );

        Ok(SynthesisOutcome {
            emotion,
            profile,
            path: output_path,
            spoken_text: spoken,
            audio_info,
            generated_at: Utc::now(),
        })
    }
}

/// 先写临时文件再重命名，读取方不会看到写了一半的文件
async fn write_replacing(path: &Path, data: &[u8]) -> Result<(), ApplicationError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "audio".to_string());
    let tmp_path = path.with_file_name(format!(".{}.{}.part", file_name, Uuid::new_v4()));

    fs::write(&tmp_path, data)
        .await
        .map_err(|e| ApplicationError::storage(format!("Failed to write audio: {}", e)))?;

    if let Err(e) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(ApplicationError::storage(format!(
            "Failed to move audio into place: {}",
            e
        )));
    }

    Ok(())
}
