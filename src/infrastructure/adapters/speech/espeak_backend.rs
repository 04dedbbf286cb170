//! eSpeak Backend - 调用本地 espeak-ng 合成语音
//!
//! 每次合成启动一个独立进程：
//! `espeak-ng -s <rate> -a <amplitude> [-v <voice>] --stdout --stdin`
//! 文本通过 stdin 写入，WAV 从 stdout 读取

use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{
    BackendProperties, SpeechBackendPort, SynthesisError, SynthesisRequest, SynthesisResponse,
    VoiceInfo,
};
use crate::infrastructure::adapters::audio::repair_streamed_header;

/// espeak-ng 默认语速（词/分钟）
pub const ESPEAK_DEFAULT_RATE: u32 = 175;

/// espeak-ng 振幅上限
const MAX_AMPLITUDE: u32 = 200;

/// eSpeak 后端配置
#[derive(Debug, Clone)]
pub struct EspeakBackendConfig {
    /// 可执行文件名或路径
    pub program: String,
}

impl Default for EspeakBackendConfig {
    fn default() -> Self {
        Self {
            program: "espeak-ng".to_string(),
        }
    }
}

/// eSpeak 后端
pub struct EspeakBackend {
    config: EspeakBackendConfig,
}

impl EspeakBackend {
    pub fn new(config: EspeakBackendConfig) -> Self {
        Self { config }
    }

    fn spawn_error(&self, e: std::io::Error) -> SynthesisError {
        if e.kind() == std::io::ErrorKind::NotFound {
            SynthesisError::Unavailable(format!("{} is not installed", self.config.program))
        } else {
            SynthesisError::ServiceError(format!(
                "Failed to run {}: {}",
                self.config.program, e
            ))
        }
    }
}

/// 音量 (0.0 - 1.0) 转换为 espeak 振幅 (0 - 100)
pub fn amplitude_for(volume: f64) -> u32 {
    ((volume.clamp(0.0, 2.0) * 100.0).round() as u32).min(MAX_AMPLITUDE)
}

/// 构造命令行参数（不含文本）
pub fn synthesis_args(request: &SynthesisRequest) -> Vec<String> {
    let mut args = vec![
        "-s".to_string(),
        request.rate.to_string(),
        "-a".to_string(),
        amplitude_for(request.volume).to_string(),
    ];
    if let Some(voice) = &request.voice {
        args.push("-v".to_string());
        args.push(voice.clone());
    }
    args.push("--stdout".to_string());
    args.push("--stdin".to_string());
    args
}

/// 解析 `espeak-ng --voices` 输出
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File                 Other Languages
///  5  af              --/M      Afrikaans          gmw/af
///  5  en-us           --/M      English_(America)  gmw/en-US            (en 3)
/// ```
pub fn parse_voice_list(output: &str) -> Vec<VoiceInfo> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let columns: Vec<&str> = line.split_whitespace().collect();
            if columns.len() < 4 {
                return None;
            }
            let language = columns[1].to_string();
            Some(VoiceInfo {
                id: language.clone(),
                name: columns[3].replace('_', " "),
                language,
            })
        })
        .collect()
}

#[async_trait]
impl SpeechBackendPort for EspeakBackend {
    fn name(&self) -> &'static str {
        "espeak"
    }

    fn default_properties(&self) -> BackendProperties {
        BackendProperties {
            rate: Some(ESPEAK_DEFAULT_RATE),
            volume: Some(1.0),
        }
    }

    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, SynthesisError> {
        let args = synthesis_args(&request);

        tracing::debug!(
            program = %self.config.program,
            args = ?args,
            text_len = request.text.len(),
            "Spawning espeak"
        );

        let mut child = Command::new(&self.config.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(request.text.as_bytes())
                .await
                .map_err(|e| SynthesisError::ServiceError(format!("Failed to write text: {}", e)))?;
            // 关闭 stdin 让 espeak 开始合成
            drop(stdin);
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| SynthesisError::ServiceError(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SynthesisError::ServiceError(format!(
                "{} exited with {}: {}",
                self.config.program,
                output.status,
                stderr.trim()
            )));
        }

        let mut audio_data = output.stdout;
        if audio_data.is_empty() {
            return Err(SynthesisError::InvalidResponse(
                "espeak produced no audio".to_string(),
            ));
        }
        repair_streamed_header(&mut audio_data)
            .map_err(|e| SynthesisError::InvalidResponse(e.to_string()))?;

        tracing::debug!(audio_size = audio_data.len(), "espeak synthesis completed");

        Ok(SynthesisResponse { audio_data })
    }

    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, SynthesisError> {
        let output = Command::new(&self.config.program)
            .arg("--voices")
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(SynthesisError::ServiceError(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(parse_voice_list(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn health_check(&self) -> bool {
        Command::new(&self.config.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }
}
