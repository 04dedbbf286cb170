//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

use crate::application::ports::AudioNaming;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 合成后端配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 合成后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsBackendKind {
    /// 本地 espeak-ng
    #[default]
    Espeak,
    /// 外部 HTTP TTS 服务
    Http,
    /// 离线正弦音（开发/测试）
    Tone,
}

impl fmt::Display for TtsBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TtsBackendKind::Espeak => write!(f, "espeak"),
            TtsBackendKind::Http => write!(f, "http"),
            TtsBackendKind::Tone => write!(f, "tone"),
        }
    }
}

/// 合成后端配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// 后端类型
    #[serde(default)]
    pub backend: TtsBackendKind,

    /// espeak 可执行文件
    #[serde(default = "default_espeak_program")]
    pub espeak_program: String,

    /// HTTP TTS 服务基础 URL
    #[serde(default = "default_tts_url")]
    pub url: String,

    /// HTTP 请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,

    /// 音色，未设置时使用后端默认音色
    #[serde(default)]
    pub voice: Option<String>,

    /// 覆盖后端报告的基线语速
    #[serde(default)]
    pub base_rate: Option<u32>,

    /// 覆盖后端报告的基线音量
    #[serde(default)]
    pub base_volume: Option<f64>,
}

fn default_espeak_program() -> String {
    "espeak-ng".to_string()
}

fn default_tts_url() -> String {
    "http://localhost:5002".to_string()
}

fn default_tts_timeout() -> u64 {
    60
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            backend: TtsBackendKind::default(),
            espeak_program: default_espeak_program(),
            url: default_tts_url(),
            timeout_secs: default_tts_timeout(),
            voice: None,
            base_rate: None,
            base_volume: None,
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 音频输出目录
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// 文件命名方式: content_hash | fixed
    #[serde(default)]
    pub naming: AudioNaming,

    /// fixed 模式下的文件名（不含扩展名）
    #[serde(default = "default_fixed_name")]
    pub fixed_name: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_fixed_name() -> String {
    "empathy_output".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            naming: AudioNaming::default(),
            fixed_name: default_fixed_name(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
