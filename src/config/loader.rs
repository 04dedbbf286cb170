//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, TtsBackendKind};
use crate::application::ports::{AudioId, AudioNaming};
use crate::domain::voice::BaselineVoice;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "EMPATHY";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `EMPATHY_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `EMPATHY_SERVER__PORT=8080`
/// - `EMPATHY_TTS__BACKEND=http`
/// - `EMPATHY_TTS__URL=http://tts-server:5002`
/// - `EMPATHY_STORAGE__NAMING=fixed`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("tts.backend", "espeak")?
        .set_default("tts.espeak_program", "espeak-ng")?
        .set_default("tts.url", "http://localhost:5002")?
        .set_default("tts.timeout_secs", 60)?
        .set_default("storage.output_dir", "output")?
        .set_default("storage.naming", "content_hash")?
        .set_default("storage.fixed_name", "empathy_output")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: EMPATHY_TTS__VOICE=en-us
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    match config.tts.backend {
        TtsBackendKind::Http if config.tts.url.is_empty() => {
            return Err(ConfigError::ValidationError(
                "TTS URL cannot be empty for the http backend".to_string(),
            ));
        }
        TtsBackendKind::Http if config.tts.timeout_secs == 0 => {
            return Err(ConfigError::ValidationError(
                "TTS timeout cannot be 0".to_string(),
            ));
        }
        TtsBackendKind::Espeak if config.tts.espeak_program.is_empty() => {
            return Err(ConfigError::ValidationError(
                "espeak program cannot be empty".to_string(),
            ));
        }
        _ => {}
    }

    if config.tts.voice.as_deref().is_some_and(str::is_empty) {
        return Err(ConfigError::ValidationError(
            "TTS voice cannot be empty when set".to_string(),
        ));
    }

    if config.tts.base_rate.is_some() || config.tts.base_volume.is_some() {
        let baseline = BaselineVoice::from_reported(config.tts.base_rate, config.tts.base_volume);
        baseline
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    }

    if config.storage.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Output directory cannot be empty".to_string(),
        ));
    }

    if config.storage.naming == AudioNaming::Fixed {
        AudioId::parse(&config.storage.fixed_name)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("TTS Backend: {}", config.tts.backend);
    match config.tts.backend {
        TtsBackendKind::Espeak => tracing::info!("espeak Program: {}", config.tts.espeak_program),
        TtsBackendKind::Http => {
            tracing::info!("TTS URL: {}", config.tts.url);
            tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
        }
        TtsBackendKind::Tone => {}
    }
    tracing::info!("Voice: {}", config.tts.voice.as_deref().unwrap_or("(default)"));
    tracing::info!("Output Directory: {:?}", config.storage.output_dir);
    tracing::info!("Audio Naming: {}", config.storage.naming);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_load_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9000

[tts]
backend = "tone"
voice = "en-us"
base_rate = 180

[storage]
output_dir = "/tmp/empathy"
naming = "fixed"
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.tts.backend, TtsBackendKind::Tone);
        assert_eq!(config.tts.voice.as_deref(), Some("en-us"));
        assert_eq!(config.tts.base_rate, Some(180));
        assert_eq!(config.tts.base_volume, None);
        assert_eq!(config.storage.output_dir, PathBuf::from("/tmp/empathy"));
        assert_eq!(config.storage.naming, AudioNaming::Fixed);
        assert_eq!(config.storage.fixed_name, "empathy_output");
    }

    #[test]
    fn test_missing_required_file() {
        let result = load_config_from_path(Some(Path::new("/nonexistent/empathy.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_tts_url() {
        let mut config = AppConfig::default();
        config.tts.url = String::new();
        // espeak 后端不使用 URL
        assert!(validate_config(&config).is_ok());

        config.tts.backend = TtsBackendKind::Http;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_bad_baseline() {
        let mut config = AppConfig::default();
        config.tts.base_volume = Some(1.5);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_bad_fixed_name() {
        let mut config = AppConfig::default();
        config.storage.fixed_name = "../escape".to_string();
        // content_hash 模式下不使用
        assert!(validate_config(&config).is_ok());

        config.storage.naming = AudioNaming::Fixed;
        assert!(validate_config(&config).is_err());
    }
}
