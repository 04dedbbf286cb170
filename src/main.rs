//! Empathy - 情绪自适应语音合成服务
//!
//! 启动流程：加载配置 → 初始化日志 → 创建合成后端 → 创建引擎和存储 → 启动 HTTP 服务

use std::sync::Arc;

use empathy::application::{EmpathyEngine, EngineOptions, SpeechBackendPort};
use empathy::config::{load_config, print_config, AppConfig, LogConfig, TtsBackendKind};
use empathy::infrastructure::adapters::{
    EspeakBackend, EspeakBackendConfig, FileAudioStore, FileAudioStoreConfig, HttpSpeechClient,
    HttpSpeechClientConfig, ToneBackend, WavInspector,
};
use empathy::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Empathy - emotionally adaptive text-to-speech");
    print_config(&config);

    let backend = create_backend(&config)?;
    if !backend.health_check().await {
        tracing::warn!(backend = backend.name(), "Speech backend is not reachable yet");
    }

    let engine = EmpathyEngine::new(
        backend,
        EngineOptions {
            voice_id: config.tts.voice.clone(),
            base_rate: config.tts.base_rate,
            base_volume: config.tts.base_volume,
        },
    )
    .await
    .map_err(|e| anyhow::anyhow!("Failed to create engine: {}", e))?
    .with_inspector(Arc::new(WavInspector::new()));

    let baseline = engine.baseline();
    tracing::info!(
        base_rate = baseline.base_rate,
        base_volume = baseline.base_volume,
        "Engine ready"
    );

    tokio::fs::create_dir_all(&config.storage.output_dir).await?;
    let audio_store = FileAudioStore::new(FileAudioStoreConfig {
        output_dir: config.storage.output_dir.clone(),
        naming: config.storage.naming,
        fixed_name: config.storage.fixed_name.clone(),
    })?;

    let state = AppState::new(Arc::new(engine), Arc::new(audio_store));
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志（RUST_LOG 优先于配置）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},empathy={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// 按配置创建合成后端
fn create_backend(config: &AppConfig) -> anyhow::Result<Arc<dyn SpeechBackendPort>> {
    let backend: Arc<dyn SpeechBackendPort> = match config.tts.backend {
        TtsBackendKind::Espeak => Arc::new(EspeakBackend::new(EspeakBackendConfig {
            program: config.tts.espeak_program.clone(),
        })),
        TtsBackendKind::Http => Arc::new(HttpSpeechClient::new(
            HttpSpeechClientConfig::new(&config.tts.url).with_timeout(config.tts.timeout_secs),
        )?),
        TtsBackendKind::Tone => Arc::new(ToneBackend::new()),
    };

    Ok(backend)
}
