//! File Audio Store - 文件系统音频存储实现
//!
//! 实现 AudioStorePort trait

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::time::SystemTime;
use tokio::fs;

use crate::application::ports::{
    generate_audio_id, AudioId, AudioNaming, AudioStoreError, AudioStorePort, StoredAudio,
};

/// 固定命名模式下的默认文件名（不含扩展名）
pub const DEFAULT_FIXED_NAME: &str = "empathy_output";

/// 文件存储配置
#[derive(Debug, Clone)]
pub struct FileAudioStoreConfig {
    /// 输出目录
    pub output_dir: PathBuf,
    /// 命名方式
    pub naming: AudioNaming,
    /// 固定命名模式下的文件名（不含扩展名）
    pub fixed_name: String,
}

impl Default for FileAudioStoreConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            naming: AudioNaming::ContentHash,
            fixed_name: DEFAULT_FIXED_NAME.to_string(),
        }
    }
}

/// 文件系统音频存储
pub struct FileAudioStore {
    output_dir: PathBuf,
    naming: AudioNaming,
    fixed_id: AudioId,
    /// 最近一次生成的音频
    latest: RwLock<Option<AudioId>>,
}

impl FileAudioStore {
    /// 创建文件存储（目录在首次合成时创建）
    ///
    /// content_hash 模式下，输出目录中已有的最新 WAV 文件作为初始的 latest，
    /// 重启后 `GET /audio` 仍可访问
    pub fn new(config: FileAudioStoreConfig) -> Result<Self, AudioStoreError> {
        let fixed_id = AudioId::parse(&config.fixed_name)?;
        let latest = match config.naming {
            AudioNaming::ContentHash => newest_audio(&config.output_dir),
            AudioNaming::Fixed => None,
        };

        if let Some(id) = &latest {
            tracing::info!(
                audio_id = %id,
                output_dir = %config.output_dir.display(),
                naming = %config.naming,
                "Restored latest audio from output directory"
            );
        }

        Ok(Self {
            output_dir: config.output_dir,
            naming: config.naming,
            fixed_id,
            latest: RwLock::new(latest),
        })
    }

    fn latest_id(&self) -> Option<AudioId> {
        self.latest
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

/// 按修改时间查找目录中最新的 `<id>.wav`
///
/// 目录不存在或不可读时返回 None；临时文件和非法 id 的文件被忽略
fn newest_audio(dir: &Path) -> Option<AudioId> {
    let entries = std::fs::read_dir(dir).ok()?;

    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("wav") {
                return None;
            }
            let id = AudioId::parse(path.file_stem()?.to_str()?).ok()?;
            let metadata = entry.metadata().ok()?;
            if !metadata.is_file() {
                return None;
            }
            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            Some((modified, id))
        })
        .max_by(|(a, a_id), (b, b_id)| a.cmp(b).then_with(|| a_id.as_str().cmp(b_id.as_str())))
        .map(|(_, id)| id)
}

#[async_trait]
impl AudioStorePort for FileAudioStore {
    fn allocate(&self, text: &str, voice: Option<&str>) -> AudioId {
        match self.naming {
            AudioNaming::ContentHash => generate_audio_id(text, voice),
            AudioNaming::Fixed => self.fixed_id.clone(),
        }
    }

    fn audio_path(&self, id: &AudioId) -> PathBuf {
        self.output_dir.join(format!("{}.wav", id))
    }

    fn mark_latest(&self, id: &AudioId) {
        let mut latest = self
            .latest
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *latest = Some(id.clone());

        tracing::debug!(audio_id = %id, "Latest audio updated");
    }

    async fn latest(&self) -> Result<Option<StoredAudio>, AudioStoreError> {
        // 固定命名模式下，磁盘上已有的输出文件即为最近一次的结果（重启后仍可访问）
        let id = match (self.latest_id(), self.naming) {
            (Some(id), _) => id,
            (None, AudioNaming::Fixed) => self.fixed_id.clone(),
            (None, AudioNaming::ContentHash) => return Ok(None),
        };

        match self.resolve(&id).await {
            Ok(stored) => Ok(Some(stored)),
            Err(AudioStoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn resolve(&self, id: &AudioId) -> Result<StoredAudio, AudioStoreError> {
        let path = self.audio_path(id);

        match fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => Ok(StoredAudio {
                id: id.clone(),
                path,
                size_bytes: metadata.len(),
            }),
            Ok(_) => Err(AudioStoreError::NotFound(id.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AudioStoreError::NotFound(id.to_string()))
            }
            Err(e) => Err(AudioStoreError::IoError(e.to_string())),
        }
    }
}
