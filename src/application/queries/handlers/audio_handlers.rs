//! Audio Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{AudioId, AudioStorePort};
use crate::application::queries::audio_queries::{GetAudio, GetAudioResponse};

/// GetAudio Handler - 查找已生成的音频文件
pub struct GetAudioHandler {
    audio_store: Arc<dyn AudioStorePort>,
}

impl GetAudioHandler {
    pub fn new(audio_store: Arc<dyn AudioStorePort>) -> Self {
        Self { audio_store }
    }

    pub async fn handle(&self, query: GetAudio) -> Result<GetAudioResponse, ApplicationError> {
        let stored = match query.audio_id {
            Some(raw_id) => {
                let id = AudioId::parse(&raw_id)?;
                self.audio_store.resolve(&id).await?
            }
            None => self
                .audio_store
                .latest()
                .await?
                .ok_or_else(|| ApplicationError::not_found("Audio", "latest"))?,
        };

        Ok(GetAudioResponse {
            audio_id: stored.id,
            path: stored.path,
            size_bytes: stored.size_bytes,
            content_type: "audio/wav".to_string(),
        })
    }
}
