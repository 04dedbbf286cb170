//! Voice Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::SpeechBackendPort;
use crate::application::queries::{ListVoices, ListVoicesResponse};

/// ListVoices Handler
pub struct ListVoicesHandler {
    backend: Arc<dyn SpeechBackendPort>,
}

impl ListVoicesHandler {
    pub fn new(backend: Arc<dyn SpeechBackendPort>) -> Self {
        Self { backend }
    }

    pub async fn handle(&self, _query: ListVoices) -> Result<ListVoicesResponse, ApplicationError> {
        let voices = self.backend.list_voices().await?;
        tracing::debug!(backend = self.backend.name(), count = voices.len(), "Voices listed");

        Ok(ListVoicesResponse {
            backend: self.backend.name(),
            voices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::testing::RecordingBackend;
    use crate::application::ports::VoiceInfo;

    #[tokio::test]
    async fn test_list_voices() {
        let backend = RecordingBackend {
            voices: vec![VoiceInfo {
                id: "en-us".to_string(),
                name: "English (America)".to_string(),
                language: "en-us".to_string(),
            }],
            ..Default::default()
        };
        let handler = ListVoicesHandler::new(Arc::new(backend));

        let response = handler.handle(ListVoices).await.unwrap();
        assert_eq!(response.backend, "recording");
        assert_eq!(response.voices.len(), 1);
        assert_eq!(response.voices[0].id, "en-us");
    }
}
