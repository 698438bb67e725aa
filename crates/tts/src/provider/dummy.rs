use async_trait::async_trait;

use crate::types::{SynthesisOutput, SynthesisRequest};

use super::TtsProvider;

/// Offline backend that produces empty placeholder artifacts
///
/// Lets the surrounding pipeline run without spending synthesis quota.
pub(crate) struct DummyProvider {
    name: String,
}

impl DummyProvider {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

#[async_trait]
impl TtsProvider for DummyProvider {
    async fn synthesize(&self, request: SynthesisRequest) -> crate::error::Result<Option<SynthesisOutput>> {
        tracing::debug!(
            "Dummy synthesis request: voice={}, input_len={}",
            request.voice.identifier(),
            request.text.len(),
        );

        tokio::fs::write(&request.file_path, b"").await?;

        Ok(Some(SynthesisOutput {
            file_path: request.file_path,
        }))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
