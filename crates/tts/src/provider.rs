pub mod dummy;
pub mod elevenlabs;
pub mod openai_tts;

use async_trait::async_trait;

use crate::types::{SynthesisOutput, SynthesisRequest};

/// Trait for synthesis backend implementations
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Synthesize the request into an audio artifact
    ///
    /// Returns `Ok(None)` when the backend gave up on the conversion,
    /// such as a queued job exceeding its wait deadline.
    async fn synthesize(&self, request: SynthesisRequest) -> crate::error::Result<Option<SynthesisOutput>>;

    /// Get the backend name
    fn name(&self) -> &str;
}
