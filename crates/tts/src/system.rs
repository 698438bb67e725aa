use std::time::Duration;

use secrecy::SecretString;
use voxrelay_config::{Config, EncoderConfig, SynthesisBackend, SynthesisConfig};

use crate::{
    encoder::AudioEncoder,
    error::TtsError,
    provider::{TtsProvider, dummy::DummyProvider, elevenlabs::ElevenLabsProvider, openai_tts::OpenAiTtsProvider},
    rotation::FileRotation,
    types::{SynthesisRequest, TtsRequest, TtsResponse},
};

/// Text-to-speech conversion pipeline
///
/// Owns the synthesis backend, the rotating artifact pool, and the
/// optional post-processing encoder.
pub struct TtsSystem {
    provider: Box<dyn TtsProvider>,
    rotation: FileRotation,
    encoder: Option<AudioEncoder>,
}

impl std::fmt::Debug for TtsSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtsSystem").finish_non_exhaustive()
    }
}

impl TtsSystem {
    /// Convert text into a spoken audio artifact
    ///
    /// Returns `Ok(None)` when the backend gave up on the conversion,
    /// such as a queued job exceeding its wait deadline. When an encoder
    /// is configured the response reports pitch as already applied, so
    /// callers do not shift it a second time.
    pub async fn convert(&self, request: TtsRequest) -> crate::error::Result<Option<TtsResponse>> {
        let file_path = self.rotation.next_path();

        let synthesis = SynthesisRequest {
            text: request.text,
            voice: request.voice,
            file_path,
        };

        let Some(output) = self.provider.synthesize(synthesis).await? else {
            return Ok(None);
        };

        let mut pitch_already_applied = false;
        if let Some(ref encoder) = self.encoder {
            encoder.reencode(&output.file_path).await?;
            pitch_already_applied = true;
        }

        Ok(Some(TtsResponse {
            file_path: output.file_path,
            pitch_already_applied,
        }))
    }
}

/// Builder for constructing the TTS system from configuration
pub struct TtsSystemBuilder<'a> {
    config: &'a Config,
}

impl<'a> TtsSystemBuilder<'a> {
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// # Errors
    ///
    /// Returns an error if the backend is missing required settings, the
    /// worker thread cannot be spawned, or the output directory cannot
    /// be created
    pub fn build(self) -> crate::error::Result<TtsSystem> {
        let provider = build_provider(&self.config.synthesis)?;

        let output = &self.config.output;
        let rotation = FileRotation::new(
            output.dir.clone(),
            output.pool_size,
            output.file_stem.clone(),
            output.extension.clone(),
        )?;

        let encoder = self.config.encoder.as_ref().map(build_encoder);

        Ok(TtsSystem {
            provider,
            rotation,
            encoder,
        })
    }
}

fn build_provider(config: &SynthesisConfig) -> crate::error::Result<Box<dyn TtsProvider>> {
    let name = config.backend.to_string();
    tracing::debug!("Initializing synthesis backend: {name}");

    let provider: Box<dyn TtsProvider> = match config.backend {
        SynthesisBackend::Dummy => Box::new(DummyProvider::new(name)),
        SynthesisBackend::OpenaiTts => {
            let api_key = resolve_api_key(&name, config)?;
            let max_wait = max_wait(config)?;

            Box::new(OpenAiTtsProvider::new(
                name,
                api_key,
                config.base_url.clone(),
                config.model.clone(),
                config.voice.clone(),
                max_wait,
            )?)
        }
        SynthesisBackend::Elevenlabs => {
            let api_key = resolve_api_key(&name, config)?;
            let voice_id = config.voice.clone().ok_or_else(|| {
                TtsError::ConfigError("synthesis.voice (a voice id) is required for the elevenlabs backend".to_string())
            })?;

            Box::new(ElevenLabsProvider::new(
                name,
                api_key,
                config.base_url.clone(),
                config.model.clone(),
                voice_id,
            ))
        }
    };

    Ok(provider)
}

fn resolve_api_key(name: &str, config: &SynthesisConfig) -> crate::error::Result<SecretString> {
    config
        .api_key
        .clone()
        .ok_or_else(|| TtsError::ConfigError(format!("API key required for synthesis backend '{name}'")))
}

fn max_wait(config: &SynthesisConfig) -> crate::error::Result<Duration> {
    Duration::try_from_secs_f64(config.max_wait_time_sec)
        .map_err(|e| TtsError::ConfigError(format!("invalid synthesis.max_wait_time_sec: {e}")))
}

fn build_encoder(config: &EncoderConfig) -> AudioEncoder {
    AudioEncoder::new(config.ffmpeg_path.clone(), config.speed, config.pitch)
}
