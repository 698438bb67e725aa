use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::TtsError,
    http_client::http_client,
    types::{SynthesisOutput, SynthesisRequest},
};

use super::TtsProvider;

const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1";
const DEFAULT_ELEVENLABS_MODEL: &str = "eleven_multilingual_v2";

/// `ElevenLabs` synthesis backend
pub(crate) struct ElevenLabsProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
    voice_id: String,
    name: String,
}

impl ElevenLabsProvider {
    pub fn new(
        name: String,
        api_key: SecretString,
        base_url: Option<String>,
        model: Option<String>,
        voice_id: String,
    ) -> Self {
        let client = http_client();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_ELEVENLABS_API_URL.to_string());
        let model = model.unwrap_or_else(|| DEFAULT_ELEVENLABS_MODEL.to_string());

        Self {
            client,
            base_url,
            api_key,
            model,
            voice_id,
            name,
        }
    }
}

#[derive(serde::Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

#[async_trait]
impl TtsProvider for ElevenLabsProvider {
    async fn synthesize(&self, request: SynthesisRequest) -> crate::error::Result<Option<SynthesisOutput>> {
        let url = format!("{}/text-to-speech/{}", self.base_url, self.voice_id);

        tracing::debug!(
            "ElevenLabs TTS request: model={}, voice={}, input_len={}",
            self.model,
            request.voice.identifier(),
            request.text.len(),
        );

        let body = ElevenLabsRequest {
            text: &request.text,
            model_id: &self.model,
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", self.api_key.expose_secret().to_string())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs request failed: {e}");
                TtsError::ConnectionError(format!("Failed to send request to ElevenLabs: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("ElevenLabs API error ({status}): {error_text}");

            return Err(match status.as_u16() {
                401 => TtsError::AuthenticationFailed(error_text),
                400 => TtsError::InvalidRequest(error_text),
                _ => TtsError::ProviderApiError {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read ElevenLabs response body: {e}");
            TtsError::ConnectionError(format!("Failed to read ElevenLabs response body: {e}"))
        })?;

        tokio::fs::write(&request.file_path, &audio).await?;

        tracing::debug!(
            "ElevenLabs synthesis complete, {} bytes written to {}",
            audio.len(),
            request.file_path.display(),
        );

        Ok(Some(SynthesisOutput {
            file_path: request.file_path,
        }))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
