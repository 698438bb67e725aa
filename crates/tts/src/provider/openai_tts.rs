use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    bridge::{SynthesisBridge, SynthesisCall},
    error::TtsError,
    http_client::blocking_http_client,
    types::{SynthesisOutput, SynthesisRequest, Voice},
};

use super::TtsProvider;

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "tts-1";
const DEFAULT_OPENAI_VOICE: &str = "alloy";

/// Marker prefix carrying the voice hint inside the synthesis payload
const VOICE_HINT_MARKER: &str = "VOICE_ID:";
/// Separates the voice hint from the text to synthesize
const VOICE_HINT_DELIMITER: &str = "|||";

/// `OpenAI` speech synthesis backend
///
/// Conversions are funneled through a [`SynthesisBridge`] onto a
/// dedicated worker thread, so the blocking HTTP call never runs on the
/// async runtime.
pub(crate) struct OpenAiTtsProvider {
    bridge: SynthesisBridge,
    name: String,
}

impl OpenAiTtsProvider {
    pub fn new(
        name: String,
        api_key: SecretString,
        base_url: Option<String>,
        model: Option<String>,
        voice: Option<String>,
        max_wait: Duration,
    ) -> crate::error::Result<Self> {
        let call = OpenAiSpeechCall {
            base_url: base_url.unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string()),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            voice: voice.unwrap_or_else(|| DEFAULT_OPENAI_VOICE.to_string()),
        };

        Ok(Self {
            bridge: SynthesisBridge::new(call, max_wait)?,
            name,
        })
    }
}

/// `VOICE_ID:<identifier>|||<text>`, understood by proxies that route
/// on the speaker hint before forwarding the plain text
fn encode_payload(voice: &Voice, text: &str) -> String {
    format!("{VOICE_HINT_MARKER}{}{VOICE_HINT_DELIMITER}{text}", voice.identifier())
}

#[async_trait]
impl TtsProvider for OpenAiTtsProvider {
    async fn synthesize(&self, request: SynthesisRequest) -> crate::error::Result<Option<SynthesisOutput>> {
        let payload = encode_payload(&request.voice, &request.text);

        tracing::debug!(
            "OpenAI TTS request: voice={}, input_len={}",
            request.voice.identifier(),
            request.text.len(),
        );

        let result = self.bridge.convert(payload, request.file_path).await;

        Ok(result.map(|result| SynthesisOutput {
            file_path: result.destination,
        }))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Blocking half of the `OpenAI` backend, executed on the worker thread
struct OpenAiSpeechCall {
    base_url: String,
    api_key: SecretString,
    model: String,
    voice: String,
}

#[derive(serde::Serialize)]
struct OpenAiSpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
}

impl SynthesisCall for OpenAiSpeechCall {
    fn synthesize(&self, payload: &str, destination: &Path) -> crate::error::Result<()> {
        let url = format!("{}/audio/speech", self.base_url);

        let body = OpenAiSpeechRequest {
            model: &self.model,
            input: payload,
            voice: &self.voice,
            response_format: "mp3",
        };

        let response = blocking_http_client()
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .json(&body)
            .send()
            .map_err(|e| {
                tracing::error!("OpenAI TTS request failed: {e}");
                TtsError::ConnectionError(format!("Failed to send request to OpenAI TTS: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("OpenAI TTS API error ({status}): {error_text}");

            return Err(match status.as_u16() {
                401 => TtsError::AuthenticationFailed(error_text),
                400 => TtsError::InvalidRequest(error_text),
                _ => TtsError::ProviderApiError {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let audio = response.bytes().map_err(|e| {
            tracing::error!("Failed to read OpenAI TTS response body: {e}");
            TtsError::ConnectionError(format!("Failed to read OpenAI TTS response body: {e}"))
        })?;

        std::fs::write(destination, &audio)?;

        tracing::debug!(
            "OpenAI TTS synthesis complete, {} bytes written to {}",
            audio.len(),
            destination.display(),
        );

        Ok(())
    }
}
