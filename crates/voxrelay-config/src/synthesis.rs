use std::fmt;

use secrecy::SecretString;
use serde::Deserialize;

/// Speech synthesis backend configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisConfig {
    /// Which synthesis backend to use
    #[serde(rename = "type")]
    pub backend: SynthesisBackend,
    /// API key for remote backends
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Upper bound in seconds on how long a single conversion may wait
    /// for its result before being abandoned
    pub max_wait_time_sec: f64,
    /// Model override
    #[serde(default)]
    pub model: Option<String>,
    /// Voice override
    #[serde(default)]
    pub voice: Option<String>,
}

/// Supported synthesis backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisBackend {
    /// Offline placeholder backend
    Dummy,
    /// `OpenAI` speech synthesis
    OpenaiTts,
    /// `ElevenLabs`
    Elevenlabs,
}

impl fmt::Display for SynthesisBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dummy => "dummy",
            Self::OpenaiTts => "openai_tts",
            Self::Elevenlabs => "elevenlabs",
        };
        f.write_str(name)
    }
}
