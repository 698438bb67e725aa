use std::path::PathBuf;

/// Voice selection for a conversion
#[derive(Debug, Clone)]
pub struct Voice {
    /// Speaker category, e.g. a character or faction name
    pub category: String,
    /// Whether the speaker is female
    pub female: bool,
}

impl Voice {
    /// Stable identifier derived from the category and gender,
    /// e.g. "Dark Elf" with `female: false` becomes `dark_elf_male`
    pub fn identifier(&self) -> String {
        let category = self.category.to_lowercase().replace(' ', "_");
        let gender = if self.female { "female" } else { "male" };
        format!("{category}_{gender}")
    }
}

/// A text-to-speech conversion request
#[derive(Debug, Clone)]
pub struct TtsRequest {
    /// Text to synthesize into speech
    pub text: String,
    /// Voice to speak with
    pub voice: Voice,
}

/// Result of a completed conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtsResponse {
    /// Path of the synthesized audio artifact
    pub file_path: PathBuf,
    /// Whether pitch adjustment was already applied during post-processing
    pub pitch_already_applied: bool,
}

/// What a synthesis backend receives for a single conversion
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// Text to synthesize
    pub text: String,
    /// Voice to speak with
    pub voice: Voice,
    /// Where the audio artifact must be written
    pub file_path: PathBuf,
}

/// What a synthesis backend reports back on success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisOutput {
    /// Path of the written audio artifact
    pub file_path: PathBuf,
}
