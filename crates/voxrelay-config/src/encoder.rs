use std::path::PathBuf;

use serde::Deserialize;

/// ffmpeg post-processing configuration
///
/// When present, every synthesized artifact is re-encoded in place with
/// the configured speed and pitch before it is handed back to the caller.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncoderConfig {
    /// Path to the ffmpeg executable
    pub ffmpeg_path: PathBuf,
    /// Playback speed multiplier
    #[serde(default = "default_factor")]
    pub speed: f64,
    /// Pitch multiplier, applied through a sample-rate change
    #[serde(default = "default_factor")]
    pub pitch: f64,
}

#[allow(clippy::missing_const_for_fn)]
fn default_factor() -> f64 {
    1.0
}
