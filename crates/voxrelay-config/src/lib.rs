#![allow(clippy::must_use_candidate)]

pub mod encoder;
mod interpolate;
mod loader;
pub mod output;
pub mod synthesis;

use serde::Deserialize;

pub use encoder::*;
pub use output::*;
pub use synthesis::*;

/// Top-level voxrelay configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Speech synthesis backend configuration
    pub synthesis: SynthesisConfig,
    /// Output artifact pool configuration
    pub output: OutputConfig,
    /// Optional ffmpeg post-processing step
    #[serde(default)]
    pub encoder: Option<EncoderConfig>,
}
