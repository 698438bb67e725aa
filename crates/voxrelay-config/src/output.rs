use std::path::PathBuf;

use serde::Deserialize;

/// Rotating pool of output artifact paths
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory synthesized artifacts are written into
    pub dir: PathBuf,
    /// Number of distinct artifact slots before paths repeat
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
    /// File name stem, producing `<stem>_<slot>.<extension>`
    #[serde(default = "default_file_stem")]
    pub file_stem: String,
    /// Artifact file extension, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_pool_size() -> usize {
    64
}

fn default_file_stem() -> String {
    "vo".to_string()
}

fn default_extension() -> String {
    "mp3".to_string()
}
