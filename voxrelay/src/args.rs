use std::path::PathBuf;

use clap::Parser;

/// Voxrelay voice-over generator
#[derive(Debug, Parser)]
#[command(name = "voxrelay", about = "Queue-bridged text-to-speech relay for dialogue voice-over")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "voxrelay.toml", env = "VOXRELAY_CONFIG")]
    pub config: PathBuf,

    /// Speaker category carried in the voice hint
    #[arg(long, default_value = "narrator", env = "VOXRELAY_CATEGORY")]
    pub category: String,

    /// Use the female voice variant of the category
    #[arg(long)]
    pub female: bool,

    /// Text to convert; when omitted, one conversion is run per stdin line
    #[arg(long)]
    pub text: Option<String>,
}
