#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod bridge;
mod encoder;
mod error;
mod http_client;
mod provider;
mod rotation;
mod system;
mod types;

use std::sync::Arc;

pub use error::{Result, TtsError};
pub use system::{TtsSystem, TtsSystemBuilder};
pub use types::{TtsRequest, TtsResponse, Voice};

/// Build the TTS system from configuration
pub fn build_system(config: &voxrelay_config::Config) -> anyhow::Result<Arc<TtsSystem>> {
    let system = Arc::new(
        TtsSystemBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize TTS system: {e}"))?,
    );
    Ok(system)
}
