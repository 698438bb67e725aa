//! Programmatic configuration builder for integration tests

use std::path::Path;

use secrecy::SecretString;
use voxrelay_config::{Config, EncoderConfig, OutputConfig, SynthesisBackend, SynthesisConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Config with the dummy backend writing into `output_dir`
    pub fn dummy(output_dir: &Path) -> Self {
        Self {
            config: Config {
                synthesis: SynthesisConfig {
                    backend: SynthesisBackend::Dummy,
                    api_key: None,
                    base_url: None,
                    max_wait_time_sec: 5.0,
                    model: None,
                    voice: None,
                },
                output: OutputConfig {
                    dir: output_dir.to_path_buf(),
                    pool_size: 64,
                    file_stem: "vo".to_owned(),
                    extension: "mp3".to_owned(),
                },
                encoder: None,
            },
        }
    }

    /// Config with the bridged backend pointed at a mock speech server
    pub fn openai(base_url: &str, output_dir: &Path) -> Self {
        let mut builder = Self::dummy(output_dir);
        builder.config.synthesis.backend = SynthesisBackend::OpenaiTts;
        builder.config.synthesis.api_key = Some(SecretString::from("test-key"));
        builder.config.synthesis.base_url = Some(base_url.to_owned());
        builder
    }

    /// Set the conversion deadline in seconds
    pub fn with_max_wait(mut self, secs: f64) -> Self {
        self.config.synthesis.max_wait_time_sec = secs;
        self
    }

    /// Enable the post-processing step with the given encoder executable
    pub fn with_encoder(mut self, ffmpeg_path: &Path) -> Self {
        self.config.encoder = Some(EncoderConfig {
            ffmpeg_path: ffmpeg_path.to_path_buf(),
            speed: 1.0,
            pitch: 1.0,
        });
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
