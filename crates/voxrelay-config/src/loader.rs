use std::path::Path;

use secrecy::ExposeSecret;

use crate::{Config, SynthesisBackend};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, placeholder expansion
    /// fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded = crate::interpolate::expand_placeholders(&raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a section is malformed, such as a remote
    /// backend without credentials or out-of-range timing values
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_synthesis()?;
        self.validate_output()?;
        self.validate_encoder()?;
        Ok(())
    }

    fn validate_synthesis(&self) -> anyhow::Result<()> {
        let synthesis = &self.synthesis;

        if synthesis.backend != SynthesisBackend::Dummy {
            let has_key = synthesis
                .api_key
                .as_ref()
                .is_some_and(|key| !key.expose_secret().is_empty());
            if !has_key {
                anyhow::bail!("synthesis.api_key must be set for the {} backend", synthesis.backend);
            }
        }

        if !synthesis.max_wait_time_sec.is_finite() || synthesis.max_wait_time_sec < 0.0 {
            anyhow::bail!("synthesis.max_wait_time_sec must be a finite non-negative number");
        }

        Ok(())
    }

    fn validate_output(&self) -> anyhow::Result<()> {
        let output = &self.output;

        if output.pool_size == 0 {
            anyhow::bail!("output.pool_size must be at least 1");
        }
        if output.file_stem.is_empty() {
            anyhow::bail!("output.file_stem must not be empty");
        }
        if output.extension.is_empty() {
            anyhow::bail!("output.extension must not be empty");
        }

        Ok(())
    }

    fn validate_encoder(&self) -> anyhow::Result<()> {
        let Some(ref encoder) = self.encoder else {
            return Ok(());
        };

        if !encoder.speed.is_finite() || encoder.speed <= 0.0 {
            anyhow::bail!("encoder.speed must be a positive number");
        }
        if !encoder.pitch.is_finite() || encoder.pitch <= 0.0 {
            anyhow::bail!("encoder.pitch must be a positive number");
        }

        Ok(())
    }
}
