//! Configuration for mgmtwire
//!
//! Codec settings with sensible defaults.

use crate::error::{Result, WireError};

/// Main configuration for the JSON codec
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Encoding Configuration
    // -------------------------------------------------------------------------
    /// Emit indented JSON instead of the compact single-line form
    pub pretty_json: bool,

    // -------------------------------------------------------------------------
    // Limits
    // -------------------------------------------------------------------------
    /// Largest message (in bytes) the codec will encode or decode
    pub max_message_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty_json: false,
            max_message_size: 4 * 1024 * 1024, // 4 MB
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.max_message_size == 0 {
            return Err(WireError::Config(
                "max_message_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Enable or disable indented JSON output
    pub fn pretty_json(mut self, pretty: bool) -> Self {
        self.config.pretty_json = pretty;
        self
    }

    /// Set the maximum message size (in bytes)
    pub fn max_message_size(mut self, size: usize) -> Self {
        self.config.max_message_size = size;
        self
    }

    /// Set the maximum message size in KB
    ///
    /// Fails when the size in bytes does not fit in `usize`.
    pub fn max_message_kb(self, kb: usize) -> Result<Self> {
        let size = kb.checked_mul(1024).ok_or_else(|| {
            WireError::Config(format!("max_message_kb {} is too large", kb))
        })?;
        Ok(self.max_message_size(size))
    }

    pub fn build(self) -> Config {
        self.config
    }
}
