//! Ticker configuration, loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) is valid.
//!
//! ```toml
//! initial_capacity = 32
//! trace_dispatch = true
//! max_fixed_steps_per_frame = 4
//! ```

use cadence_core::{CadenceError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for a [`Ticker`](crate::Ticker) and its [`FrameDriver`](crate::FrameDriver)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerConfig {
    /// Slots reserved up front in each channel
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
    /// Emit a trace event for every dispatched tick
    #[serde(default)]
    pub trace_dispatch: bool,
    /// Upper bound on fixed steps the frame driver runs in one frame
    #[serde(default = "default_max_fixed_steps")]
    pub max_fixed_steps_per_frame: u32,
}

fn default_initial_capacity() -> usize {
    16
}

fn default_max_fixed_steps() -> u32 {
    8
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            trace_dispatch: false,
            max_fixed_steps_per_frame: default_max_fixed_steps(),
        }
    }
}

impl TickerConfig {
    /// Parse config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TickerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            CadenceError::TomlParse(msg) => {
                CadenceError::TomlParse(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Save config to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.max_fixed_steps_per_frame == 0 {
            return Err(CadenceError::Config(
                "max_fixed_steps_per_frame must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
