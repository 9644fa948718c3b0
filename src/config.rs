//! Draw settings
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then command-line overrides.
//!
//! ```toml
//! max_attempts = 5000
//! seed = 2024
//! ```

use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::adapters::file::read_to_string;
use crate::core::services::{Assigner, DEFAULT_MAX_ATTEMPTS};
use crate::error::{Result, SantaError};

/// Settings for one draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// How many shuffles to try before giving up
    pub max_attempts: u32,
    /// Fixed seed for a reproducible draw
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`SantaError::InputRead`] if the file can't be read and
    /// [`SantaError::Config`] if it isn't valid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate settings from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`SantaError::Config`] on syntax errors, unknown keys or
    /// out-of-range values.
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Self =
            toml::from_str(content).map_err(|e| SantaError::Config(e.message().to_string()))?;
        settings.validate()
    }

    /// Apply command-line overrides on top of these settings
    ///
    /// # Errors
    ///
    /// Returns [`SantaError::Config`] if the result is out of range.
    pub fn with_overrides(mut self, max_attempts: Option<u32>, seed: Option<u64>) -> Result<Self> {
        if let Some(max_attempts) = max_attempts {
            self.max_attempts = max_attempts;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.max_attempts == 0 {
            return Err(SantaError::Config("max_attempts must be at least 1".to_string()));
        }
        Ok(self)
    }

    /// Build the assigner these settings describe
    #[must_use]
    pub const fn assigner(&self) -> Assigner {
        Assigner::new(self.max_attempts)
    }

    /// Random generator for the draw: seeded if a seed is set, from OS
    /// entropy otherwise
    #[must_use]
    pub fn rng(&self) -> ChaCha8Rng {
        self.seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
    }
}
