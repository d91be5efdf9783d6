//! Defaults store seeding new configurator sessions

use std::path::Path;

use crate::config::{BadgeConfig, PartialBadgeConfig};
use crate::error::ConfigError;

/// The last-saved badge configuration
///
/// Owned by whoever runs the configurator and passed explicitly to sessions.
/// Readers take a snapshot; the only writer is [`DefaultsStore::update_defaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultsStore {
    defaults: BadgeConfig,
}

impl DefaultsStore {
    /// Create a store holding the built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given defaults
    pub fn with_defaults(defaults: BadgeConfig) -> Self {
        Self { defaults }
    }

    /// Immutable copy of the current defaults
    pub fn snapshot(&self) -> BadgeConfig {
        self.defaults.clone()
    }

    /// Merge the given fields into the defaults
    pub fn update_defaults(&mut self, update: PartialBadgeConfig) {
        self.defaults = update.complete(&self.defaults);
        log::debug!("updated badge defaults: {:?}", self.defaults);
    }

    /// Load defaults from a TOML file
    ///
    /// Fields the file leaves out take the built-in defaults. A missing file
    /// yields a store with the built-in defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!(
                "no defaults file at {}, using built-in defaults",
                path.display()
            );
            return Ok(Self::new());
        }
        let partial = PartialBadgeConfig::from_file(path)?;
        Ok(Self::with_defaults(partial.complete(&BadgeConfig::default())))
    }

    /// Write the defaults to a TOML file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(&self.defaults)?;
        std::fs::write(path, content).map_err(|e| ConfigError::io(path, e))?;
        log::info!("saved badge defaults to {}", path.display());
        Ok(())
    }
}
