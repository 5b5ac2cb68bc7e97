//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.
//!
//! The accepted platform tag is policy, not structure: the same database file
//! carries mappings for several platforms, and the hosting subsystem decides
//! which tag it accepts. The default follows the compiling target.

use serde::Deserialize;
use serde::de::Error;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
}

/// Mapping database configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Platform tag a mapping line must carry to be accepted
    /// (matched as the `platform:<tag>` token).
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Path to a `gamecontrollerdb.txt`-style file loaded at startup.
    /// Empty means no file; mappings are supplied from memory instead.
    #[serde(default)]
    pub path: String,
}

// Default value functions
fn default_platform() -> String {
    if cfg!(windows) {
        "Windows".to_string()
    } else if cfg!(target_os = "macos") {
        "Mac OS X".to_string()
    } else {
        "Linux".to_string()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            path: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gamepad_remap::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    fn validate(&self) -> Result<()> {
        if self.database.platform.is_empty() {
            return Err(crate::error::RemapError::Config(
                toml::de::Error::custom("database platform tag cannot be empty")
            ));
        }

        // A field token can never span a comma, so such a tag would never match
        if self.database.platform.contains(',') {
            return Err(crate::error::RemapError::Config(
                toml::de::Error::custom("database platform tag cannot contain a comma")
            ));
        }

        Ok(())
    }
}
