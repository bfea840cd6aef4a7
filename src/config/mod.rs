//! Configuration management for the moodlog application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. The only setting is the
//! data directory that holds the persisted entry store.
//!
//! # Environment Variables
//!
//! - `MOODLOG_DIR`: Path to the data directory (defaults to ~/Documents/moods)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the moodlog application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use moodlog::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/moods"),
/// };
/// ```
pub struct Config {
    /// Directory where the entry store lives.
    ///
    /// Loaded from the MOODLOG_DIR environment variable with a fallback to
    /// ~/Documents/moods if not specified.
    pub data_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Default for Config {
    /// Creates a new Config with default values.
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(""),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Reads `MOODLOG_DIR`, falling back to `~/Documents/moods`, and expands
    /// the result with `shellexpand` so `~` and environment variable
    /// references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails
    /// - The resulting path is empty
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(constants::ENV_VAR_MOODLOG_DIR).unwrap_or_else(|_| {
            let home = env::var(constants::ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, constants::DEFAULT_DATA_SUBDIR)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        Ok(Config { data_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Data directory path is empty" if the data directory path is empty
    /// - "Data directory must be an absolute path" if the path is relative
    ///
    /// # Examples
    ///
    /// ```
    /// use moodlog::Config;
    /// use std::path::PathBuf;
    ///
    /// let valid_config = Config {
    ///     data_dir: PathBuf::from("/absolute/path"),
    /// };
    /// assert!(valid_config.validate().is_ok());
    ///
    /// let invalid_config = Config {
    ///     data_dir: PathBuf::from("relative/path"),
    /// };
    /// assert!(invalid_config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }

    /// Path of the entry store slot inside the data directory.
    pub fn entries_path(&self) -> PathBuf {
        self.data_dir.join(constants::ENTRIES_FILE_NAME)
    }
}
