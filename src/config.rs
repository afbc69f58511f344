use serde::Serialize;
use std::path::PathBuf;

use crate::exiftool::ExifTool;

/// Run settings, filled from command-line flags.
///
/// Nothing is read from disk or the environment; the defaults match running
/// the binary with no flags.
///
/// ```rust
/// use hades::config::Config;
///
/// let mut config = Config::default();
/// config.dry_run = true;
/// assert_eq!(config.exiftool.to_str(), Some("exiftool"));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Program used for every metadata operation.
    pub exiftool: PathBuf,
    /// Print the tag assignments instead of writing them.
    pub dry_run: bool,
    /// Also print the value set as JSON before confirming.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exiftool: PathBuf::from("exiftool"),
            dry_run: false,
            json: false,
        }
    }
}

impl Config {
    /// Build the tool runner for this configuration.
    pub fn tool(&self) -> ExifTool {
        ExifTool::with_program(&self.exiftool)
    }
}
