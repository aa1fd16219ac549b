use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
pub(crate) struct Config {
    /// Playfield dimensions
    #[serde(default)]
    pub(crate) field: Field,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("arcsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if its contents could
    /// not be deserialized, or if the configured playfield is unusable.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.field.fits_feed_margin() {
            Ok(())
        } else {
            Err(ConfigError::FieldTooSmall(self.field))
        }
    }
}

/// Playfield dimensions, in simulation units.  Edges are identified, so the
/// field is a torus.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub(crate) struct Field {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Field {
    /// Whether a feed can spawn inside this field with the required margin
    /// from every edge
    fn fits_feed_margin(self) -> bool {
        self.width > 2.0 * consts::FEED_MARGIN && self.height > 2.0 * consts::FEED_MARGIN
    }
}

impl Default for Field {
    fn default() -> Field {
        Field {
            width: 800.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error(
        "playfield {}×{} is too small to hold the feed spawn margin",
        .0.width,
        .0.height
    )]
    FieldTooSmall(Field),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn load_custom_field() {
        let (_dir, path) = write_config("[field]\nwidth = 640.0\nheight = 480.0\n");
        let config = Config::load(&path, false).unwrap();
        assert_eq!(
            config,
            Config {
                field: Field {
                    width: 640.0,
                    height: 480.0,
                },
            }
        );
    }

    #[test]
    fn load_empty_file() {
        let (_dir, path) = write_config("");
        let config = Config::load(&path, false).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-config.toml");
        let config = Config::load(&path, true).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file_denied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-config.toml");
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn reject_unparseable_file() {
        let (_dir, path) = write_config("[field\nwidth = what");
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn reject_tiny_field() {
        let (_dir, path) = write_config("[field]\nwidth = 30.0\nheight = 600.0\n");
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::FieldTooSmall(_))
        ));
    }
}
