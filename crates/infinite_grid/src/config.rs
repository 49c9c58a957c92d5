//! Grid configuration loaded from TOML.
//!
//! ```toml
//! [grid]
//! rows = 20
//! cols = 20
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::coords::GridExtent;

/// Error loading a [`GridConfig`].
#[derive(Debug)]
pub enum ConfigError {
  Io(std::io::Error),
  Parse(toml::de::Error),
  /// A grid dimension was zero.
  EmptyExtent { rows: u32, cols: u32 },
  /// A grid dimension does not fit in an `i32` tile index.
  ExtentTooLarge { rows: u32, cols: u32 },
}

impl std::fmt::Display for ConfigError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io(e) => write!(f, "failed to read grid config: {}", e),
      Self::Parse(e) => write!(f, "failed to parse grid config: {}", e),
      Self::EmptyExtent { rows, cols } => {
        write!(f, "grid extent must be non-zero: rows={}, cols={}", rows, cols)
      }
      Self::ExtentTooLarge { rows, cols } => write!(
        f,
        "grid extent must not exceed {}: rows={}, cols={}",
        i32::MAX,
        rows,
        cols
      ),
    }
  }
}

impl std::error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io(e) => Some(e),
      Self::Parse(e) => Some(e),
      Self::EmptyExtent { .. } | Self::ExtentTooLarge { .. } => None,
    }
  }
}

impl From<std::io::Error> for ConfigError {
  fn from(e: std::io::Error) -> Self {
    Self::Io(e)
  }
}

impl From<toml::de::Error> for ConfigError {
  fn from(e: toml::de::Error) -> Self {
    Self::Parse(e)
  }
}

/// Top-level config file layout.
#[derive(Deserialize, Debug, Clone, Default)]
struct ConfigFile {
  #[serde(default)]
  grid: GridConfig,
}

/// Dimensions of the tile grid.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GridConfig {
  pub rows: u32,
  pub cols: u32,
}

impl Default for GridConfig {
  fn default() -> Self {
    Self { rows: 20, cols: 20 }
  }
}

impl GridConfig {
  /// Parses and validates a TOML config document.
  pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
    let file: ConfigFile = toml::from_str(source)?;
    file.grid.validate()?;
    Ok(file.grid)
  }

  /// Reads, parses and validates a TOML config file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let source = std::fs::read_to_string(path)?;
    Self::from_toml_str(&source)
  }

  /// Rejects zero dimensions and dimensions past `i32::MAX`.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.rows == 0 || self.cols == 0 {
      return Err(ConfigError::EmptyExtent {
        rows: self.rows,
        cols: self.cols,
      });
    }
    if self.rows > i32::MAX as u32 || self.cols > i32::MAX as u32 {
      return Err(ConfigError::ExtentTooLarge {
        rows: self.rows,
        cols: self.cols,
      });
    }
    Ok(())
  }

  /// Grid extent described by this config.
  ///
  /// # Panics
  /// Panics if the config does not pass [`validate`](Self::validate).
  pub fn extent(&self) -> GridExtent {
    GridExtent::new(self.rows, self.cols)
  }
}
