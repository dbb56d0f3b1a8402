//! Configuration system for bitqueens.
//!
//! Load solver configuration from TOML or YAML files to choose the search
//! kernel and the integer widths without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use bitqueens_config::{KernelType, MaskWidth, SolverConfig};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     kernel = "stacked"
//!     mask_width = "u32"
//!     widths = [4, 8]
//! "#).unwrap();
//!
//! assert_eq!(config.kernel, KernelType::Stacked);
//! assert_eq!(config.mask_width, MaskWidth::U32);
//! assert_eq!(config.widths, vec![4, 8]);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use bitqueens_config::SolverConfig;
//!
//! let config = SolverConfig::load("bitqueens.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Search kernel used below the first row.
    #[serde(default)]
    pub kernel: KernelType,

    /// Integer type holding the column masks; bounds the board width.
    #[serde(default)]
    pub mask_width: MaskWidth,

    /// Integer type accumulating the solution count.
    #[serde(default)]
    pub count_width: CountWidth,

    /// Board widths to solve when none are given on the command line.
    #[serde(default)]
    pub widths: Vec<u32>,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the search kernel.
    pub fn with_kernel(mut self, kernel: KernelType) -> Self {
        self.kernel = kernel;
        self
    }

    /// Sets the column-mask width.
    pub fn with_mask_width(mut self, mask_width: MaskWidth) -> Self {
        self.mask_width = mask_width;
        self
    }

    /// Sets the solution-count width.
    pub fn with_count_width(mut self, count_width: CountWidth) -> Self {
        self.count_width = count_width;
        self
    }

    /// Sets the default board widths.
    pub fn with_widths(mut self, widths: impl IntoIterator<Item = u32>) -> Self {
        self.widths = widths.into_iter().collect();
        self
    }

    /// Checks that every default width fits the configured mask.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitqueens_config::{MaskWidth, SolverConfig};
    ///
    /// let config = SolverConfig::new()
    ///     .with_mask_width(MaskWidth::U8)
    ///     .with_widths([4, 9]);
    ///
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = self.mask_width.bits();
        if let Some(&width) = self.widths.iter().find(|&&w| w == 0 || w > max) {
            return Err(ConfigError::Invalid(format!(
                "width {width} is outside 1..={max} for mask width {}",
                self.mask_width
            )));
        }
        Ok(())
    }
}

/// Search kernel selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelType {
    /// One call frame per row.
    #[default]
    Recursive,

    /// Explicit per-row frame stack with manual backtracking.
    Stacked,
}

impl fmt::Display for KernelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelType::Recursive => write!(f, "recursive"),
            KernelType::Stacked => write!(f, "stacked"),
        }
    }
}

/// Column-mask integer width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskWidth {
    U8,
    U16,
    U32,
    #[default]
    U64,
    U128,
}

impl MaskWidth {
    /// Largest board width this mask can hold.
    pub fn bits(self) -> u32 {
        match self {
            MaskWidth::U8 => 8,
            MaskWidth::U16 => 16,
            MaskWidth::U32 => 32,
            MaskWidth::U64 => 64,
            MaskWidth::U128 => 128,
        }
    }
}

impl fmt::Display for MaskWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u{}", self.bits())
    }
}

/// Solution-count integer width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CountWidth {
    #[default]
    U64,
    U128,
}

impl CountWidth {
    pub fn bits(self) -> u32 {
        match self {
            CountWidth::U64 => 64,
            CountWidth::U128 => 128,
        }
    }
}

impl fmt::Display for CountWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u{}", self.bits())
    }
}

#[cfg(test)]
mod tests;
