//! Configuration for the palette extraction pipeline.
//!
//! All tunable parameters of the clustering pipeline live here. Configuration
//! can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use chroma_palette::PaletteConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = PaletteConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = PaletteConfig::default();
//! # Ok::<(), chroma_palette::PaletteError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants;
use crate::error::{PaletteError, Result};

/// Complete configuration for one palette extraction run.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Number of colors to extract (k-means cluster count)
    #[serde(default = "default_n_colors")]
    pub n_colors: usize,

    /// Fraction of reassigned observations below which k-means is
    /// considered converged. Must lie strictly between 0 and 1.
    #[serde(default = "default_delta_threshold")]
    pub delta_threshold: f64,

    /// Hard cap on k-means iterations
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Seed for cluster center initialization. `None` draws from entropy,
    /// which means repeated runs on the same image may produce different
    /// (equally valid) palettes.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_n_colors() -> usize {
    constants::DEFAULT_PALETTE_SIZE
}

fn default_delta_threshold() -> f64 {
    constants::clustering::DELTA_THRESHOLD
}

fn default_max_iterations() -> usize {
    constants::clustering::MAX_ITERATIONS
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            n_colors: default_n_colors(),
            delta_threshold: default_delta_threshold(),
            max_iterations: default_max_iterations(),
            seed: None,
        }
    }
}

impl PaletteConfig {
    /// Create a configuration extracting `n_colors` colors with default
    /// clustering parameters
    pub fn with_colors(n_colors: usize) -> Self {
        Self {
            n_colors,
            ..Self::default()
        }
    }

    /// Validate all parameters
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidParameter` if:
    /// - `n_colors` is zero
    /// - `delta_threshold` is outside the open interval (0, 1)
    /// - `max_iterations` is zero
    pub fn validate(&self) -> Result<()> {
        if self.n_colors == 0 {
            return Err(PaletteError::invalid_parameter("n_colors", self.n_colors));
        }
        if !(self.delta_threshold > 0.0 && self.delta_threshold < 1.0) {
            return Err(PaletteError::invalid_parameter(
                "delta_threshold",
                self.delta_threshold,
            ));
        }
        if self.max_iterations == 0 {
            return Err(PaletteError::invalid_parameter(
                "max_iterations",
                self.max_iterations,
            ));
        }
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PaletteError::config(format!("failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            PaletteError::config(format!("failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            PaletteError::config("failed to serialize configuration", e)
        })?;
        std::fs::write(path, json).map_err(|e| {
            PaletteError::config(format!("failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}
