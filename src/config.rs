//! Configuration types for the surroundings engine.

use serde::{Deserialize, Serialize};

/// Grid configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// Physical cell size in meters (e.g., 20.0 = 20m cells)
    pub cell_size_m: f64,

    /// Grid width and height in cells
    pub array_size: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size_m: 20.0, // 20m cells
            array_size: 40,    // 800m x 800m coverage
        }
    }
}

impl GridConfig {
    /// Create a configuration covering a square area (in meters)
    pub fn for_area(side_m: f64, cell_size_m: f64) -> Self {
        Self {
            cell_size_m,
            array_size: (side_m / cell_size_m).ceil() as usize,
        }
    }

    /// Total covered side length in meters
    pub fn side_m(&self) -> f64 {
        self.array_size as f64 * self.cell_size_m
    }

    /// Total number of cells per layer grid
    pub fn cell_count(&self) -> usize {
        self.array_size * self.array_size
    }
}

/// Full engine configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid configuration (cell size, array size)
    pub grid: GridConfig,

    /// Language code used for presentation (source-language preference
    /// during place deduplication, e.g. "en" or "de")
    pub presentation_language: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            presentation_language: "en".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Configuration error type
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// File I/O error
    IoError(String),
    /// YAML parsing error
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.cell_size_m, 20.0);
        assert_eq!(config.array_size, 40);
        assert_eq!(config.cell_count(), 1600);
    }

    #[test]
    fn test_for_area() {
        let config = GridConfig::for_area(1000.0, 25.0);
        assert_eq!(config.array_size, 40);
        assert_eq!(config.side_m(), 1000.0);
    }

    #[test]
    fn test_yaml_serialization() {
        let config = EngineConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed = EngineConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.grid.cell_size_m, config.grid.cell_size_m);
        assert_eq!(parsed.presentation_language, "en");
    }

    #[test]
    fn test_yaml_parse_error() {
        let result = EngineConfig::from_yaml(": not yaml [");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
