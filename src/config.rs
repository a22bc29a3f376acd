//! JSON configuration for benchmark evaluation runs

use crate::benchmark::Benchmark;
use crate::bounds::{Bounds, DEFAULT_LOWER, DEFAULT_UPPER};
use crate::error::{BenchmarkError, Result};
use crate::function_registry::FunctionRegistry;
use crate::functions::CHUNG_REYNOLDS_KEY;
use crate::parallel_eval::ParallelConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Benchmark run configuration loaded from JSON
///
/// Every field has a default, so `{}` is a valid configuration describing
/// Chung Reynolds in 2 dimensions on `[-100, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Registered name of the benchmark function
    pub function: String,
    /// Lower bound of every coordinate
    pub lower: f64,
    /// Upper bound of every coordinate
    pub upper: f64,
    /// Problem dimension
    pub dimension: usize,
    /// Number of uniformly sampled candidates to evaluate
    pub samples: usize,
    /// Random seed for sampling (None = entropy)
    pub seed: Option<u64>,
    /// Batch evaluation settings
    pub parallel: ParallelConfig,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            function: CHUNG_REYNOLDS_KEY.to_string(),
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
            dimension: 2,
            samples: 0,
            seed: None,
            parallel: ParallelConfig::default(),
        }
    }
}

impl BenchmarkConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: BenchmarkConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Load configuration from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("loading benchmark configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Save configuration to JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Validated bounds of this configuration
    pub fn bounds(&self) -> Result<Bounds> {
        Bounds::new(self.lower, self.upper)
    }

    /// Check cross-field consistency
    pub fn validate(&self) -> Result<()> {
        self.bounds()?;
        if self.dimension == 0 && self.samples > 0 {
            return Err(BenchmarkError::Config {
                message: "sampling requires dimension >= 1".to_string(),
            });
        }
        if self.parallel.num_threads == Some(0) {
            return Err(BenchmarkError::Config {
                message: "parallel.num_threads must be >= 1".to_string(),
            });
        }
        Ok(())
    }

    /// Resolve the configured benchmark through `registry`
    pub fn to_benchmark(&self, registry: &FunctionRegistry) -> Result<Benchmark> {
        self.validate()?;
        registry.benchmark(&self.function, self.bounds()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let cfg = BenchmarkConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, BenchmarkConfig::default());
        assert_eq!(cfg.function, "chung_reynolds");
        assert_eq!(cfg.bounds().unwrap(), Bounds::default());
    }

    #[test]
    fn test_partial_json() {
        let cfg = BenchmarkConfig::from_json_str(
            r#"{"function": "ChungReynolds", "lower": -5.0, "upper": 5.0, "dimension": 10,
                "parallel": {"enabled": false}}"#,
        )
        .unwrap();
        assert_eq!(cfg.dimension, 10);
        assert!(!cfg.parallel.enabled);

        let b = cfg.to_benchmark(&FunctionRegistry::new()).unwrap();
        assert_eq!(b.lower(), -5.0);
        assert_eq!(b.upper(), 5.0);
    }

    #[test]
    fn test_invalid_configs() {
        let registry = FunctionRegistry::new();

        let cfg = BenchmarkConfig {
            lower: 1.0,
            upper: 0.0,
            ..Default::default()
        };
        assert!(cfg.to_benchmark(&registry).unwrap_err().is_bounds_error());

        let cfg = BenchmarkConfig {
            function: "unknown".to_string(),
            ..Default::default()
        };
        assert!(cfg.to_benchmark(&registry).unwrap_err().is_config_error());

        let cfg = BenchmarkConfig {
            dimension: 0,
            samples: 5,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(BenchmarkError::Config { .. })
        ));

        assert!(BenchmarkConfig::from_json_str("{not json").unwrap_err().is_config_error());
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.json");

        let cfg = BenchmarkConfig {
            dimension: 30,
            samples: 100,
            seed: Some(7),
            ..Default::default()
        };
        cfg.to_file(&path).unwrap();
        assert_eq!(BenchmarkConfig::from_file(&path).unwrap(), cfg);

        let missing = BenchmarkConfig::from_file(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(BenchmarkError::Io(_))));
    }
}
