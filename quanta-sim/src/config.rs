//! Simulator configuration
//!
//! Defaults can be overridden from a TOML document and from `QUANTA_*`
//! environment variables, in that order.

use crate::error::{Result, SimulatorError};
use quanta_state::MAX_SUPPORTED_QUBITS;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_MAX_QUBITS: &str = "QUANTA_MAX_QUBITS";
pub const ENV_DEFAULT_SHOTS: &str = "QUANTA_DEFAULT_SHOTS";
pub const ENV_SEED: &str = "QUANTA_SEED";
pub const ENV_COLLECT_STATISTICS: &str = "QUANTA_COLLECT_STATISTICS";

/// Configuration for the quantum simulator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Widest circuit the simulator accepts
    ///
    /// Memory grows as `2^max_qubits × 16` bytes, so this is the only guard
    /// against runaway allocation. Must lie in `1..=MAX_SUPPORTED_QUBITS`.
    ///
    /// Default: 16
    pub max_qubits: usize,

    /// Number of shots used by [`crate::Simulator::simulate_default`]
    ///
    /// Default: 1024
    pub default_shots: usize,

    /// Random number generator seed for reproducible sampling
    ///
    /// If None, every sampling run draws a fresh seed from the OS.
    ///
    /// Default: None
    pub seed: Option<u64>,

    /// Attach timing and memory statistics to results
    ///
    /// Default: false
    pub collect_statistics: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: 16,
            default_shots: 1024,
            seed: None,
            collect_statistics: false,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration for debugging
    ///
    /// Deterministic seed and statistics collection.
    pub fn debug() -> Self {
        Self {
            seed: Some(42),
            collect_statistics: true,
            ..Default::default()
        }
    }

    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    pub fn with_default_shots(mut self, shots: usize) -> Self {
        self.default_shots = shots;
        self
    }

    /// Set the random seed for deterministic sampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable statistics collection
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.collect_statistics = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_qubits == 0 || self.max_qubits > MAX_SUPPORTED_QUBITS {
            return Err(SimulatorError::InvalidConfig(format!(
                "max_qubits must be in 1..={}, got {}",
                MAX_SUPPORTED_QUBITS, self.max_qubits
            )));
        }
        Ok(())
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| SimulatorError::InvalidConfig(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SimulatorError::InvalidConfig(format!(
                "failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load with precedence: env vars > config file > defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => return Self::from_env(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `QUANTA_*` overrides produced by `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_MAX_QUBITS) {
            self.max_qubits = parse_value(ENV_MAX_QUBITS, &value)?;
        }

        if let Some(value) = lookup(ENV_DEFAULT_SHOTS) {
            self.default_shots = parse_value(ENV_DEFAULT_SHOTS, &value)?;
        }

        if let Some(value) = lookup(ENV_SEED) {
            self.seed = if value.trim().is_empty() {
                None
            } else {
                Some(parse_value(ENV_SEED, &value)?)
            };
        }

        if let Some(value) = lookup(ENV_COLLECT_STATISTICS) {
            self.collect_statistics = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(SimulatorError::InvalidConfig(format!(
                        "invalid {}: {}",
                        ENV_COLLECT_STATISTICS, value
                    )))
                }
            };
        }

        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| SimulatorError::InvalidConfig(format!("invalid {}: {}", key, value)))
}
