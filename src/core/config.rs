//! Simulation configuration
//!
//! Defaults reproduce the reference run: a 100x100 chamber at 75K, filled to
//! 80% of its cells. Every key can be overridden from a TOML file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chamber::ChamberConfig;
use crate::core::error::{DiffusionError, Result};

/// Configuration for a diffusion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Width and height of the square chamber (cells)
    pub size: usize,

    /// Chamber temperature. Particles step `temperature / 100` per axis per cycle,
    /// so 0 freezes the chamber.
    pub temperature: f64,

    /// Fraction of cells seeded with a particle, in (0, 1]
    ///
    /// The particle count is `fill_fraction * size * size`, truncated. A fraction
    /// that rounds up to every cell is still rejected at seeding time.
    pub fill_fraction: f64,

    /// Number of cycles the driver runs
    pub ticks: u64,

    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Rejection draws allowed per particle before seeding switches to
    /// sampling from the free cells
    pub max_seed_attempts: usize,

    /// Progress is logged every this many cycles (0 disables)
    pub log_every: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: 100,
            temperature: 75.0,
            fill_fraction: 0.8,
            ticks: 500,
            seed: None,
            max_seed_attempts: 100_000,
            log_every: 50,
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(DiffusionError::Configuration("size must be > 0".into()));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(DiffusionError::Configuration(format!(
                "temperature must be finite and >= 0, got {}",
                self.temperature
            )));
        }
        if !(self.fill_fraction > 0.0 && self.fill_fraction <= 1.0) {
            return Err(DiffusionError::Configuration(format!(
                "fill_fraction must be in (0, 1], got {}",
                self.fill_fraction
            )));
        }
        if self.particle_count() == 0 {
            return Err(DiffusionError::Configuration(format!(
                "a {}x{} chamber at fill fraction {} holds no particles",
                self.size, self.size, self.fill_fraction
            )));
        }
        if self.max_seed_attempts == 0 {
            return Err(DiffusionError::Configuration(
                "max_seed_attempts must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Number of particles seeded into the chamber
    pub fn particle_count(&self) -> usize {
        (self.fill_fraction * self.size as f64 * self.size as f64) as usize
    }

    pub fn chamber_config(&self) -> ChamberConfig {
        ChamberConfig {
            width: self.size,
            height: self.size,
            temperature: self.temperature,
            particle_count: self.particle_count(),
            seed: self.seed,
            max_seed_attempts: self.max_seed_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.particle_count(), 8000);
    }

    #[test]
    fn test_particle_count_truncates() {
        let config = SimulationConfig {
            size: 3,
            ..Default::default()
        };
        // 0.8 * 9 = 7.2
        assert_eq!(config.particle_count(), 7);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimulationConfig::from_toml_str("size = 20\nseed = 7\n").unwrap();
        assert_eq!(config.size, 20);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.temperature, 75.0);
        assert_eq!(config.ticks, 500);
    }

    #[test]
    fn test_negative_temperature_rejected() {
        let err = SimulationConfig::from_toml_str("temperature = -1.0").unwrap_err();
        assert!(matches!(err, DiffusionError::Configuration(_)));
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = SimulationConfig {
            size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DiffusionError::Configuration(_))
        ));
    }

    #[test]
    fn test_tiny_fill_rejected() {
        let config = SimulationConfig {
            size: 1,
            fill_fraction: 0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = SimulationConfig::from_toml_str("size = \"big\"").unwrap_err();
        assert!(matches!(err, DiffusionError::TomlError(_)));
    }

    #[test]
    fn test_chamber_config_carries_fields() {
        let config = SimulationConfig {
            size: 10,
            temperature: 50.0,
            seed: Some(3),
            ..Default::default()
        };
        let chamber = config.chamber_config();
        assert_eq!(chamber.width, 10);
        assert_eq!(chamber.height, 10);
        assert_eq!(chamber.particle_count, 80);
        assert_eq!(chamber.seed, Some(3));
    }
}
