//! Run summary and serialization

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::Cycle;
use crate::probe::ConcentrationProfile;
use crate::scope::Scope;
use crate::simulation::Diffusion;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub size: usize,
    pub temperature: f64,
    pub particle_count: usize,
    pub seed: Option<u64>,
    pub ticks: u64,
    pub final_entropy: Option<f64>,
    pub max_entropy: f64,
    pub max_entropy_cycle: Cycle,
    pub concentration: Option<ConcentrationProfile>,
    pub simulation_time_ms: u64,
}

impl RunSummary {
    pub fn new<S: Scope + Clone + 'static>(
        diffusion: &Diffusion<S>,
        ticks: u64,
        elapsed: Duration,
    ) -> Self {
        let config = diffusion.config();
        Self {
            size: config.size,
            temperature: config.temperature,
            particle_count: diffusion.chamber().particles().len(),
            seed: config.seed,
            ticks,
            final_entropy: diffusion.current_entropy(),
            max_entropy: diffusion.max_entropy(),
            max_entropy_cycle: diffusion.max_entropy_cycle(),
            concentration: diffusion.concentration(),
            simulation_time_ms: elapsed.as_millis() as u64,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        format!(
            "Ran {} cycles of a {}x{} chamber ({} particles) in {}ms\nFinal entropy {:.2}, max {:.2} at cycle {}",
            self.ticks,
            self.size,
            self.size,
            self.particle_count,
            self.simulation_time_ms,
            self.final_entropy.unwrap_or(0.0),
            self.max_entropy,
            self.max_entropy_cycle,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunSummary {
        RunSummary {
            size: 4,
            temperature: 75.0,
            particle_count: 12,
            seed: Some(1),
            ticks: 3,
            final_entropy: Some(1.5),
            max_entropy: 2.0,
            max_entropy_cycle: 1,
            concentration: Some(ConcentrationProfile {
                species_a: vec![3, 3, 0, 0],
                species_b: vec![0, 0, 3, 3],
            }),
            simulation_time_ms: 0,
        }
    }

    #[test]
    fn test_json_contains_fields() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["max_entropy_cycle"], 1);
        assert_eq!(value["concentration"]["species_b"][3], 3);
    }

    #[test]
    fn test_summary_mentions_max() {
        let text = sample().summary();
        assert!(text.contains("max 2.00 at cycle 1"));
    }
}
