//! Column concentration probe

use serde::{Deserialize, Serialize};

use crate::chamber::ChamberState;
use crate::core::error::Result;
use crate::core::types::{Cycle, Species};
use crate::probe::{Probe, SpeciesDensity};
use crate::render::colors::species_color;
use crate::scope::{LegendLocation, PlotStyle, Scope};

/// Particle count per column (indexed by x) for each species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationProfile {
    pub species_a: Vec<u32>,
    pub species_b: Vec<u32>,
}

impl ConcentrationProfile {
    pub fn from_density(density: &SpeciesDensity) -> Self {
        Self {
            species_a: density.a.column_sums(),
            species_b: density.b.column_sums(),
        }
    }

    pub fn from_state(chamber: &ChamberState) -> Self {
        Self::from_density(&SpeciesDensity::from_state(chamber))
    }

    pub fn series(&self, species: Species) -> &[u32] {
        match species {
            Species::A => &self.species_a,
            Species::B => &self.species_b,
        }
    }

    pub fn total(&self, species: Species) -> u64 {
        self.series(species).iter().map(|&c| u64::from(c)).sum()
    }
}

/// Plots both species' column concentrations after every cycle
pub struct ConcentrationDensity<S: Scope> {
    scope: S,
    x_values: Vec<f64>,
    profile: Option<ConcentrationProfile>,
}

impl<S: Scope> ConcentrationDensity<S> {
    pub fn new(chamber: &ChamberState, scope: S) -> Self {
        Self {
            scope,
            x_values: (0..chamber.width).map(|x| x as f64).collect(),
            profile: None,
        }
    }

    /// Profile from the most recent cycle
    pub fn profile(&self) -> Option<&ConcentrationProfile> {
        self.profile.as_ref()
    }

    fn draw(&mut self, profile: &ConcentrationProfile) -> Result<()> {
        self.scope.clear()?;
        for species in Species::ALL {
            let ys: Vec<f64> = profile
                .series(species)
                .iter()
                .map(|&c| f64::from(c))
                .collect();
            let style = PlotStyle {
                color: species_color(species),
                label: format!("{} Concentration", species.label()),
            };
            self.scope.plot(&self.x_values, &ys, &style)?;
        }
        self.scope.set_xlabel("X")?;
        self.scope.set_ylabel("Concentration")?;
        self.scope.legend(LegendLocation::UpperRight)
    }
}

impl<S: Scope> Probe for ConcentrationDensity<S> {
    fn updated(&mut self, _cycle: Cycle, chamber: &ChamberState) -> Result<()> {
        let profile = ConcentrationProfile::from_state(chamber);
        self.draw(&profile)?;
        self.profile = Some(profile);
        Ok(())
    }
}
