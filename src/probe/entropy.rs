//! Spatial mixing entropy probe
//!
//! Every cell is treated as a two-outcome distribution over the species found
//! in it. Cell entropies are summed into one scalar per cycle, and the probe
//! keeps the largest value seen together with the cycle it was reached on.

use crate::chamber::ChamberState;
use crate::core::error::Result;
use crate::core::types::Cycle;
use crate::probe::{Probe, SpeciesDensity};
use crate::scope::Scope;
use crate::spatial::Grid;

/// Added to each probability inside the logarithm so `log2(0)` never occurs.
///
/// Sitting inside the log it also shifts a pure cell (p = 1) to `-log2(1 + 1e-9)`
/// instead of exactly zero.
pub const LOG_EPSILON: f64 = 1e-9;

/// Shannon entropy (bits) of one cell holding `a` and `b` particles.
///
/// An empty cell divides by 1 instead of 0, giving both probabilities 0 and an
/// entropy of 0.
pub fn cell_entropy(a: u32, b: u32) -> f64 {
    let total = match a + b {
        0 => 1.0,
        n => f64::from(n),
    };
    let p_a = f64::from(a) / total;
    let p_b = f64::from(b) / total;
    -(p_a * (p_a + LOG_EPSILON).log2() + p_b * (p_b + LOG_EPSILON).log2())
}

pub fn entropy_field(density: &SpeciesDensity) -> Grid<f64> {
    let mut field = Grid::new(density.a.width, density.a.height);
    fill_entropy_field(density, &mut field);
    field
}

/// Overwrite `field` with per-cell entropies, resizing it if the density grid differs
pub fn fill_entropy_field(density: &SpeciesDensity, field: &mut Grid<f64>) {
    if field.width != density.a.width || field.height != density.a.height {
        *field = Grid::new(density.a.width, density.a.height);
    }
    for (x, y, &a) in density.a.cells() {
        let b = density.b.get(x, y).copied().unwrap_or(0);
        field.set(x, y, cell_entropy(a, b));
    }
}

pub struct SystemEntropy<S: Scope> {
    scope: S,
    field: Grid<f64>,
    current: Option<f64>,
    max_entropy: f64,
    max_entropy_cycle: Cycle,
}

impl<S: Scope> SystemEntropy<S> {
    /// The entropy field is sized to the chamber and reused every cycle
    pub fn new(chamber: &ChamberState, scope: S) -> Self {
        Self {
            scope,
            field: Grid::new(chamber.width, chamber.height),
            current: None,
            max_entropy: 0.0,
            max_entropy_cycle: 0,
        }
    }

    /// Per-cell entropy from the most recent cycle (all zero before the first)
    pub fn field(&self) -> &Grid<f64> {
        &self.field
    }

    /// Entropy of the most recent cycle
    pub fn current_entropy(&self) -> Option<f64> {
        self.current
    }

    pub fn max_entropy(&self) -> f64 {
        self.max_entropy
    }

    pub fn max_entropy_cycle(&self) -> Cycle {
        self.max_entropy_cycle
    }

    fn record(&mut self, cycle: Cycle, entropy: f64) {
        self.current = Some(entropy);
        if entropy > self.max_entropy {
            tracing::debug!(
                "New entropy maximum {:.4} at cycle {} (was {:.4} at cycle {})",
                entropy,
                cycle,
                self.max_entropy,
                self.max_entropy_cycle
            );
            self.max_entropy = entropy;
            self.max_entropy_cycle = cycle;
        }
    }
}

impl<S: Scope> Probe for SystemEntropy<S> {
    fn updated(&mut self, cycle: Cycle, chamber: &ChamberState) -> Result<()> {
        fill_entropy_field(&SpeciesDensity::from_state(chamber), &mut self.field);
        let entropy: f64 = self.field.values().iter().sum();
        self.record(cycle, entropy);
        self.scope.set_title(&format!(
            "Cycle: {}, Entropy: {:.2} (Max Entropy: {:.2} at Cycle: {})",
            cycle, entropy, self.max_entropy, self.max_entropy_cycle
        ))
    }
}
