//! Per-species occupancy grids

use crate::chamber::ChamberState;
use crate::core::types::Species;
use crate::spatial::Grid;

/// Particle counts per cell, one grid per species.
/// Overlapping particles are counted independently.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesDensity {
    pub a: Grid<u32>,
    pub b: Grid<u32>,
}

impl SpeciesDensity {
    pub fn from_state(chamber: &ChamberState) -> Self {
        let mut a = Grid::new(chamber.width, chamber.height);
        let mut b = Grid::new(chamber.width, chamber.height);

        for particle in &chamber.particles {
            let grid = match particle.species() {
                Species::A => &mut a,
                Species::B => &mut b,
            };
            if let Some((x, y)) = grid.cell_of(particle.position) {
                if let Some(count) = grid.get_mut(x, y) {
                    *count += 1;
                }
            }
        }

        Self { a, b }
    }

    pub fn grid(&self, species: Species) -> &Grid<u32> {
        match species {
            Species::A => &self.a,
            Species::B => &self.b,
        }
    }
}
