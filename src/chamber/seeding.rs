//! Collision-free initial placement

use rand::seq::index;
use rand::Rng;

use crate::chamber::particle::Particle;
use crate::core::error::{DiffusionError, Result};
use crate::core::types::{Species, Vec2};
use crate::spatial::Grid;

/// Place `count` particles on distinct integer cells of a `width x height` chamber.
///
/// Cells are drawn uniformly and redrawn while occupied. Once half the cells are
/// taken, or a particle needs more than `max_attempts` draws, the remaining
/// particles are drawn without replacement from the list of free cells, so seeding
/// always finishes when at least one cell is left free.
pub fn seed_particles<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    count: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Particle>> {
    let capacity = width * height;
    if count >= capacity {
        return Err(DiffusionError::Capacity(format!(
            "{} particles requested for a {}x{} chamber with {} cells; at least one cell must stay free",
            count, width, height, capacity
        )));
    }

    let mut occupied: Grid<bool> = Grid::new(width, height);
    let mut particles = Vec::with_capacity(count);
    let mut total_draws = 0usize;

    'rejection: while particles.len() < count && particles.len() * 2 < capacity {
        let mut attempts = 0usize;
        let (x, y) = loop {
            if attempts >= max_attempts {
                total_draws += attempts;
                break 'rejection;
            }
            attempts += 1;
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..height);
            if occupied.get(x, y) == Some(&false) {
                break (x, y);
            }
        };
        total_draws += attempts;
        occupied.set(x, y, true);
        particles.push(place(x, y, width));
    }

    let remaining = count - particles.len();
    if remaining > 0 {
        let free: Vec<(usize, usize)> = occupied
            .cells()
            .filter(|(_, _, taken)| !**taken)
            .map(|(x, y, _)| (x, y))
            .collect();
        tracing::debug!(
            "Switching to free-cell sampling for {} particles ({} cells free)",
            remaining,
            free.len()
        );
        for i in index::sample(rng, free.len(), remaining).iter() {
            let (x, y) = free[i];
            particles.push(place(x, y, width));
        }
    }

    tracing::debug!(
        "Seeded {} particles into {}x{} cells with {} rejection draws",
        count,
        width,
        height,
        total_draws
    );

    Ok(particles)
}

fn place(x: usize, y: usize, width: usize) -> Particle {
    Particle::new(
        Vec2::new(x as f64, y as f64),
        Species::from_initial_x(x, width),
    )
}
