//! Particles and their random-walk motion rule

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{Species, Vec2};

/// A single particle. Species is fixed at creation; position changes every cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec2,
    species: Species,
}

impl Particle {
    pub fn new(position: Vec2, species: Species) -> Self {
        Self { position, species }
    }

    #[inline]
    pub fn species(&self) -> Species {
        self.species
    }

    /// Take one random-walk step inside `[0, max_x) x [0, max_y)`.
    ///
    /// Each axis draws a direction from {-1, 0, +1} independently and moves by
    /// `direction * velocity`. A proposal that leaves the chamber on an axis is
    /// dropped for that axis only; the particle does not reflect.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        max_x: f64,
        max_y: f64,
        velocity: f64,
        rng: &mut R,
    ) -> Vec2 {
        let dx = rng.gen_range(-1i8..=1);
        let dy = rng.gen_range(-1i8..=1);
        self.position = proposal(self.position, (dx, dy), max_x, max_y, velocity);
        self.position
    }
}

/// Position after applying `directions` to `from`, keeping each axis only if it
/// stays within `[0, max)`
pub fn proposal(from: Vec2, directions: (i8, i8), max_x: f64, max_y: f64, velocity: f64) -> Vec2 {
    Vec2::new(
        clamp_axis(from.x, directions.0, max_x, velocity),
        clamp_axis(from.y, directions.1, max_y, velocity),
    )
}

#[inline]
fn clamp_axis(current: f64, direction: i8, max: f64, velocity: f64) -> f64 {
    let next = current + f64::from(direction) * velocity;
    if (0.0..max).contains(&next) {
        next
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_proposal_moves_within_bounds() {
        let p = proposal(Vec2::new(5.0, 5.0), (1, -1), 10.0, 10.0, 0.75);
        assert_eq!(p, Vec2::new(5.75, 4.25));
    }

    #[test]
    fn test_proposal_rejects_lower_wall_per_axis() {
        let p = proposal(Vec2::new(0.0, 3.0), (-1, 1), 10.0, 10.0, 0.5);
        assert_eq!(p, Vec2::new(0.0, 3.5));
    }

    #[test]
    fn test_proposal_upper_bound_is_exclusive() {
        // 9 + 1 == 10 is outside [0, 10)
        let p = proposal(Vec2::new(9.0, 9.0), (1, 0), 10.0, 10.0, 1.0);
        assert_eq!(p, Vec2::new(9.0, 9.0));
    }

    #[test]
    fn test_zero_direction_is_identity() {
        let from = Vec2::new(2.5, 7.25);
        assert_eq!(proposal(from, (0, 0), 10.0, 10.0, 3.0), from);
    }

    #[test]
    fn test_step_keeps_species_and_stays_inside() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut particle = Particle::new(Vec2::new(1.0, 1.0), Species::B);
        for _ in 0..500 {
            let pos = particle.step(2.0, 2.0, 1.0, &mut rng);
            assert!((0.0..2.0).contains(&pos.x));
            assert!((0.0..2.0).contains(&pos.y));
        }
        assert_eq!(particle.species(), Species::B);
    }

    #[test]
    fn test_step_returns_new_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut particle = Particle::new(Vec2::new(50.0, 50.0), Species::A);
        let returned = particle.step(100.0, 100.0, 0.75, &mut rng);
        assert_eq!(returned, particle.position);
    }

    #[test]
    fn test_step_visits_all_directions() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let mut particle = Particle::new(Vec2::new(5.0, 5.0), Species::A);
            let pos = particle.step(10.0, 10.0, 1.0, &mut rng);
            seen.insert(((pos.x - 5.0) as i32, (pos.y - 5.0) as i32));
        }
        assert_eq!(seen.len(), 9);
    }
}
