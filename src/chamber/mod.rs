//! The diffusion chamber
//!
//! Owns the particle population and the registered probes. Each call to
//! [`Chamber::update`] moves every particle once and then notifies the probes,
//! in registration order, with a read-only view of the new state.

pub mod particle;
pub mod seeding;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::error::{DiffusionError, Result};
use crate::core::types::{Cycle, Species};
use crate::probe::Probe;

pub use particle::Particle;
pub use seeding::seed_particles;

/// Construction parameters for a chamber
#[derive(Debug, Clone, PartialEq)]
pub struct ChamberConfig {
    pub width: usize,
    pub height: usize,
    pub temperature: f64,
    pub particle_count: usize,
    pub seed: Option<u64>,
    pub max_seed_attempts: usize,
}

impl ChamberConfig {
    /// Square chamber with an OS-drawn seed
    pub fn square(size: usize, temperature: f64, particle_count: usize) -> Self {
        Self {
            width: size,
            height: size,
            temperature,
            particle_count,
            seed: None,
            max_seed_attempts: 100_000,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DiffusionError::Configuration(format!(
                "chamber dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(DiffusionError::Configuration(format!(
                "temperature must be finite and >= 0, got {}",
                self.temperature
            )));
        }
        if self.particle_count == 0 {
            return Err(DiffusionError::Configuration(
                "particle_count must be > 0".into(),
            ));
        }
        if self.max_seed_attempts == 0 {
            return Err(DiffusionError::Configuration(
                "max_seed_attempts must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// Read-only view of the chamber handed to probes
#[derive(Debug, Clone)]
pub struct ChamberState {
    pub width: usize,
    pub height: usize,
    pub temperature: f64,
    pub particles: Vec<Particle>,
}

impl ChamberState {
    /// Per-axis step length for one cycle
    pub fn velocity(&self) -> f64 {
        self.temperature / 100.0
    }

    pub fn count_of(&self, species: Species) -> usize {
        self.particles
            .iter()
            .filter(|p| p.species() == species)
            .count()
    }
}

pub struct Chamber {
    state: ChamberState,
    probes: Vec<Box<dyn Probe>>,
    rng: ChaCha8Rng,
}

impl Chamber {
    /// Build and seed a chamber. Fails without returning a partial chamber.
    pub fn new(config: ChamberConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        tracing::debug!(
            "Creating {}x{} chamber at {}K with {} particles (seed {})",
            config.width,
            config.height,
            config.temperature,
            config.particle_count,
            seed
        );

        let particles = seed_particles(
            config.width,
            config.height,
            config.particle_count,
            config.max_seed_attempts,
            &mut rng,
        )?;

        Ok(Self {
            state: ChamberState {
                width: config.width,
                height: config.height,
                temperature: config.temperature,
                particles,
            },
            probes: Vec::new(),
            rng,
        })
    }

    /// Register a probe. Probes are notified in registration order and cannot be removed.
    pub fn add_hook(&mut self, probe: Box<dyn Probe>) {
        self.probes.push(probe);
    }

    /// Advance every particle one step, then notify all probes of `cycle`.
    ///
    /// A probe error aborts the remaining notifications and is returned as-is.
    pub fn update(&mut self, cycle: Cycle) -> Result<()> {
        let max_x = self.state.width as f64;
        let max_y = self.state.height as f64;
        let velocity = self.state.velocity();

        for particle in self.state.particles.iter_mut() {
            particle.step(max_x, max_y, velocity, &mut self.rng);
        }
        tracing::trace!("Cycle {}: moved {} particles", cycle, self.state.particles.len());

        for probe in self.probes.iter_mut() {
            probe.updated(cycle, &self.state)?;
        }
        Ok(())
    }

    pub fn state(&self) -> &ChamberState {
        &self.state
    }

    pub fn particles(&self) -> &[Particle] {
        &self.state.particles
    }

    pub fn width(&self) -> usize {
        self.state.width
    }

    pub fn height(&self) -> usize {
        self.state.height
    }

    pub fn temperature(&self) -> f64 {
        self.state.temperature
    }

    pub fn velocity(&self) -> f64 {
        self.state.velocity()
    }

    pub fn probe_count(&self) -> usize {
        self.probes.len()
    }
}
