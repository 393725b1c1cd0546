//! The diffusion driver

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use crate::chamber::Chamber;
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::Cycle;
use crate::probe::{ConcentrationDensity, ConcentrationProfile, SystemEntropy};
use crate::scope::Scope;
use crate::simulation::output::RunSummary;

/// A chamber observed by a concentration probe and an entropy probe.
///
/// Both probes draw onto clones of the same scope handle, concentration first,
/// so the entropy title lands on the freshly cleared concentration plot.
pub struct Diffusion<S: Scope + Clone + 'static> {
    config: SimulationConfig,
    chamber: Chamber,
    concentration: Rc<RefCell<ConcentrationDensity<S>>>,
    entropy: Rc<RefCell<SystemEntropy<S>>>,
    scope: S,
    next_cycle: Cycle,
}

impl<S: Scope + Clone + 'static> Diffusion<S> {
    pub fn new(config: SimulationConfig, scope: S) -> Result<Self> {
        config.validate()?;
        let mut chamber = Chamber::new(config.chamber_config())?;

        let concentration = Rc::new(RefCell::new(ConcentrationDensity::new(
            chamber.state(),
            scope.clone(),
        )));
        let entropy = Rc::new(RefCell::new(SystemEntropy::new(
            chamber.state(),
            scope.clone(),
        )));
        chamber.add_hook(Box::new(concentration.clone()));
        chamber.add_hook(Box::new(entropy.clone()));

        tracing::info!(
            "Diffusion chamber ready: {}x{} at {}K, {} particles",
            chamber.width(),
            chamber.height(),
            chamber.temperature(),
            chamber.particles().len()
        );

        Ok(Self {
            config,
            chamber,
            concentration,
            entropy,
            scope,
            next_cycle: 0,
        })
    }

    /// Run one cycle and return its index
    pub fn step(&mut self) -> Result<Cycle> {
        let cycle = self.next_cycle;
        self.chamber.update(cycle)?;
        self.next_cycle += 1;

        if self.config.log_every > 0 && cycle % self.config.log_every == 0 {
            tracing::info!(
                "Cycle {}: entropy {:.2} (max {:.2} at cycle {})",
                cycle,
                self.current_entropy().unwrap_or(0.0),
                self.max_entropy(),
                self.max_entropy_cycle()
            );
        }
        Ok(cycle)
    }

    /// Run `ticks` cycles. The first failing cycle ends the run.
    pub fn run(&mut self, ticks: u64) -> Result<RunSummary> {
        let start = Instant::now();
        for _ in 0..ticks {
            self.step()?;
        }
        Ok(RunSummary::new(self, ticks, start.elapsed()))
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn chamber(&self) -> &Chamber {
        &self.chamber
    }

    pub fn scope(&self) -> &S {
        &self.scope
    }

    /// Number of cycles run so far
    pub fn cycles_run(&self) -> Cycle {
        self.next_cycle
    }

    pub fn current_entropy(&self) -> Option<f64> {
        self.entropy.borrow().current_entropy()
    }

    pub fn max_entropy(&self) -> f64 {
        self.entropy.borrow().max_entropy()
    }

    pub fn max_entropy_cycle(&self) -> Cycle {
        self.entropy.borrow().max_entropy_cycle()
    }

    pub fn concentration(&self) -> Option<ConcentrationProfile> {
        self.concentration.borrow().profile().cloned()
    }
}
