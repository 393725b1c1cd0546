//! Probes observe the chamber after every cycle
//!
//! A probe is built from the chamber's state, registered explicitly with
//! [`Chamber::add_hook`](crate::chamber::Chamber::add_hook), and from then on
//! receives a read-only view of the chamber each time it is updated.

pub mod concentration;
pub mod density;
pub mod entropy;

use std::cell::RefCell;
use std::rc::Rc;

use crate::chamber::ChamberState;
use crate::core::error::Result;
use crate::core::types::Cycle;

pub use concentration::{ConcentrationDensity, ConcentrationProfile};
pub use density::SpeciesDensity;
pub use entropy::{entropy_field, fill_entropy_field, SystemEntropy, LOG_EPSILON};

pub trait Probe {
    /// Called once per cycle, after every particle has moved
    fn updated(&mut self, _cycle: Cycle, _chamber: &ChamberState) -> Result<()> {
        Ok(())
    }
}

/// Lets the driver keep a handle on a probe it has registered
impl<P: Probe + ?Sized> Probe for Rc<RefCell<P>> {
    fn updated(&mut self, cycle: Cycle, chamber: &ChamberState) -> Result<()> {
        self.borrow_mut().updated(cycle, chamber)
    }
}
