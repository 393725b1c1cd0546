//! Reference composition and run loop
//!
//! [`Diffusion`] wires a chamber to a concentration probe and an entropy probe
//! that share one scope, then drives it one cycle at a time.

pub mod diffusion;
pub mod output;

pub use diffusion::Diffusion;
pub use output::RunSummary;
