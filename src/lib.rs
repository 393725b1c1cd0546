//! Diffusion Chamber - two-species diffusion with concentration and entropy probes

pub mod chamber;
pub mod core;
pub mod probe;
pub mod render;
pub mod scope;
pub mod simulation;
pub mod spatial;
