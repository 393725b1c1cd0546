pub mod config;
pub mod error;
pub mod types;

pub use config::SimulationConfig;
pub use error::{DiffusionError, Result};
pub use types::{Cycle, Species, Vec2};
