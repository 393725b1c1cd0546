//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulation cycle counter (one tick of the driver)
pub type Cycle = u64;

/// Particle species, fixed at creation by which half of the chamber it started in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    A,
    B,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::A, Species::B];

    /// Midline rule: cells left of `width / 2` seed species A, the rest species B
    pub fn from_initial_x(x: usize, width: usize) -> Self {
        if x < width / 2 {
            Species::A
        } else {
            Species::B
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Species::A => "Species A",
            Species::B => "Species B",
        }
    }
}

/// 2D position
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Integer cell containing this position (truncation toward zero)
    pub fn cell(&self) -> (usize, usize) {
        (self.x as usize, self.y as usize)
    }
}
