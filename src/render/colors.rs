//! Color definitions for species

use serde::{Deserialize, Serialize};

use crate::core::types::Species;

/// RGBA color (0.0 to 1.0 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

pub const ORANGE: Color = Color::new(1.0, 0.65, 0.0, 1.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Get the base color for a species
pub fn species_color(species: Species) -> Color {
    match species {
        Species::A => ORANGE,
        Species::B => BLUE,
    }
}
