//! Hand-off to an external renderer
//!
//! Provides what a renderer needs to draw the chamber: particle positions with
//! their species colors, the panel title and its axis limits.
//! This module is READ-ONLY - it never modifies simulation state.

pub mod colors;

use crate::chamber::ChamberState;
use crate::core::types::{Species, Vec2};

use colors::{species_color, Color};

/// Lightweight snapshot of a particle for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParticle {
    pub position: Vec2,
    pub species: Species,
    pub color: Color,
}

/// Collects all particles from the chamber into a reusable buffer.
/// Call this once per frame, passing the same buffer to avoid allocations.
pub fn collect_render_particles(chamber: &ChamberState, buffer: &mut Vec<RenderParticle>) {
    buffer.clear();
    buffer.extend(chamber.particles.iter().map(|p| RenderParticle {
        position: p.position,
        species: p.species(),
        color: species_color(p.species()),
    }));
}

/// Static decorations for the chamber panel
#[derive(Debug, Clone, PartialEq)]
pub struct ChamberPanel {
    pub title: String,
    pub xlabel: &'static str,
    pub ylabel: &'static str,
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
}

pub fn chamber_panel(chamber: &ChamberState) -> ChamberPanel {
    ChamberPanel {
        title: format!("Diffusion Chamber Temperature: {}K", chamber.temperature),
        xlabel: "Width",
        ylabel: "Height",
        x_limits: (0.0, chamber.width as f64),
        y_limits: (0.0, chamber.height as f64),
    }
}
