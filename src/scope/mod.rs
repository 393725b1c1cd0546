//! Display targets for probes
//!
//! A [`Scope`] is the screen a probe draws onto. The crate never renders pixels
//! itself; any type accepting these draw calls can stand in for a plotting
//! backend. [`RecordingScope`] keeps the current frame in memory.

pub mod recording;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::render::colors::Color;

pub use recording::{Frame, RecordingScope, Series};

/// Line style for one plotted series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    pub color: Color,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendLocation {
    UpperRight,
    UpperLeft,
    LowerRight,
    LowerLeft,
}

/// Drawing capability set a probe needs from its display
pub trait Scope {
    /// Remove every series, label, title and legend
    fn clear(&mut self) -> Result<()>;

    fn plot(&mut self, xs: &[f64], ys: &[f64], style: &PlotStyle) -> Result<()>;

    fn set_title(&mut self, title: &str) -> Result<()>;

    fn set_xlabel(&mut self, label: &str) -> Result<()>;

    fn set_ylabel(&mut self, label: &str) -> Result<()>;

    fn legend(&mut self, location: LegendLocation) -> Result<()>;
}

/// Shared screens: several probes may draw onto one scope
impl<S: Scope + ?Sized> Scope for Rc<RefCell<S>> {
    fn clear(&mut self) -> Result<()> {
        self.borrow_mut().clear()
    }

    fn plot(&mut self, xs: &[f64], ys: &[f64], style: &PlotStyle) -> Result<()> {
        self.borrow_mut().plot(xs, ys, style)
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.borrow_mut().set_title(title)
    }

    fn set_xlabel(&mut self, label: &str) -> Result<()> {
        self.borrow_mut().set_xlabel(label)
    }

    fn set_ylabel(&mut self, label: &str) -> Result<()> {
        self.borrow_mut().set_ylabel(label)
    }

    fn legend(&mut self, location: LegendLocation) -> Result<()> {
        self.borrow_mut().legend(location)
    }
}
