//! In-memory scope that remembers what was last drawn

use serde::{Deserialize, Serialize};

use crate::core::error::{DiffusionError, Result};
use crate::scope::{LegendLocation, PlotStyle, Scope};

/// One plotted line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub style: PlotStyle,
}

/// Everything currently on screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub series: Vec<Series>,
    pub legend: Option<LegendLocation>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingScope {
    frame: Frame,
    clears: u64,
}

impl RecordingScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn title(&self) -> Option<&str> {
        self.frame.title.as_deref()
    }

    /// Series with the given label, if one is on screen
    pub fn series(&self, label: &str) -> Option<&Series> {
        self.frame.series.iter().find(|s| s.style.label == label)
    }

    /// How many times the screen has been cleared
    pub fn clears(&self) -> u64 {
        self.clears
    }
}

impl Scope for RecordingScope {
    fn clear(&mut self) -> Result<()> {
        self.frame = Frame::default();
        self.clears += 1;
        Ok(())
    }

    fn plot(&mut self, xs: &[f64], ys: &[f64], style: &PlotStyle) -> Result<()> {
        if xs.len() != ys.len() {
            return Err(DiffusionError::Display(format!(
                "series '{}' has {} x values but {} y values",
                style.label,
                xs.len(),
                ys.len()
            )));
        }
        self.frame.series.push(Series {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            style: style.clone(),
        });
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.frame.title = Some(title.to_string());
        Ok(())
    }

    fn set_xlabel(&mut self, label: &str) -> Result<()> {
        self.frame.xlabel = Some(label.to_string());
        Ok(())
    }

    fn set_ylabel(&mut self, label: &str) -> Result<()> {
        self.frame.ylabel = Some(label.to_string());
        Ok(())
    }

    fn legend(&mut self, location: LegendLocation) -> Result<()> {
        self.frame.legend = Some(location);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::colors::ORANGE;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn style(label: &str) -> PlotStyle {
        PlotStyle {
            color: ORANGE,
            label: label.to_string(),
        }
    }

    #[test]
    fn test_clear_resets_frame() {
        let mut scope = RecordingScope::new();
        scope.set_title("t").unwrap();
        scope.plot(&[0.0], &[1.0], &style("a")).unwrap();
        scope.legend(LegendLocation::UpperRight).unwrap();
        scope.clear().unwrap();
        assert_eq!(scope.frame(), &Frame::default());
        assert_eq!(scope.clears(), 1);
    }

    #[test]
    fn test_mismatched_series_rejected() {
        let mut scope = RecordingScope::new();
        let err = scope.plot(&[0.0, 1.0], &[1.0], &style("a")).unwrap_err();
        assert!(matches!(err, DiffusionError::Display(_)));
    }

    #[test]
    fn test_shared_handle_draws_on_same_frame() {
        let shared = Rc::new(RefCell::new(RecordingScope::new()));
        let mut first = shared.clone();
        let mut second = shared.clone();
        first.plot(&[0.0], &[2.0], &style("line")).unwrap();
        second.set_title("shared").unwrap();

        let scope = shared.borrow();
        assert_eq!(scope.title(), Some("shared"));
        assert_eq!(scope.series("line").map(|s| s.ys.clone()), Some(vec![2.0]));
    }
}
