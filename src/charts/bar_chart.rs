//! Bar Chart Description
//! Backend-independent description of the repurchase bar chart.

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

pub const CHART_TITLE: &str = "Number of Repurchases for Different Types of Pets";
pub const X_AXIS_LABEL: &str = "Pet type";
pub const Y_AXIS_LABEL: &str = "Count";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Chart window failed: {0}")]
    Window(String),
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Failed to write chart: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to serialize chart: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// A single bar: one source row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    /// Index into [`BarChartSpec::categories`].
    pub slot: usize,
    pub height: f64,
}

/// Categorical bar chart with one axis slot per distinct label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub bars: Vec<Bar>,
}

impl Default for BarChartSpec {
    fn default() -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            categories: Vec::new(),
            bars: Vec::new(),
        }
    }
}

impl BarChartSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bar, reusing the slot of an earlier bar with the same label.
    pub fn push(&mut self, label: &str, height: f64) {
        let slot = match self.categories.iter().position(|c| c == label) {
            Some(slot) => slot,
            None => {
                self.categories.push(label.to_string());
                self.categories.len() - 1
            }
        };
        self.bars.push(Bar {
            label: label.to_string(),
            slot,
            height,
        });
    }

    /// Bar heights in source order.
    pub fn heights(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.height).collect()
    }

    /// Value range for the count axis, always including zero.
    pub fn value_range(&self) -> (f64, f64) {
        let (min, max) = self
            .bars
            .iter()
            .map(|b| b.height)
            .filter(|h| h.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), h| (lo.min(h), hi.max(h)));
        if min == max {
            return (0.0, 1.0);
        }
        let pad = (max - min) * 0.05;
        (if min < 0.0 { min - pad } else { 0.0 }, max + pad)
    }
}

/// Something that can present a bar chart.
pub trait ChartBackend {
    fn render(&mut self, chart: &BarChartSpec) -> Result<(), RenderError>;
}
