//! Charts module - Chart description and rendering backends

mod bar_chart;
mod json;
mod plotter;
mod renderer;

pub use bar_chart::{
    Bar, BarChartSpec, ChartBackend, RenderError, CHART_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL,
};
pub use json::JsonBackend;
pub use plotter::ChartPlotter;
pub use renderer::{ImageFormat, StaticChartRenderer};
