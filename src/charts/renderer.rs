//! Static Chart Renderer
//! Draws the bar chart to a PNG or SVG file with plotters.
//!
//! Layout:
//! 1. Title centered at the top
//! 2. One bar per row, grouped into category slots along the x-axis
//! 3. Axis descriptions "Pet type" / "Count"

use crate::charts::{BarChartSpec, ChartBackend, RenderError};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

const BAR_COLOR: RGBColor = RGBColor(52, 152, 219); // Blue
const BAR_MARGIN: u32 = 8;

/// Inner discrete range for `categories` slots.
///
/// Numeric discrete ranges include their end, and segmenting adds one
/// trailing segment, so `0..n-1` yields exactly `n` segments. A single-value
/// range collapses in plotters, so one category still gets `0..1`.
fn slot_range(categories: usize) -> std::ops::Range<u32> {
    0..(categories as u32).saturating_sub(1).max(1)
}

/// Output image format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(ImageFormat::Png),
            "svg" => Some(ImageFormat::Svg),
            _ => None,
        }
    }
}

pub struct StaticChartRenderer {
    output_path: PathBuf,
    format: ImageFormat,
    size: (u32, u32),
}

impl StaticChartRenderer {
    pub fn new(output_path: impl Into<PathBuf>, size: (u32, u32)) -> Result<Self, RenderError> {
        let output_path = output_path.into();
        let format = ImageFormat::from_path(&output_path)
            .ok_or_else(|| RenderError::UnsupportedFormat(output_path.display().to_string()))?;
        Ok(Self {
            output_path,
            format,
            size,
        })
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        chart: &BarChartSpec,
    ) -> Result<(), RenderError> {
        let draw_err = |e: DrawingAreaErrorKind<DB::ErrorType>| RenderError::Draw(e.to_string());

        root.fill(&WHITE).map_err(draw_err)?;

        let (y_min, y_max) = chart.value_range();

        let mut ctx = ChartBuilder::on(root)
            .caption(&chart.title, ("sans-serif", 26))
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(slot_range(chart.categories.len()).into_segmented(), y_min..y_max)
            .map_err(draw_err)?;

        let categories = &chart.categories;
        let x_formatter = |v: &SegmentValue<u32>| match v {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                categories.get(*i as usize).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        };

        ctx.configure_mesh()
            .disable_x_mesh()
            .x_labels(chart.categories.len().max(1))
            .x_label_formatter(&x_formatter)
            .x_desc(&chart.x_label)
            .y_desc(&chart.y_label)
            .axis_desc_style(("sans-serif", 18))
            .draw()
            .map_err(draw_err)?;

        ctx.draw_series(chart.bars.iter().map(|bar| {
            let left = SegmentValue::Exact(bar.slot as u32);
            let right = SegmentValue::Exact(bar.slot as u32 + 1);
            let mut rect = Rectangle::new([(left, 0.0), (right, bar.height)], BAR_COLOR.filled());
            rect.set_margin(0, 0, BAR_MARGIN, BAR_MARGIN);
            rect
        }))
        .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        Ok(())
    }
}

impl ChartBackend for StaticChartRenderer {
    fn render(&mut self, chart: &BarChartSpec) -> Result<(), RenderError> {
        match self.format {
            ImageFormat::Png => {
                let root = BitMapBackend::new(&self.output_path, self.size).into_drawing_area();
                Self::draw(&root, chart)?;
            }
            ImageFormat::Svg => {
                let root = SVGBackend::new(&self.output_path, self.size).into_drawing_area();
                Self::draw(&root, chart)?;
            }
        }
        info!(path = %self.output_path.display(), format = ?self.format, "chart image written");
        Ok(())
    }
}
