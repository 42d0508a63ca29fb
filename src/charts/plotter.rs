//! Chart Plotter Module
//! Draws the interactive bar chart using egui_plot.

use crate::charts::BarChartSpec;
use egui::Color32;
use egui_plot::{Bar, BarChart, Plot};

pub const BAR_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue

const BAR_WIDTH: f64 = 0.6;

/// Draws bar charts into an egui `Ui`.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Convert chart bars into egui_plot bars.
    /// X-axis: category slot, Y-axis: count.
    pub fn plot_bars(chart: &BarChartSpec) -> Vec<Bar> {
        chart
            .bars
            .iter()
            .map(|bar| {
                Bar::new(bar.slot as f64, bar.height)
                    .width(BAR_WIDTH)
                    .name(&bar.label)
                    .fill(BAR_COLOR)
            })
            .collect()
    }

    /// Draw the bar chart, filling the available space.
    pub fn draw_bar_chart(ui: &mut egui::Ui, chart: &BarChartSpec) {
        let x_labels = chart.categories.clone();
        let (y_min, y_max) = chart.value_range();

        Plot::new("repurchase_bar_chart")
            .allow_scroll(false)
            .x_axis_label(chart.x_label.clone())
            .y_axis_label(chart.y_label.clone())
            .include_y(y_min)
            .include_y(y_max)
            .include_x(-0.5)
            .include_x(chart.categories.len() as f64 - 0.5)
            .x_axis_formatter(move |mark, _range| {
                let v = mark.value;
                if v < 0.0 || (v - v.round()).abs() > 1e-6 {
                    return String::new();
                }
                x_labels.get(v.round() as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(Self::plot_bars(chart)).name(&chart.y_label));
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_sit_on_their_category_slot() {
        let mut chart = BarChartSpec::new();
        chart.push("dog", 12.0);
        chart.push("cat", 7.0);
        chart.push("dog", 3.0);

        let bars = ChartPlotter::plot_bars(&chart);
        let positions: Vec<(f64, f64)> = bars.iter().map(|b| (b.argument, b.value)).collect();
        assert_eq!(positions, vec![(0.0, 12.0), (1.0, 7.0), (0.0, 3.0)]);
    }
}
