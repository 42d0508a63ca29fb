//! Pet Report Main Application
//! Window that shows a single bar chart until it is closed.

use crate::charts::{BarChartSpec, ChartBackend, ChartPlotter, RenderError};
use eframe::egui;
use egui::{CentralPanel, RichText, TopBottomPanel};
use tracing::info;

const WINDOW_TITLE: &str = "Pet Repurchase Report";

/// Main application window.
pub struct ReportApp {
    chart: BarChartSpec,
}

impl ReportApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart: BarChartSpec) -> Self {
        Self { chart }
    }
}

impl eframe::App for ReportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("title_panel").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(6.0);
                ui.label(RichText::new(&self.chart.title).size(20.0).strong());
                ui.add_space(6.0);
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            if self.chart.bars.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Data").size(20.0));
                });
                return;
            }
            ChartPlotter::draw_bar_chart(ui, &self.chart);
        });
    }
}

/// Shows the chart in a native window, blocking until the window is closed.
pub struct WindowBackend {
    inner_size: [f32; 2],
}

impl Default for WindowBackend {
    fn default() -> Self {
        Self {
            inner_size: [1000.0, 700.0],
        }
    }
}

impl WindowBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChartBackend for WindowBackend {
    fn render(&mut self, chart: &BarChartSpec) -> Result<(), RenderError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.inner_size)
                .with_min_inner_size([480.0, 320.0])
                .with_title(WINDOW_TITLE),
            ..Default::default()
        };

        info!(bars = chart.bars.len(), "opening chart window");
        let chart = chart.clone();
        eframe::run_native(
            WINDOW_TITLE,
            options,
            Box::new(move |cc| Ok(Box::new(ReportApp::new(cc, chart)))),
        )
        .map_err(|e| RenderError::Window(e.to_string()))?;
        info!("chart window closed");
        Ok(())
    }
}
