//! Report Module
//! The report pipeline: load → inspect → render.

use crate::charts::{BarChartSpec, ChartBackend, RenderError};
use crate::config::ReportConfig;
use crate::data::{DataLoader, DataProcessor, LoaderError, SchemaError};
use polars::prelude::DataFrame;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    DataLoad(#[from] LoaderError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Failed to write column list: {0}")]
    Output(#[from] io::Error),
}

/// Read the whole CSV file into memory.
pub fn load(path: &Path) -> Result<DataFrame, ReportError> {
    Ok(DataLoader::load_csv(path)?)
}

/// Return the column names in file order and print them as one line to `out`.
pub fn inspect<W: Write>(df: &DataFrame, out: &mut W) -> Result<Vec<String>, ReportError> {
    let columns = DataLoader::get_columns(df);
    writeln!(out, "{:?}", columns)?;
    Ok(columns)
}

pub fn build_chart(df: &DataFrame) -> Result<BarChartSpec, ReportError> {
    Ok(DataProcessor::bar_chart(df)?)
}

/// Build the chart and hand it to `backend`.
///
/// Schema problems surface before the backend sees anything.
pub fn render<B: ChartBackend + ?Sized>(df: &DataFrame, backend: &mut B) -> Result<(), ReportError> {
    let chart = build_chart(df)?;
    info!(bars = chart.bars.len(), categories = chart.categories.len(), "rendering chart");
    backend.render(&chart)?;
    Ok(())
}

/// Run the full report against an already resolved input path.
pub fn run<B, W>(config: &ReportConfig, backend: &mut B, out: &mut W) -> Result<(), ReportError>
where
    B: ChartBackend + ?Sized,
    W: Write,
{
    let df = load(&config.csv_path)?;
    inspect(&df, out)?;
    out.flush()?;
    render(&df, backend)
}
