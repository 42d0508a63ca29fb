//! JSON Chart Writer
//! Writes the chart description instead of drawing it.

use crate::charts::{BarChartSpec, ChartBackend, RenderError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

pub struct JsonBackend {
    output_path: PathBuf,
}

impl JsonBackend {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

impl ChartBackend for JsonBackend {
    fn render(&mut self, chart: &BarChartSpec) -> Result<(), RenderError> {
        let mut writer = BufWriter::new(File::create(&self.output_path)?);
        serde_json::to_writer_pretty(&mut writer, chart)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        info!(path = %self.output_path.display(), bars = chart.bars.len(), "chart description written");
        Ok(())
    }
}
