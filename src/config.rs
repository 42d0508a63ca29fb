//! Configuration Module
//! Command line arguments and the resolved report configuration.

use crate::charts::{ChartBackend, JsonBackend, RenderError, StaticChartRenderer};
use crate::data::LoaderError;
use crate::gui::WindowBackend;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "pet-report")]
#[command(about = "Bar chart of repurchase counts by pet type")]
#[command(version)]
pub struct Cli {
    /// Purchase count CSV with `pet_type` and `count` columns.
    /// A file dialog opens when neither this nor PET_REPORT_CSV is set.
    #[arg(env = "PET_REPORT_CSV")]
    pub csv: Option<PathBuf>,

    /// Write the chart to a file (.png, .svg or .json) instead of opening a window
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Image width in pixels (PNG/SVG output)
    #[arg(long, default_value = "1024")]
    pub width: u32,

    /// Image height in pixels (PNG/SVG output)
    #[arg(long, default_value = "768")]
    pub height: u32,

    /// Open the written file with the system default application
    #[arg(long, requires = "output")]
    pub open: bool,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, env = "PET_REPORT_LOG", default_value = "warn")]
    pub log_level: tracing::Level,
}

/// Where the chart ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Window,
    Image(PathBuf),
    Json(PathBuf),
}

impl OutputTarget {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            None => OutputTarget::Window,
            Some(p) => {
                let is_json = p
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("json"));
                if is_json {
                    OutputTarget::Json(p)
                } else {
                    OutputTarget::Image(p)
                }
            }
        }
    }

    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            OutputTarget::Window => None,
            OutputTarget::Image(p) | OutputTarget::Json(p) => Some(p),
        }
    }
}

/// Fully resolved settings for one report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub csv_path: PathBuf,
    pub output: OutputTarget,
    pub image_size: (u32, u32),
    pub open_output: bool,
}

impl ReportConfig {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            output: OutputTarget::Window,
            image_size: (1024, 768),
            open_output: false,
        }
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    /// Resolve command line arguments, asking for a file when none was given.
    pub fn from_cli(cli: Cli) -> Result<Self, LoaderError> {
        let csv_path = match cli.csv {
            Some(path) => path,
            None => {
                debug!("no csv path given, opening file dialog");
                rfd::FileDialog::new()
                    .add_filter("CSV Files", &["csv"])
                    .pick_file()
                    .ok_or(LoaderError::NoFileSelected)?
            }
        };

        Ok(Self {
            csv_path,
            output: OutputTarget::from_path(cli.output),
            image_size: (cli.width, cli.height),
            open_output: cli.open,
        })
    }

    /// Create the rendering backend for the configured output.
    pub fn backend(&self) -> Result<Box<dyn ChartBackend>, RenderError> {
        Ok(match &self.output {
            OutputTarget::Window => Box::new(WindowBackend::new()),
            OutputTarget::Image(path) => {
                Box::new(StaticChartRenderer::new(path.clone(), self.image_size)?)
            }
            OutputTarget::Json(path) => Box::new(JsonBackend::new(path.clone())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_and_output() {
        let cli = Cli::try_parse_from(["pet-report", "data.csv", "-o", "chart.png", "--open"])
            .unwrap();
        assert_eq!(cli.csv, Some(PathBuf::from("data.csv")));
        assert_eq!(cli.output, Some(PathBuf::from("chart.png")));
        assert!(cli.open);
        assert_eq!((cli.width, cli.height), (1024, 768));
    }

    #[test]
    fn open_requires_output() {
        assert!(Cli::try_parse_from(["pet-report", "data.csv", "--open"]).is_err());
    }

    #[test]
    fn output_target_by_extension() {
        assert_eq!(OutputTarget::from_path(None), OutputTarget::Window);
        assert_eq!(
            OutputTarget::from_path(Some("chart.JSON".into())),
            OutputTarget::Json("chart.JSON".into())
        );
        assert_eq!(
            OutputTarget::from_path(Some("chart.svg".into())),
            OutputTarget::Image("chart.svg".into())
        );
    }

    #[test]
    fn explicit_path_skips_dialog() {
        let cli = Cli::try_parse_from(["pet-report", "pets.csv", "-o", "out.json"]).unwrap();
        let config = ReportConfig::from_cli(cli).unwrap();
        assert_eq!(config.csv_path, PathBuf::from("pets.csv"));
        assert_eq!(config.output, OutputTarget::Json("out.json".into()));
    }

    #[test]
    fn unsupported_image_extension_fails_backend() {
        let config = ReportConfig::new("pets.csv").with_output(OutputTarget::Image("c.gif".into()));
        assert!(matches!(
            config.backend().err(),
            Some(RenderError::UnsupportedFormat(_))
        ));
    }
}
