//! CSV Data Loader Module
//! Handles CSV file loading and column extraction using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("CSV file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("No CSV file selected")]
    NoFileSelected,
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file using Polars.
    ///
    /// The whole file is read and parsed before this returns; rows that do
    /// not fit the inferred schema fail the load instead of being dropped.
    pub fn load_csv(file_path: &Path) -> Result<DataFrame, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::NotFound(file_path.to_path_buf()));
        }

        let path_str = file_path.to_string_lossy().to_string();
        debug!(path = %path_str, "reading csv");

        let df = LazyCsvReader::new(path_str.as_str())
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(false)
            .finish()?
            .collect()?;

        info!(rows = df.height(), columns = df.width(), "csv loaded");
        Ok(df)
    }

    /// Get list of column names, in file order.
    pub fn get_columns(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let path = Path::new("/definitely/not/here/pet_product_count.csv");
        let err = DataLoader::load_csv(path).unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(p) if p == path));
    }

    #[test]
    fn directory_is_not_a_csv() {
        let err = DataLoader::load_csv(&std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(_)));
    }

    #[test]
    fn columns_keep_file_order() {
        let df = DataFrame::new(vec![
            Column::new("count".into(), vec![1i64]),
            Column::new("pet_type".into(), vec!["dog"]),
        ])
        .unwrap();
        assert_eq!(DataLoader::get_columns(&df), vec!["count", "pet_type"]);
    }
}
