//! Data Processor Module
//! Extracts purchase-count records and the bar chart from a loaded table.

use crate::charts::BarChartSpec;
use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

pub const PET_TYPE_COL: &str = "pet_type";
pub const PRODUCT_CATEGORY_COL: &str = "product_category";
pub const COUNT_COL: &str = "count";

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Column not found: {0}")]
    MissingColumn(String),
    #[error("Column '{column}' is not numeric (found {dtype})")]
    NonNumeric { column: String, dtype: String },
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// One row of the purchase-count table.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRecord {
    pub pet_type: String,
    pub product_category: Option<String>,
    pub count: f64,
}

/// Turns the loaded table into chart input.
pub struct DataProcessor;

impl DataProcessor {
    /// Read every usable row, in table order.
    ///
    /// Rows with a null pet type or a null/NaN count are skipped.
    pub fn records(df: &DataFrame) -> Result<Vec<PurchaseRecord>, SchemaError> {
        let pet_series = Self::require_column(df, PET_TYPE_COL)?;
        let count_series = Self::require_column(df, COUNT_COL)?;
        Self::require_numeric(count_series)?;
        let category_series = Self::require_column(df, PRODUCT_CATEGORY_COL).ok();

        let count_f64 = count_series.cast(&DataType::Float64)?;
        let count_ca = count_f64.f64()?;

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let pet_type = pet_series.get(i).ok().and_then(Self::label);
            let count = count_ca.get(i).filter(|v| !v.is_nan());

            match (pet_type, count) {
                (Some(pet_type), Some(count)) => {
                    let product_category = category_series
                        .and_then(|col| col.get(i).ok())
                        .and_then(Self::label);
                    records.push(PurchaseRecord {
                        pet_type,
                        product_category,
                        count,
                    });
                }
                _ => warn!(row = i, "skipping row with missing pet type or count"),
            }
        }

        debug!(records = records.len(), "purchase records extracted");
        Ok(records)
    }

    /// Build the repurchase bar chart: `pet_type` on x, `count` as bar height.
    pub fn bar_chart(df: &DataFrame) -> Result<BarChartSpec, SchemaError> {
        let mut chart = BarChartSpec::new();
        for record in Self::records(df)? {
            chart.push(&record.pet_type, record.count);
        }
        Ok(chart)
    }

    fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, SchemaError> {
        df.column(name)
            .map_err(|_| SchemaError::MissingColumn(name.to_string()))
    }

    /// An empty or all-null column has no type to speak of and counts as numeric.
    fn require_numeric(col: &Column) -> Result<(), SchemaError> {
        let all_null = col.null_count() == col.len();
        let numeric = all_null
            || matches!(
                col.dtype(),
                DataType::Float32
                    | DataType::Float64
                    | DataType::Int8
                    | DataType::Int16
                    | DataType::Int32
                    | DataType::Int64
                    | DataType::UInt8
                    | DataType::UInt16
                    | DataType::UInt32
                    | DataType::UInt64
            );
        if numeric {
            Ok(())
        } else {
            Err(SchemaError::NonNumeric {
                column: col.name().to_string(),
                dtype: col.dtype().to_string(),
            })
        }
    }

    fn label(value: AnyValue) -> Option<String> {
        match value {
            AnyValue::Null => None,
            AnyValue::String(s) => Some(s.to_string()),
            other => Some(other.to_string().trim_matches('"').to_string()),
        }
    }
}
