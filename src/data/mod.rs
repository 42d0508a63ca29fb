//! Data module - CSV loading and record extraction

mod loader;
mod processor;

pub use loader::{DataLoader, LoaderError};
pub use processor::{
    DataProcessor, PurchaseRecord, SchemaError, COUNT_COL, PET_TYPE_COL, PRODUCT_CATEGORY_COL,
};
