//! Pet Report - repurchase counts by pet type
//!
//! Loads a purchase-count CSV, lists its columns and draws a bar chart of
//! `count` per `pet_type` through a pluggable [`charts::ChartBackend`].

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod report;

pub use report::{build_chart, inspect, load, render, run, ReportError};
