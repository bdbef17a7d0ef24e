//! `storefront-demo` — runs every report over a fixed sample data set and
//! prints the results.

pub mod config;
pub mod render;
pub mod report;
pub mod sample;

pub use config::{DemoConfig, ReportFormat};
pub use report::StorefrontReport;
pub use sample::ReportInputs;
