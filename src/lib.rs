//! Sales CSV analysis: per-product revenue and quantity aggregation, bar charts, and an
//! HTML front end served over axum.

pub mod charts;
pub mod config;
pub mod engine;
pub mod http;
pub mod models;
pub mod types;

pub use config::AppConfig;
pub use engine::{AnalysisEngine, SalesReport, SalesSummary};
pub use http::AppServer;
