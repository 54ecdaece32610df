mod analysis_engine;
mod summary;
#[cfg(test)]
mod tests;

pub use analysis_engine::{AnalysisEngine, DEFAULT_TOP_N};
pub use summary::{Extreme, SalesReport, SalesSummary};
