mod bar_chart;
mod errors;
mod sales_charts;
#[cfg(test)]
mod tests;

pub use bar_chart::{BarChart, EncodedChart, SALMON, SKY_BLUE};
pub use errors::ChartError;
pub use sales_charts::{revenue_chart, top_products_chart, SalesCharts, DEFAULT_CHART_SIZE};
