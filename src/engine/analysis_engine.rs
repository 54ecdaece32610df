use std::time::Instant;

use tokio::task::spawn_blocking;
use tracing::info;

use crate::charts::{SalesCharts, DEFAULT_CHART_SIZE};
use crate::engine::summary::{Extreme, SalesReport, SalesSummary};
use crate::models::{AnalysisError, Dataset, ProductAggregate};

pub const DEFAULT_TOP_N: usize = 10;

/// Sales aggregation pipeline: dataset in, per-product summary and charts out.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    top_n: usize,
    chart_size: (u32, u32)
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            chart_size: DEFAULT_CHART_SIZE
        }
    }

    /// Length of the ranked top-products list. Values below one are raised to one.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n.max(1);
        self
    }

    pub fn with_chart_size(mut self, width: u32, height: u32) -> Self {
        self.chart_size = (width, height);
        self
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Runs the full pipeline for one upload off the async runtime.
    pub async fn run(&self, csv_text: String, month: String) -> anyhow::Result<SalesReport> {
        let engine = self.clone();

        spawn_blocking(move || engine.report(&csv_text, &month)).await?
    }

    /// Parses, aggregates and renders in one synchronous pass.
    pub fn report(&self, csv_text: &str, month: &str) -> anyhow::Result<SalesReport> {
        let dataset = Dataset::from_csv_str(csv_text)?;
        let summary = self.analyze(&dataset, month)?;
        let charts = SalesCharts::render(&summary.top_products, &summary.revenue_by_product, self.chart_size)?;

        Ok(SalesReport { summary, charts })
    }

    /// Aggregates a dataset into per-product series and extremes.
    ///
    /// `month` is carried into the summary unchanged. The rows have no agreed month
    /// column, so no filtering happens here.
    ///
    /// # Errors
    /// Returns `AnalysisError::EmptyResult` when the dataset has no rows to take a maximum
    /// over, and `AnalysisError::Overflow` if a product total overflows.
    pub fn analyze(&self, dataset: &Dataset, month: &str) -> Result<SalesSummary, AnalysisError> {
        let timer = Instant::now();
        let aggregate = ProductAggregate::from_dataset(dataset)?;

        let revenue_by_product = aggregate.revenue_series();
        let quantity_by_product = aggregate.quantity_series();
        let average_price_by_product = aggregate.average_price_series();

        let most_sold = first_of(&quantity_by_product)?;
        let highest_revenue = first_of(&revenue_by_product)?;
        let highest_average_price = average_price_by_product.first().cloned();
        let top_products = quantity_by_product.iter().take(self.top_n).cloned().collect();

        info!(
            month,
            products = aggregate.len(),
            rows_analyzed = dataset.len(),
            rows_dropped = dataset.dropped(),
            "Analyzed sales in: {:?}", timer.elapsed()
        );

        Ok(SalesSummary {
            month: month.to_string(),
            revenue_by_product,
            quantity_by_product,
            average_price_by_product,
            most_sold,
            highest_revenue,
            highest_average_price,
            top_products,
            rows_analyzed: dataset.len(),
            rows_dropped: dataset.dropped()
        })
    }
}

fn first_of<T: Clone>(series: &[Extreme<T>]) -> Result<Extreme<T>, AnalysisError> {
    series.first().cloned().ok_or(AnalysisError::EmptyResult)
}
