use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::charts::bar_chart::{BarChart, EncodedChart, SALMON, SKY_BLUE};
use crate::charts::errors::ChartError;
use crate::models::ProductValue;
use crate::types::Quantity;

pub const DEFAULT_CHART_SIZE: (u32, u32) = (1000, 600);

/// The two charts shown on the results page.
#[derive(Debug, Clone)]
pub struct SalesCharts {
    pub top_products: EncodedChart,
    pub revenue: EncodedChart
}

impl SalesCharts {
    /// Renders the top-N quantity chart and the revenue-per-product chart.
    pub fn render(top_products: &[ProductValue<Quantity>], revenue: &[ProductValue<Decimal>], size: (u32, u32)) -> Result<Self, ChartError> {
        Ok(Self {
            top_products: top_products_chart(top_products).render_base64(size)?,
            revenue: revenue_chart(revenue).render_base64(size)?
        })
    }
}

pub fn top_products_chart(top_products: &[ProductValue<Quantity>]) -> BarChart {
    BarChart::new(format!("Top {} Sold Products", top_products.len()))
        .with_axis_labels("Product", "Quantity Sold")
        .with_color(SKY_BLUE)
        .with_bars(top_products.iter().map(|entry| (entry.product.as_str(), entry.value.to_f64().unwrap_or_default())))
}

pub fn revenue_chart(revenue: &[ProductValue<Decimal>]) -> BarChart {
    BarChart::new("Total Sales for Each Product")
        .with_axis_labels("Product", "Total Sales")
        .with_color(SALMON)
        .with_bars(revenue.iter().map(|entry| (entry.product.as_str(), entry.value.to_f64().unwrap_or_default())))
}
