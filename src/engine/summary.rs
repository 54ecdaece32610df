use rust_decimal::Decimal;

use crate::charts::SalesCharts;
use crate::models::ProductValue;
use crate::types::Quantity;

/// A product picked as the maximum of some metric.
pub type Extreme<T> = ProductValue<T>;

/// Everything the pipeline derives from one upload.
#[derive(Debug, Clone)]
pub struct SalesSummary {
    /// The month selected on the form. Echoed only; rows are not filtered by it.
    pub month: String,
    /// Revenue per product, highest first.
    pub revenue_by_product: Vec<ProductValue<Decimal>>,
    /// Quantity per product, highest first.
    pub quantity_by_product: Vec<ProductValue<Quantity>>,
    /// Average price per product, highest first. Products with zero quantity are absent.
    pub average_price_by_product: Vec<ProductValue<Decimal>>,
    pub most_sold: Extreme<Quantity>,
    pub highest_revenue: Extreme<Decimal>,
    /// `None` only when every product's aggregated quantity is zero.
    pub highest_average_price: Option<Extreme<Decimal>>,
    pub top_products: Vec<ProductValue<Quantity>>,
    pub rows_analyzed: usize,
    pub rows_dropped: usize
}

impl SalesSummary {
    pub fn quantity_of(&self, product: &str) -> Option<Quantity> {
        self.quantity_by_product.iter()
            .find(|entry| entry.product == product)
            .map(|entry| entry.value)
    }

    pub fn average_price_of(&self, product: &str) -> Option<Decimal> {
        self.average_price_by_product.iter()
            .find(|entry| entry.product == product)
            .map(|entry| entry.value)
    }
}

/// A summary together with its rendered charts.
#[derive(Debug, Clone)]
pub struct SalesReport {
    pub summary: SalesSummary,
    pub charts: SalesCharts
}
