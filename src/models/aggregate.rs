use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::dataset::Dataset;
use crate::models::errors::AnalysisError;
use crate::types::{ProductName, Quantity};

/// Running totals for one product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductTotals {
    /// Sum of `Price Each` over the product's rows.
    pub revenue: Decimal,
    /// Sum of `Quantity Ordered` over the product's rows.
    pub quantity: Quantity
}

impl ProductTotals {
    /// Revenue divided by quantity; `None` when the aggregated quantity is zero.
    pub fn average_price(&self) -> Option<Decimal> {
        if self.quantity.is_zero() {
            return None;
        }

        self.revenue.checked_div(self.quantity)
    }
}

/// One entry of a per-product series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductValue<T> {
    pub product: ProductName,
    pub value: T
}

/// Per-product revenue and quantity, keyed by product name.
///
/// Each series accessor sorts descending by its own metric, so two series can order
/// products differently. Ties keep product-name order.
#[derive(Debug, Clone, Default)]
pub struct ProductAggregate {
    totals: BTreeMap<ProductName, ProductTotals>
}

impl ProductAggregate {
    /// Groups the dataset by product and sums each group.
    ///
    /// # Errors
    /// Returns `AnalysisError::Overflow` if a product's revenue or quantity no longer fits.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, AnalysisError> {
        let mut totals = BTreeMap::<ProductName, ProductTotals>::new();

        for row in dataset.rows() {
            let entry = totals.entry(row.product.clone()).or_default();

            entry.revenue = entry.revenue.checked_add(row.price_each)
                .ok_or_else(|| AnalysisError::revenue_overflow(&row.product))?;

            entry.quantity = entry.quantity.checked_add(row.quantity_ordered)
                .ok_or_else(|| AnalysisError::quantity_overflow(&row.product))?;
        }

        Ok(Self { totals })
    }

    pub fn get(&self, product: &str) -> Option<&ProductTotals> {
        self.totals.get(product)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn revenue_series(&self) -> Vec<ProductValue<Decimal>> {
        sorted_descending(self.totals.iter().map(|(product, totals)| (product, totals.revenue)))
    }

    pub fn quantity_series(&self) -> Vec<ProductValue<Quantity>> {
        sorted_descending(self.totals.iter().map(|(product, totals)| (product, totals.quantity)))
    }

    /// Average price per product, computed from the revenue and quantity of the same key.
    /// Products with a zero aggregated quantity have no average and are left out.
    pub fn average_price_series(&self) -> Vec<ProductValue<Decimal>> {
        sorted_descending(self.totals.iter().filter_map(|(product, totals)| {
            totals.average_price().map(|average| (product, average))
        }))
    }
}

fn sorted_descending<'a, T, I>(entries: I) -> Vec<ProductValue<T>>
where
    T: Ord,
    I: Iterator<Item = (&'a ProductName, T)>
{
    let mut series: Vec<ProductValue<T>> = entries
        .map(|(product, value)| ProductValue { product: product.clone(), value })
        .collect();

    series.sort_by(|left, right| right.value.cmp(&left.value));
    series
}
