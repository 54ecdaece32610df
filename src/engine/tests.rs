use super::AnalysisEngine;

use std::str::FromStr;

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;

use crate::engine::SalesSummary;
use crate::models::{AnalysisError, Dataset, SalesRow};

fn create_dataset(rows: &[(&str, &str, i64)]) -> Result<Dataset> {
    let rows = rows.iter()
        .map(|(product, price_each, quantity_ordered)| -> Result<SalesRow> {
            Ok(SalesRow {
                product: product.to_string(),
                price_each: Decimal::from_str(price_each)?,
                quantity_ordered: Decimal::from(*quantity_ordered)
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Dataset::from_rows(rows))
}

fn total_revenue(summary: &SalesSummary) -> Decimal {
    summary.revenue_by_product.iter().map(|entry| entry.value).sum()
}

fn create_csv(rows: &[(&str, &str, &str)]) -> String {
    let mut csv = String::from("Order ID,Product,Quantity Ordered,Price Each\n");

    for (index, (product, price_each, quantity_ordered)) in rows.iter().enumerate() {
        csv.push_str(&format!("{},{},{},{}\n", 1000 + index, product, quantity_ordered, price_each));
    }

    csv
}

#[test]
fn test_engine_aggregates_three_product_scenario() -> Result<()> {
    let dataset = create_dataset(&[("A", "10", 2), ("B", "5", 10), ("C", "20", 1)])?;
    let summary = AnalysisEngine::new().analyze(&dataset, "April")?;

    assert_eq!(summary.quantity_of("A"), Some(Decimal::from(2)));
    assert_eq!(summary.quantity_of("B"), Some(Decimal::from(10)));
    assert_eq!(summary.quantity_of("C"), Some(Decimal::from(1)));

    assert_eq!(summary.most_sold.product, "B");
    assert_eq!(summary.most_sold.value, Decimal::from(10));

    // Revenue is the sum of `Price Each` per product.
    assert_eq!(summary.highest_revenue.product, "C");
    assert_eq!(summary.highest_revenue.value, Decimal::from(20));
    assert_eq!(total_revenue(&summary), Decimal::from(35));

    Ok(())
}

#[test]
fn test_engine_aggregates_fractional_quantities() -> Result<()> {
    let csv = create_csv(&[("A", "10", "2.5"), ("A", "4", "0.5"), ("B", "5", "1")]);
    let summary = AnalysisEngine::new().analyze(&Dataset::from_csv_str(&csv)?, "March")?;

    assert_eq!(summary.rows_analyzed, 3);
    assert_eq!(summary.rows_dropped, 0);
    assert_eq!(summary.quantity_of("A"), Some(Decimal::from(3)));
    assert_eq!(summary.most_sold.product, "A");
    assert_eq!(summary.top_products[0].value, Decimal::from(3));

    let expected_average = Decimal::from(14).checked_div(Decimal::from(3)).ok_or_else(|| anyhow!("Average division failed"))?;
    assert_eq!(summary.average_price_of("A"), Some(expected_average));

    Ok(())
}

#[test]
fn test_engine_echoes_month_without_filtering_rows() -> Result<()> {
    let dataset = create_dataset(&[("A", "10", 2), ("B", "5", 10)])?;

    let april = AnalysisEngine::new().analyze(&dataset, "April")?;
    let december = AnalysisEngine::new().analyze(&dataset, "December")?;

    assert_eq!(april.month, "April");
    assert_eq!(december.month, "December");
    assert_eq!(april.rows_analyzed, december.rows_analyzed);
    assert_eq!(total_revenue(&april), total_revenue(&december));

    Ok(())
}

#[test]
fn test_engine_total_revenue_matches_surviving_rows() -> Result<()> {
    let csv = create_csv(&[
        ("Google Phone", "600", "1"),
        ("USB-C Charging Cable", "11.95", "2"),
        ("USB-C Charging Cable", "bad", "1"),
        ("Wired Headphones", "11.99", "x"),
        ("Google Phone", "600.00", "1"),
    ]);

    let dataset = Dataset::from_csv_str(&csv)?;
    let expected: Decimal = dataset.rows().iter().map(|row| row.price_each).sum();
    let summary = AnalysisEngine::new().analyze(&dataset, "May")?;

    assert_eq!(summary.rows_analyzed, 3);
    assert_eq!(summary.rows_dropped, 2);
    assert_eq!(expected, Decimal::from_str("1211.95")?);
    assert_eq!(total_revenue(&summary), expected);
    assert_eq!(summary.quantity_of("Wired Headphones"), None);

    Ok(())
}

#[test]
fn test_engine_excludes_bad_price_row_from_every_aggregate() -> Result<()> {
    let csv = create_csv(&[("A", "10", "2"), ("A", "bad", "100"), ("B", "5", "10")]);
    let summary = AnalysisEngine::new().analyze(&Dataset::from_csv_str(&csv)?, "June")?;

    assert_eq!(summary.quantity_of("A"), Some(Decimal::from(2)));
    assert_eq!(summary.most_sold.product, "B");
    assert_eq!(total_revenue(&summary), Decimal::from(15));
    assert_eq!(summary.average_price_of("A"), Some(Decimal::from(5)));

    Ok(())
}

#[test]
fn test_engine_average_price_uses_matching_product_totals() -> Result<()> {
    // Revenue and quantity series sort these products in opposite orders.
    let dataset = create_dataset(&[("Monitor", "150", 1), ("Monitor", "150", 1), ("AAA Batteries", "2.99", 60)])?;
    let summary = AnalysisEngine::new().analyze(&dataset, "July")?;

    let highest = summary.highest_average_price.clone().ok_or_else(|| anyhow!("Highest average price missing"))?;

    assert_eq!(highest.product, "Monitor");
    assert_eq!(highest.value, Decimal::from(150));
    let batteries = summary.average_price_of("AAA Batteries").ok_or_else(|| anyhow!("Battery average missing"))?;
    assert_eq!((batteries * Decimal::from(60)).round_dp(2), Decimal::from_str("2.99")?);

    Ok(())
}

#[test]
fn test_engine_top_list_is_capped_by_distinct_products() -> Result<()> {
    let many: Vec<(String, String, i64)> = (1..=14)
        .map(|index| (format!("Product {index:02}"), "1".to_string(), index))
        .collect();
    let many: Vec<(&str, &str, i64)> = many.iter().map(|(product, price, quantity)| (product.as_str(), price.as_str(), *quantity)).collect();

    let summary = AnalysisEngine::new().analyze(&create_dataset(&many)?, "August")?;

    assert_eq!(summary.top_products.len(), 10);
    assert_eq!(summary.top_products[0].product, "Product 14");
    assert_eq!(summary.top_products[9].product, "Product 05");

    let few = create_dataset(&[("A", "1", 1), ("B", "1", 2), ("C", "1", 3)])?;
    let summary = AnalysisEngine::new().analyze(&few, "August")?;

    assert_eq!(summary.top_products.len(), 3);

    Ok(())
}

#[test]
fn test_engine_respects_configured_top_n() -> Result<()> {
    let dataset = create_dataset(&[("A", "1", 1), ("B", "1", 2), ("C", "1", 3)])?;

    let summary = AnalysisEngine::new().with_top_n(2).analyze(&dataset, "September")?;
    assert_eq!(summary.top_products.len(), 2);

    assert_eq!(AnalysisEngine::new().with_top_n(0).top_n(), 1);

    Ok(())
}

#[test]
fn test_engine_extremes_equal_series_maxima() -> Result<()> {
    let dataset = create_dataset(&[("A", "3", 4), ("B", "9", 1), ("C", "1", 7), ("A", "2", 1)])?;
    let summary = AnalysisEngine::new().analyze(&dataset, "October")?;

    let max_quantity = summary.quantity_by_product.iter().map(|entry| entry.value).max();
    let max_revenue = summary.revenue_by_product.iter().map(|entry| entry.value).max();

    assert_eq!(Some(summary.most_sold.value), max_quantity);
    assert_eq!(Some(summary.highest_revenue.value), max_revenue);

    Ok(())
}

#[test]
fn test_engine_fails_with_empty_result_for_header_only_csv() -> Result<()> {
    let dataset = Dataset::from_csv_str("Product,Price Each,Quantity Ordered\n")?;
    let result = AnalysisEngine::new().analyze(&dataset, "November");

    assert!(matches!(result, Err(AnalysisError::EmptyResult)));

    Ok(())
}

#[test]
fn test_engine_leaves_average_extreme_empty_when_all_quantities_cancel() -> Result<()> {
    let dataset = create_dataset(&[("A", "5", 1), ("A", "5", -1)])?;
    let summary = AnalysisEngine::new().analyze(&dataset, "December")?;

    assert!(summary.highest_average_price.is_none());
    assert!(summary.most_sold.value.is_zero());

    Ok(())
}

#[tokio::test]
async fn test_engine_run_produces_report_with_charts() -> Result<()> {
    let csv = create_csv(&[("A", "10", "2"), ("B", "5", "10"), ("C", "20", "1")]);
    let report = AnalysisEngine::new().with_chart_size(400, 300).run(csv, "January".to_string()).await?;

    assert_eq!(report.summary.top_products.len(), 3);
    assert!(!report.charts.top_products.base64.is_empty());
    assert!(!report.charts.revenue.base64.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_engine_run_surfaces_typed_errors() -> Result<()> {
    let engine = AnalysisEngine::new();

    let missing = engine.run("Product,Quantity Ordered\nA,1\n".to_string(), "March".to_string()).await;
    let empty = engine.run("Product,Price Each,Quantity Ordered\n".to_string(), "March".to_string()).await;

    let missing = missing.err().ok_or_else(|| anyhow!("Expected a missing column error"))?;
    let empty = empty.err().ok_or_else(|| anyhow!("Expected an empty result error"))?;

    assert!(matches!(missing.downcast_ref::<AnalysisError>(), Some(AnalysisError::MissingColumns(_))));
    assert!(matches!(empty.downcast_ref::<AnalysisError>(), Some(AnalysisError::EmptyResult)));

    Ok(())
}
