use super::{revenue_chart, top_products_chart, BarChart, ChartError, SalesCharts, DEFAULT_CHART_SIZE, SALMON};
use crate::models::ProductValue;

use std::str::FromStr;

use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rust_decimal::Decimal;

fn create_value<T>(product: &str, value: T) -> ProductValue<T> {
    ProductValue { product: product.to_string(), value }
}

#[test]
fn test_bar_chart_renders_svg_with_title() -> Result<()> {
    let chart = BarChart::new("Quarterly Units")
        .with_axis_labels("Product", "Units")
        .with_bars(vec![("Lightning Cable", 12.0), ("AA Batteries", 30.0)]);

    let svg = chart.render_svg((640, 480))?;

    assert!(svg.contains("<svg"));
    assert!(svg.contains("Quarterly Units"));

    Ok(())
}

fn text_nodes(svg: &str) -> Vec<&str> {
    svg.split("</text>")
        .filter_map(|chunk| chunk.rsplit_once('>'))
        .map(|(_, text)| text.trim())
        .collect()
}

fn assert_every_label_drawn(labels: &[String]) -> Result<()> {
    let chart = BarChart::new("Units Sold")
        .with_axis_labels("Product", "Units")
        .with_bars(labels.iter().enumerate().map(|(index, label)| (label.clone(), (index + 1) as f64)));

    let svg = chart.render_svg(DEFAULT_CHART_SIZE)?;
    let nodes = text_nodes(&svg);

    for label in labels {
        assert!(nodes.contains(&label.as_str()), "label [{label}] missing from {} bar chart", labels.len());
    }

    Ok(())
}

#[test]
fn test_bar_chart_labels_a_single_bar() -> Result<()> {
    assert_every_label_drawn(&["Google Phone".to_string()])
}

#[test]
fn test_bar_chart_labels_two_bars() -> Result<()> {
    assert_every_label_drawn(&["Lightning Cable".to_string(), "AA Batteries".to_string()])
}

#[test]
fn test_bar_chart_labels_every_bar_of_a_long_series() -> Result<()> {
    let labels: Vec<String> = (1..=12).map(|index| format!("Product {index:02}")).collect();

    assert_every_label_drawn(&labels)
}

#[test]
fn test_bar_chart_rejects_empty_series() {
    let chart = BarChart::new("Nothing Sold").with_bars(Vec::<(String, f64)>::new());

    assert!(matches!(chart.render_svg(DEFAULT_CHART_SIZE), Err(ChartError::EmptySeries(title)) if title == "Nothing Sold"));
    assert!(chart.render_base64(DEFAULT_CHART_SIZE).is_err());
}

#[test]
fn test_bar_chart_handles_all_zero_and_negative_values() -> Result<()> {
    let zero = BarChart::new("Zero").with_bars(vec![("A", 0.0)]);
    let negative = BarChart::new("Refunds").with_bars(vec![("A", -5.0), ("B", 10.0)]);

    assert!(zero.render_svg((320, 240)).is_ok());
    assert!(negative.render_svg((320, 240)).is_ok());

    Ok(())
}

#[test]
fn test_encoded_chart_decodes_back_to_svg() -> Result<()> {
    let encoded = BarChart::new("Encoded")
        .with_color(SALMON)
        .with_bars(vec![("A", 1.0)])
        .render_base64((320, 240))?;

    let decoded = String::from_utf8(STANDARD.decode(&encoded.base64)?)?;

    assert_eq!(encoded.mime_type, "image/svg+xml");
    assert!(encoded.data_uri().starts_with("data:image/svg+xml;base64,"));
    assert!(decoded.contains("<svg"));

    Ok(())
}

#[test]
fn test_sales_chart_builders_follow_series_order() -> Result<()> {
    let top_products = vec![create_value("B", Decimal::from(10)), create_value("A", Decimal::from_str("2.5")?)];
    let revenue = vec![create_value("C", Decimal::from_str("20")?), create_value("A", Decimal::from_str("10.5")?)];

    let top_chart = top_products_chart(&top_products);
    let revenue_chart = revenue_chart(&revenue);

    assert_eq!(top_chart.title(), "Top 2 Sold Products");
    assert_eq!(top_chart.bars(), &[("B".to_string(), 10.0), ("A".to_string(), 2.5)]);
    assert_eq!(revenue_chart.title(), "Total Sales for Each Product");
    assert_eq!(revenue_chart.bars()[1], ("A".to_string(), 10.5));

    Ok(())
}

#[test]
fn test_sales_charts_render_both_images() -> Result<()> {
    let top_products = vec![create_value("B", Decimal::from(10))];
    let revenue = vec![create_value("B", Decimal::from(5))];

    let charts = SalesCharts::render(&top_products, &revenue, DEFAULT_CHART_SIZE)?;

    assert!(!charts.top_products.base64.is_empty());
    assert!(!charts.revenue.base64.is_empty());
    assert_ne!(charts.top_products, charts.revenue);

    Ok(())
}
