use axum::http::StatusCode;

use crate::engine::SalesReport;
use crate::http::upload::{FIELD_CSV_FILE, FIELD_MONTH};

pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December"
];

const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 40px; color: #333; }
h1, h2 { color: #333; }
table { border-collapse: collapse; margin: 20px 0; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #4682b4; color: white; }
td.number { text-align: right; }
img { max-width: 100%; margin: 20px 0; }
.error { color: #dc3545; }
";

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for character in value.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(character)
        }
    }

    escaped
}

pub fn upload_form_page() -> String {
    let mut output = page_header("Sales Analysis");

    output.push_str("<h1>Sales Analysis</h1>\n");
    output.push_str("<form action=\"/analyze\" method=\"post\" enctype=\"multipart/form-data\">\n");
    output.push_str(&format!("<p><label for=\"{FIELD_MONTH}\">Month</label>\n<select id=\"{FIELD_MONTH}\" name=\"{FIELD_MONTH}\">\n"));

    for month in MONTHS {
        output.push_str(&format!("<option value=\"{month}\">{month}</option>\n"));
    }

    output.push_str("</select></p>\n");
    output.push_str(&format!("<p><label for=\"{FIELD_CSV_FILE}\">Sales CSV</label>\n<input type=\"file\" id=\"{FIELD_CSV_FILE}\" name=\"{FIELD_CSV_FILE}\" accept=\".csv,text/csv\" required></p>\n"));
    output.push_str("<p><button type=\"submit\">Analyze</button></p>\n");
    output.push_str("</form>\n");

    output.push_str(page_footer());
    output
}

pub fn results_page(report: &SalesReport) -> String {
    let summary = &report.summary;
    let month = escape_html(&summary.month);
    let mut output = page_header(&format!("Sales Analysis - {month}"));

    output.push_str(&format!("<h1>Sales Analysis for {month}</h1>\n"));

    output.push_str("<h2>Summary</h2>\n");
    output.push_str("<table>\n");
    output.push_str(&format!(
        "<tr><td>Most Sold Product</td><td>{}</td><td class=\"number\">{} units</td></tr>\n",
        escape_html(&summary.most_sold.product), summary.most_sold.value.normalize()
    ));
    output.push_str(&format!(
        "<tr><td>Highest Revenue Product</td><td>{}</td><td class=\"number\">${:.2}</td></tr>\n",
        escape_html(&summary.highest_revenue.product), summary.highest_revenue.value
    ));
    match &summary.highest_average_price {
        Some(extreme) => output.push_str(&format!(
            "<tr><td>Highest Average Price Product</td><td>{}</td><td class=\"number\">${:.2}</td></tr>\n",
            escape_html(&extreme.product), extreme.value
        )),
        None => output.push_str("<tr><td>Highest Average Price Product</td><td colspan=\"2\">n/a</td></tr>\n")
    }
    output.push_str(&format!(
        "<tr><td>Rows Analyzed</td><td colspan=\"2\">{} ({} dropped)</td></tr>\n",
        summary.rows_analyzed, summary.rows_dropped
    ));
    output.push_str("</table>\n");

    output.push_str(&format!("<h2>Top {} Sold Products</h2>\n", summary.top_products.len()));
    output.push_str("<table>\n<tr><th>Product</th><th>Quantity Sold</th></tr>\n");
    for entry in &summary.top_products {
        output.push_str(&format!(
            "<tr><td>{}</td><td class=\"number\">{}</td></tr>\n",
            escape_html(&entry.product), entry.value.normalize()
        ));
    }
    output.push_str("</table>\n");
    output.push_str(&format!(
        "<img id=\"top-products-chart\" alt=\"Top sold products\" src=\"{}\">\n",
        report.charts.top_products.data_uri()
    ));

    output.push_str("<h2>Total Sales for Each Product</h2>\n");
    output.push_str("<table>\n<tr><th>Product</th><th>Total Sales</th><th>Quantity</th><th>Average Price</th></tr>\n");
    for entry in &summary.revenue_by_product {
        let quantity = summary.quantity_of(&entry.product).unwrap_or_default().normalize();
        let average = summary.average_price_of(&entry.product)
            .map(|average| format!("${average:.2}"))
            .unwrap_or_else(|| "n/a".to_string());

        output.push_str(&format!(
            "<tr><td>{}</td><td class=\"number\">${:.2}</td><td class=\"number\">{}</td><td class=\"number\">{}</td></tr>\n",
            escape_html(&entry.product), entry.value, quantity, average
        ));
    }
    output.push_str("</table>\n");
    output.push_str(&format!(
        "<img id=\"revenue-chart\" alt=\"Total sales for each product\" src=\"{}\">\n",
        report.charts.revenue.data_uri()
    ));

    output.push_str("<p><a href=\"/\">Analyze another file</a></p>\n");
    output.push_str(page_footer());
    output
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let mut output = page_header("Sales Analysis - Error");

    output.push_str(&format!("<h1>{}</h1>\n", escape_html(&status.to_string())));
    output.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(message)));
    output.push_str("<p><a href=\"/\">Back to upload</a></p>\n");

    output.push_str(page_footer());
    output
}

fn page_header(title: &str) -> String {
    let mut output = String::new();

    output.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    output.push_str(&format!("<title>{title}</title>\n"));
    output.push_str(&format!("<style>\n{STYLE}</style>\n"));
    output.push_str("</head>\n<body>\n");

    output
}

fn page_footer() -> &'static str {
    "</body>\n</html>\n"
}
