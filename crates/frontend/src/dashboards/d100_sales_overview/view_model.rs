//! Pure mapping from [`DashboardData`] slots to display-ready rows.

use crate::shared::charts::ChartDatum;
use crate::shared::number_format::{format_count, format_currency};
use contracts::dashboards::d100_sales_overview::{
    CategorySlice, KpiSummary, ProductPerformance, RankEntry, RankSubject, StatusCount,
    TimeSeriesPoint,
};

#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: String,
    pub subtitle: Option<String>,
}

/// The four summary cards, in display order.
pub fn kpi_cards(kpis: &KpiSummary) -> Vec<KpiCard> {
    vec![
        KpiCard {
            label: "Total Revenue",
            icon: "revenue",
            value: format_currency(kpis.total_revenue()),
            subtitle: None,
        },
        KpiCard {
            label: "Total Orders",
            icon: "orders",
            value: format_count(kpis.total_orders()),
            subtitle: status_summary(&kpis.status_breakdown),
        },
        KpiCard {
            label: "Avg Order Value",
            icon: "average",
            value: format_currency(kpis.avg_order_value()),
            subtitle: None,
        },
        KpiCard {
            label: "Total Quantity",
            icon: "quantity",
            value: format_count(kpis.total_quantity()),
            subtitle: None,
        },
    ]
}

/// "Shipped 2,617 · Cancelled 60", in the order the API sent.
fn status_summary(breakdown: &[StatusCount]) -> Option<String> {
    if breakdown.is_empty() {
        return None;
    }
    Some(
        breakdown
            .iter()
            .map(|s| {
                let status = if s.status.is_empty() { "Unknown" } else { s.status.as_str() };
                format!("{} {}", status, format_count(s.count()))
            })
            .collect::<Vec<_>>()
            .join(" · "),
    )
}

pub fn time_series_data(points: &[TimeSeriesPoint]) -> Vec<ChartDatum> {
    points
        .iter()
        .map(|p| ChartDatum::new(p.date.clone(), p.total_sales.unwrap_or(0.0)))
        .collect()
}

pub fn category_data(slices: &[CategorySlice]) -> Vec<ChartDatum> {
    slices
        .iter()
        .map(|s| ChartDatum::new(s.category.clone(), s.total_sales.unwrap_or(0.0)))
        .collect()
}

/// Bars to draw, or `None` when the product panel must stay hidden.
pub fn product_bars(performance: &ProductPerformance) -> Option<Vec<ChartDatum>> {
    performance.bars().map(|rows| {
        rows.iter()
            .map(|p| ChartDatum::new(p.product.clone(), p.total_sales.unwrap_or(0.0)))
            .collect()
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankRow {
    /// 1-based position in the response.
    pub position: usize,
    pub title: String,
    pub detail: String,
    pub amount: String,
}

/// Ranked rows in the order received; never re-sorted here.
pub fn rank_rows(entries: &[RankEntry]) -> Vec<RankRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let (title, detail) = match entry.subject() {
                RankSubject::Customer { name, order_count } => {
                    (name.to_string(), plural(order_count, "order", "orders"))
                }
                RankSubject::Order { id, line_items } => (
                    format!("Order #{}", id),
                    plural(line_items, "line item", "line items"),
                ),
                RankSubject::Unknown => ("Unknown".to_string(), String::new()),
            };
            RankRow {
                position: i + 1,
                title,
                detail,
                amount: format_currency(entry.total_sales()),
            }
        })
        .collect()
}

fn plural(count: f64, one: &str, many: &str) -> String {
    let word = if count == 1.0 { one } else { many };
    format!("{} {}", format_count(count), word)
}
