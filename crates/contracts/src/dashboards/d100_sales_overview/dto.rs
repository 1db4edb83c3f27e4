use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

pub const KPIS_PATH: &str = "/kpis";
pub const SALES_OVER_TIME_PATH: &str = "/sales-over-time";
pub const SALES_BY_CATEGORY_PATH: &str = "/sales-by-category";
pub const TOP_CUSTOMERS_PATH: &str = "/top-customers";
pub const PRODUCT_PERFORMANCE_PATH: &str = "/product-performance";
pub const HEALTH_PATH: &str = "/health";

/// Number of ranked customers requested by the dashboard.
pub const DEFAULT_TOP_CUSTOMERS_LIMIT: u32 = 5;

// ---------------------------------------------------------------------------
// Granularity
// ---------------------------------------------------------------------------

/// Time bucket used by `/sales-over-time?period=...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    #[default]
    Month,
    Quarter,
    Year,
}

impl Granularity {
    pub const ALL: [Granularity; 4] = [
        Granularity::Day,
        Granularity::Month,
        Granularity::Quarter,
        Granularity::Year,
    ];

    /// Value of the `period` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Month => "month",
            Granularity::Quarter => "quarter",
            Granularity::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Day => "Daily",
            Granularity::Month => "Monthly",
            Granularity::Quarter => "Quarterly",
            Granularity::Year => "Yearly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Granularity::Day),
            "month" => Ok(Granularity::Month),
            "quarter" => Ok(Granularity::Quarter),
            "year" => Ok(Granularity::Year),
            other => Err(format!("Unknown granularity: {}", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Group labels arrive either as text or as bare numbers
/// (year buckets and order numbers are integers on the wire).
#[derive(Deserialize)]
#[serde(untagged)]
enum WireLabel {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<WireLabel> for String {
    fn from(label: WireLabel) -> Self {
        match label {
            WireLabel::Text(s) => s,
            WireLabel::Integer(n) => n.to_string(),
            WireLabel::Float(f) if f.fract() == 0.0 => format!("{:.0}", f),
            WireLabel::Float(f) => f.to_string(),
        }
    }
}

fn label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    WireLabel::deserialize(deserializer).map(String::from)
}

fn optional_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<WireLabel>::deserialize(deserializer).map(|l| l.map(String::from))
}

// ---------------------------------------------------------------------------
// KPI summary
// ---------------------------------------------------------------------------

/// Response of `/kpis`. Every figure may be absent or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    #[serde(default)]
    pub total_revenue: Option<f64>,
    #[serde(default)]
    pub total_orders: Option<f64>,
    #[serde(default)]
    pub avg_order_value: Option<f64>,
    #[serde(default)]
    pub total_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_breakdown: Vec<StatusCount>,
}

impl KpiSummary {
    pub fn total_revenue(&self) -> f64 {
        self.total_revenue.unwrap_or(0.0)
    }

    pub fn total_orders(&self) -> f64 {
        self.total_orders.unwrap_or(0.0)
    }

    pub fn avg_order_value(&self) -> f64 {
        self.avg_order_value.unwrap_or(0.0)
    }

    pub fn total_quantity(&self) -> f64 {
        self.total_quantity.unwrap_or(0.0)
    }
}

/// Row count per order status, part of the KPI payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    /// The API keeps the raw column name here.
    #[serde(
        default,
        rename = "STATUS",
        alias = "status",
        deserialize_with = "label"
    )]
    pub status: String,
    #[serde(default)]
    pub count: Option<f64>,
}

impl StatusCount {
    pub fn count(&self) -> f64 {
        self.count.unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Time series / categories
// ---------------------------------------------------------------------------

/// One bucket of `/sales-over-time`. Buckets arrive in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// "2003-01-06", "2003-01", "2003-Q1" or 2003 depending on granularity
    #[serde(deserialize_with = "label")]
    pub date: String,
    #[serde(default)]
    pub total_sales: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_count: Option<f64>,
}

/// One slice of `/sales-by-category` (grouped by order status).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    #[serde(deserialize_with = "label")]
    pub category: String,
    #[serde(default)]
    pub total_sales: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_count: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_sales: Option<f64>,
}

// ---------------------------------------------------------------------------
// Top customers
// ---------------------------------------------------------------------------

/// Entry of `/top-customers`.
///
/// The API ranks customers when the dataset has customer names and falls back
/// to ranking individual orders otherwise, so the same row type carries both
/// shapes. The rank is the position in the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_count: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_items: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_order_value: Option<f64>,
    #[serde(default)]
    pub total_sales: Option<f64>,
}

/// What a [`RankEntry`] aggregates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RankSubject<'a> {
    Customer { name: &'a str, order_count: f64 },
    Order { id: &'a str, line_items: f64 },
    Unknown,
}

impl RankEntry {
    pub fn subject(&self) -> RankSubject<'_> {
        if let Some(name) = self.customer_name.as_deref() {
            RankSubject::Customer {
                name,
                order_count: self.order_count.unwrap_or(0.0),
            }
        } else if let Some(id) = self.order_id.as_deref() {
            RankSubject::Order {
                id,
                line_items: self.line_items.unwrap_or(0.0),
            }
        } else {
            RankSubject::Unknown
        }
    }

    pub fn total_sales(&self) -> f64 {
        self.total_sales.unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Product performance
// ---------------------------------------------------------------------------

/// One product line of `/product-performance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPoint {
    #[serde(deserialize_with = "label")]
    pub product: String,
    #[serde(default)]
    pub total_sales: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_count: Option<f64>,
}

/// Raw element of the `/product-performance` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductRow {
    Point(ProductPoint),
    NoData { message: String },
}

/// Decoded `/product-performance` response.
///
/// The API answers `[{"message": "..."}]` when the dataset has no product
/// lines; that marker is kept apart from real rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ProductRow>", into = "Vec<ProductRow>")]
pub enum ProductPerformance {
    Rows(Vec<ProductPoint>),
    NoData { message: String },
}

impl Default for ProductPerformance {
    fn default() -> Self {
        ProductPerformance::Rows(Vec::new())
    }
}

impl ProductPerformance {
    /// Rows to chart, or `None` when there is nothing to draw.
    pub fn bars(&self) -> Option<&[ProductPoint]> {
        match self {
            ProductPerformance::Rows(rows) if !rows.is_empty() => Some(rows),
            _ => None,
        }
    }

    pub fn no_data_message(&self) -> Option<&str> {
        match self {
            ProductPerformance::NoData { message } => Some(message),
            ProductPerformance::Rows(_) => None,
        }
    }
}

impl From<Vec<ProductRow>> for ProductPerformance {
    fn from(rows: Vec<ProductRow>) -> Self {
        if let Some(ProductRow::NoData { message }) = rows.first() {
            return ProductPerformance::NoData {
                message: message.clone(),
            };
        }
        ProductPerformance::Rows(
            rows.into_iter()
                .filter_map(|row| match row {
                    ProductRow::Point(point) => Some(point),
                    ProductRow::NoData { .. } => None,
                })
                .collect(),
        )
    }
}

impl From<ProductPerformance> for Vec<ProductRow> {
    fn from(performance: ProductPerformance) -> Self {
        match performance {
            ProductPerformance::Rows(rows) => rows.into_iter().map(ProductRow::Point).collect(),
            ProductPerformance::NoData { message } => vec![ProductRow::NoData { message }],
        }
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

/// Response of `/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_wire_format() {
        assert_eq!(serde_json::to_string(&Granularity::Quarter).unwrap(), "\"quarter\"");
        assert_eq!("YEAR".parse::<Granularity>().unwrap(), Granularity::Year);
        assert_eq!(" day ".parse::<Granularity>().unwrap(), Granularity::Day);
        assert!("week".parse::<Granularity>().is_err());
        assert_eq!(Granularity::default(), Granularity::Month);
    }

    #[test]
    fn test_kpis_missing_and_null_fields_default_to_zero() {
        let kpis: KpiSummary =
            serde_json::from_str(r#"{"total_revenue": 1234.5, "total_orders": null}"#).unwrap();
        assert_eq!(kpis.total_revenue(), 1234.5);
        assert_eq!(kpis.total_orders(), 0.0);
        assert_eq!(kpis.avg_order_value(), 0.0);
        assert_eq!(kpis.total_quantity(), 0.0);
        assert!(kpis.status_breakdown.is_empty());
    }

    #[test]
    fn test_kpis_status_breakdown_uses_raw_column_name() {
        let kpis: KpiSummary = serde_json::from_str(
            r#"{"total_orders": 307, "status_breakdown": [{"STATUS": "Shipped", "count": 2617}]}"#,
        )
        .unwrap();
        assert_eq!(
            kpis.status_breakdown,
            vec![StatusCount {
                status: "Shipped".to_string(),
                count: Some(2617.0)
            }]
        );
    }

    #[test]
    fn test_malformed_status_rows_do_not_fail_kpis() {
        let kpis: KpiSummary = serde_json::from_str(
            r#"{"total_revenue": 10.0, "status_breakdown": [
                {"count": 3},
                {"status": "On Hold", "count": 4.0},
                {"STATUS": "Shipped", "count": null}
            ]}"#,
        )
        .unwrap();
        assert_eq!(kpis.total_revenue(), 10.0);
        assert_eq!(kpis.status_breakdown[0].status, "");
        assert_eq!(kpis.status_breakdown[0].count(), 3.0);
        assert_eq!(kpis.status_breakdown[1].status, "On Hold");
        assert_eq!(kpis.status_breakdown[1].count(), 4.0);
        assert_eq!(kpis.status_breakdown[2].count(), 0.0);
    }

    #[test]
    fn test_time_series_accepts_numeric_year_labels() {
        let points: Vec<TimeSeriesPoint> = serde_json::from_str(
            r#"[{"date": 2003, "total_sales": 10.0, "order_count": 2},
                {"date": "2004", "total_sales": 20.0}]"#,
        )
        .unwrap();
        assert_eq!(points[0].date, "2003");
        assert_eq!(points[0].order_count, Some(2.0));
        assert_eq!(points[1].date, "2004");
    }

    #[test]
    fn test_rank_entry_subjects() {
        let entries: Vec<RankEntry> = serde_json::from_str(
            r#"[{"customer_name": "Euro Shopping Channel", "order_count": 26, "total_sales": 912294.11},
                {"order_id": 10165, "line_items": 18, "total_sales": 67392.85},
                {"total_sales": 1.0}]"#,
        )
        .unwrap();
        assert_eq!(
            entries[0].subject(),
            RankSubject::Customer {
                name: "Euro Shopping Channel",
                order_count: 26.0
            }
        );
        assert_eq!(
            entries[1].subject(),
            RankSubject::Order {
                id: "10165",
                line_items: 18.0
            }
        );
        assert_eq!(entries[2].subject(), RankSubject::Unknown);
    }

    #[test]
    fn test_product_performance_rows() {
        let perf: ProductPerformance = serde_json::from_str(
            r#"[{"product": "Classic Cars", "total_sales": 3919615.66, "total_quantity": 33992},
                {"product": "Vintage Cars", "total_sales": 1903150.84}]"#,
        )
        .unwrap();
        let bars = perf.bars().unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].product, "Classic Cars");
        assert_eq!(bars[1].total_quantity, None);
    }

    #[test]
    fn test_product_performance_sentinel_and_empty() {
        let perf: ProductPerformance =
            serde_json::from_str(r#"[{"message": "Product line data not available"}]"#).unwrap();
        assert!(perf.bars().is_none());
        assert_eq!(perf.no_data_message(), Some("Product line data not available"));

        let empty: ProductPerformance = serde_json::from_str("[]").unwrap();
        assert!(empty.bars().is_none());
        assert!(empty.no_data_message().is_none());
    }

    #[test]
    fn test_product_performance_serializes_as_sequence() {
        let perf = ProductPerformance::NoData {
            message: "none".to_string(),
        };
        assert_eq!(serde_json::to_string(&perf).unwrap(), r#"[{"message":"none"}]"#);
    }

    #[test]
    fn test_health_status() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status": "healthy", "message": "API is running"}"#).unwrap();
        assert!(health.is_healthy());
    }
}
