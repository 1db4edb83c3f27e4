//! SVG charts rendered directly by Leptos.
//!
//! Layout math lives in [`geometry`]; the components only turn it into markup.

pub mod bar_chart;
pub mod geometry;
pub mod line_chart;
pub mod pie_chart;

pub use bar_chart::BarChart;
pub use line_chart::LineChart;
pub use pie_chart::PieChart;

/// One labelled value of a chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Series colours, cycled by index.
pub const SERIES_COLORS: [&str; 8] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82CA9D", "#FF6B9D", "#A4DE6C",
];

pub fn color_at(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}
