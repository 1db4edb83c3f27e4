use super::geometry::pie_slices;
use super::{color_at, ChartDatum};
use crate::shared::number_format::format_share_label;
use leptos::prelude::*;

const SIZE: f64 = 220.0;
const RADIUS: f64 = 100.0;

/// Pie chart with a legend of `"<name>: <pct>%"` labels.
#[component]
pub fn PieChart(
    data: Vec<ChartDatum>,
    #[prop(optional, into)]
    title: String,
) -> impl IntoView {
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let total: f64 = values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();
    let center = SIZE / 2.0;

    let slices = pie_slices(&values, center, center, RADIUS)
        .into_iter()
        .map(|slice| {
            view! {
                <path class="chart__slice" d=slice.path fill=color_at(slice.index) stroke="#fff" />
            }
        })
        .collect_view();

    let legend = data
        .iter()
        .enumerate()
        .map(|(i, datum)| {
            let swatch = format!("background: {};", color_at(i));
            view! {
                <li class="chart-legend__item">
                    <span class="chart-legend__swatch" style=swatch></span>
                    {format_share_label(&datum.label, datum.value, total)}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--pie">
            <svg
                viewBox=format!("0 0 {} {}", SIZE, SIZE)
                role="img"
                aria-label=title
            >
                {slices}
            </svg>
            <ul class="chart-legend">{legend}</ul>
        </div>
    }
}
