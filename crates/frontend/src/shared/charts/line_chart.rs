use super::geometry::{label_stride, line_points, max_value, polyline_attr, PlotArea};
use super::{color_at, ChartDatum};
use crate::shared::number_format::{format_compact_currency, format_currency};
use leptos::prelude::*;

const AREA: PlotArea = PlotArea::new(640.0, 260.0, 36.0);
const MAX_X_LABELS: usize = 8;

/// Line chart of a series in the order given.
#[component]
pub fn LineChart(
    /// Points in display order
    data: Vec<ChartDatum>,
    /// Accessible name of the chart
    #[prop(optional, into)]
    title: String,
) -> impl IntoView {
    if data.is_empty() {
        return view! { <div class="chart chart--empty">"No data"</div> }.into_any();
    }

    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let points = line_points(&values, &AREA);
    let polyline = polyline_attr(&points);
    let y_max = max_value(&values).map(format_compact_currency).unwrap_or_default();
    let stride = label_stride(data.len(), MAX_X_LABELS);
    let stroke = color_at(0);

    let markers = data
        .iter()
        .zip(points.iter())
        .map(|(datum, (x, y))| {
            let hint = format!("{}: {}", datum.label, format_currency(datum.value));
            view! {
                <circle
                    class="chart__marker"
                    cx=format!("{:.1}", x)
                    cy=format!("{:.1}", y)
                    r="3"
                    fill=stroke
                    data-hint=hint
                />
            }
        })
        .collect_view();

    let x_labels = data
        .iter()
        .zip(points.iter())
        .enumerate()
        .filter(|(i, _)| i % stride == 0)
        .map(|(_, (datum, (x, _)))| {
            view! {
                <text
                    class="chart__tick"
                    x=format!("{:.1}", x)
                    y=format!("{:.1}", AREA.bottom() + 16.0)
                    text-anchor="middle"
                >
                    {datum.label.clone()}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg
            class="chart chart--line"
            viewBox=AREA.view_box()
            role="img"
            aria-label=title
        >
            <line
                class="chart__axis"
                x1=AREA.padding.to_string()
                y1=AREA.bottom().to_string()
                x2=(AREA.width - AREA.padding).to_string()
                y2=AREA.bottom().to_string()
                stroke="#ced4da"
            />
            <text class="chart__tick" x="4" y=AREA.padding.to_string()>{y_max}</text>
            <polyline
                class="chart__line"
                fill="none"
                stroke=stroke
                stroke-width="2"
                points=polyline
            />
            {markers}
            {x_labels}
        </svg>
    }
    .into_any()
}
