use super::geometry::{bar_rects, max_value, PlotArea};
use super::{color_at, ChartDatum};
use crate::shared::number_format::{format_compact_currency, format_currency};
use leptos::prelude::*;

const AREA: PlotArea = PlotArea::new(640.0, 280.0, 36.0);

/// Vertical bar chart, one bar per datum in the order given.
#[component]
pub fn BarChart(
    data: Vec<ChartDatum>,
    #[prop(optional, into)]
    title: String,
) -> impl IntoView {
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let rects = bar_rects(&values, &AREA);
    let y_max = max_value(&values).map(format_compact_currency).unwrap_or_default();

    let bars = data
        .iter()
        .zip(rects.iter())
        .enumerate()
        .map(|(i, (datum, rect))| {
            let hint = format!("{}: {}", datum.label, format_currency(datum.value));
            view! {
                <g class="chart__bar" data-hint=hint>
                    <rect
                        x=format!("{:.1}", rect.x)
                        y=format!("{:.1}", rect.y)
                        width=format!("{:.1}", rect.width)
                        height=format!("{:.1}", rect.height)
                        fill=color_at(i)
                    />
                    <text
                        class="chart__tick"
                        x=format!("{:.1}", rect.center_x())
                        y=format!("{:.1}", AREA.bottom() + 16.0)
                        text-anchor="middle"
                    >
                        {datum.label.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            class="chart chart--bar"
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
            {bars}
        </svg>
    }
}
