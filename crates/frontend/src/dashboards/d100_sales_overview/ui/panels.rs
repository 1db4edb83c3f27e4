use super::kpi_cards::KpiCards;
use super::top_customers::TopCustomersList;
use crate::dashboards::d100_sales_overview::fetch_cycle::DashboardData;
use crate::dashboards::d100_sales_overview::view_model::{
    category_data, product_bars, time_series_data,
};
use crate::shared::charts::{BarChart, LineChart, PieChart};
use contracts::dashboards::d100_sales_overview::Granularity;
use leptos::prelude::*;
use std::sync::Arc;

/// Cards, charts and lists of one snapshot.
#[component]
pub fn DashboardPanels(
    data: Arc<DashboardData>,
    /// Granularity the time series was fetched with
    #[prop(optional_no_strip)]
    granularity: Option<Granularity>,
) -> impl IntoView {
    let series_title = format!(
        "Sales Over Time ({})",
        granularity.unwrap_or_default().label()
    );

    // Hidden when the API has no product lines.
    let product_panel = product_bars(&data.product_performance).map(|bars| {
        view! {
            <section class="sales-overview__panel sales-overview__panel--wide">
                <h3 class="sales-overview__panel-title">"Product Performance"</h3>
                <BarChart data=bars title="Product performance" />
            </section>
        }
    });

    view! {
        <KpiCards kpis=data.kpis.clone() />

        <div class="sales-overview__grid">
            <section class="sales-overview__panel sales-overview__panel--wide">
                <h3 class="sales-overview__panel-title">{series_title.clone()}</h3>
                <LineChart data=time_series_data(&data.sales_over_time) title=series_title />
            </section>

            <section class="sales-overview__panel">
                <h3 class="sales-overview__panel-title">"Sales by Category"</h3>
                <PieChart data=category_data(&data.sales_by_category) title="Sales by category" />
            </section>

            <section class="sales-overview__panel">
                <h3 class="sales-overview__panel-title">"Top Customers"</h3>
                <TopCustomersList entries=data.top_customers.clone() />
            </section>

            {product_panel}
        </div>
    }
}
