use crate::dashboards::d100_sales_overview::view_model::kpi_cards;
use crate::shared::components::stat_card::StatCard;
use contracts::dashboards::d100_sales_overview::KpiSummary;
use leptos::prelude::*;

#[component]
pub fn KpiCards(kpis: KpiSummary) -> impl IntoView {
    let cards = kpi_cards(&kpis)
        .into_iter()
        .enumerate()
        .map(|(i, card)| {
            view! {
                <StatCard
                    label=card.label
                    icon_name=card.icon
                    value=card.value
                    subtitle=card.subtitle
                    delay_ms=(i as u32) * 80
                />
            }
        })
        .collect_view();

    view! { <div class="sales-overview__kpis">{cards}</div> }
}
