use crate::dashboards::d100_sales_overview::view_model::rank_rows;
use contracts::dashboards::d100_sales_overview::RankEntry;
use leptos::prelude::*;

/// Numbered list of the top customers (or orders) as ranked by the API.
#[component]
pub fn TopCustomersList(entries: Vec<RankEntry>) -> impl IntoView {
    let rows = rank_rows(&entries);
    if rows.is_empty() {
        return view! { <div class="rank-list rank-list--empty">"No data"</div> }.into_any();
    }

    view! {
        <ol class="rank-list">
            {rows
                .into_iter()
                .map(|row| {
                    view! {
                        <li class="rank-list__item">
                            <span class="rank-list__position">{row.position}</span>
                            <div class="rank-list__subject">
                                <div class="rank-list__title">{row.title}</div>
                                <div class="rank-list__detail">{row.detail}</div>
                            </div>
                            <span class="rank-list__amount">{row.amount}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
    .into_any()
}
