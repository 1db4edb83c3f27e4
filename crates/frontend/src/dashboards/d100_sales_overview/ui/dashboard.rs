use super::controls::{GranularitySelect, HealthBadge, RefreshButton};
use super::panels::DashboardPanels;
use crate::dashboards::d100_sales_overview::api::HttpMetricsApi;
use crate::dashboards::d100_sales_overview::fetch_cycle::run_fetch_cycle;
use crate::dashboards::d100_sales_overview::state::{DashboardState, Settlement};
use crate::shared::config::AppConfig;
use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

/// Sales overview dashboard component
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let api = HttpMetricsApi::new(config.api.clone());
    let limit = config.dashboard.top_customers_limit;

    let granularity = RwSignal::new(config.dashboard.default_granularity);
    let state = RwSignal::new(DashboardState::new(config.dashboard.default_granularity));
    let refresh_tick = RwSignal::new(0u32);
    let healthy = RwSignal::new(None::<bool>);

    // Probe the API once on mount
    {
        let api = api.clone();
        spawn_local(async move {
            match api.check_health().await {
                Ok(status) => {
                    if !status.is_healthy() {
                        log::warn!("Metrics API reports status '{}'", status.status);
                    }
                    healthy.set(Some(status.is_healthy()));
                }
                Err(err) => {
                    log::warn!("Metrics API health check failed: {}", err);
                    healthy.set(Some(false));
                }
            }
        });
    }

    // Run a fetch cycle on mount, on every granularity change and on refresh
    Effect::new(move |_| {
        let selected = granularity.get();
        refresh_tick.track();

        let Some(ticket) = state.try_update(|s| s.begin_cycle(selected)) else {
            return;
        };
        let api = api.clone();

        spawn_local(async move {
            let outcome = run_fetch_cycle(&api, ticket.granularity, limit).await;
            match state.try_update(|s| s.settle(ticket, outcome, Utc::now())) {
                Some(Settlement::Superseded) => {
                    log::debug!("Discarded results of superseded cycle #{}", ticket.seq)
                }
                Some(Settlement::Failed) => {
                    log::error!("Sales overview refresh #{} failed, showing previous data", ticket.seq)
                }
                Some(Settlement::Applied) | None => {}
            }
        });
    });

    let on_refresh = Callback::new(move |_| refresh_tick.update(|t| *t = t.wrapping_add(1)));

    let refreshed_label = move || {
        state
            .with(|s| s.refreshed_at())
            .map(|at| format!("Updated {}", at.format("%H:%M:%S UTC")))
    };

    view! {
        <div id="d100_sales_overview--dashboard" data-page-category="dashboard" class="page page--dashboard sales-overview">
            <div class="page__header">
                <h2 class="page__title">"Sales Overview"</h2>
                <HealthBadge healthy=healthy />
                <div class="sales-overview__controls">
                    <span class="sales-overview__refreshed">{refreshed_label}</span>
                    <GranularitySelect value=granularity />
                    <RefreshButton on_refresh=on_refresh />
                </div>
            </div>

            {move || state.with(|s| s.last_failure().map(str::to_string)).map(|msg| view! {
                <div class="alert alert--warning">
                    <strong>"Last refresh failed, showing previous data. "</strong>
                    {msg}
                </div>
            })}

            {move || {
                if state.with(|s| s.is_loading()) {
                    view! {
                        <div class="sales-overview__loading">
                            <Spinner />
                            <span>"Loading sales metrics..."</span>
                        </div>
                    }.into_any()
                } else {
                    let (data, shown) = state.with(|s| (s.snapshot(), s.snapshot_granularity()));
                    view! { <DashboardPanels data=data granularity=shown /> }.into_any()
                }
            }}
        </div>
    }
}
