use crate::dashboards::SalesOverviewDashboard;
use crate::shared::config::{load_config, AppConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|err| {
        log::error!("Failed to load dashboard config, using defaults: {:#}", err);
        AppConfig::default()
    });
    log::info!("Metrics API base: {}", config.api.base_url);

    // Provide the resolved configuration to the whole app via context.
    provide_context(config);

    view! {
        <main class="app">
            <SalesOverviewDashboard />
        </main>
    }
}
