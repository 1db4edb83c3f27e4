use crate::shared::icons::icon;
use contracts::dashboards::d100_sales_overview::Granularity;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Time-bucket selector for the sales-over-time chart.
#[component]
pub fn GranularitySelect(value: RwSignal<Granularity>) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for="d100-granularity">"Period"</label>
            <select
                id="d100-granularity"
                class="form__select"
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<Granularity>() {
                        Ok(granularity) => value.set(granularity),
                        Err(err) => log::warn!("{}", err),
                    }
                }
            >
                {Granularity::ALL
                    .into_iter()
                    .map(|granularity| {
                        let is_selected = move || value.get() == granularity;
                        view! {
                            <option value=granularity.as_str() selected=is_selected>
                                {granularity.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Starts a new fetch cycle with the current granularity.
#[component]
pub fn RefreshButton(on_refresh: Callback<()>) -> impl IntoView {
    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            on_click=move |_| on_refresh.run(())
        >
            {icon("refresh")}
            " Refresh"
        </Button>
    }
}

/// API reachability from the `/health` probe: `None` while unknown.
#[component]
pub fn HealthBadge(#[prop(into)] healthy: Signal<Option<bool>>) -> impl IntoView {
    let class = move || match healthy.get() {
        Some(true) => "badge badge--success",
        Some(false) => "badge badge--error",
        None => "badge",
    };
    let text = move || match healthy.get() {
        Some(true) => "API online",
        Some(false) => "API offline",
        None => "Checking API…",
    };

    view! { <span class=class>{text}</span> }
}
