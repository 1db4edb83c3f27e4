use crate::shared::icons::icon;
use leptos::prelude::*;

/// Summary card with an icon, a label and a preformatted value.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Display string, already formatted
    #[prop(into)]
    value: String,
    /// Optional subtitle below the value
    #[prop(optional_no_strip)]
    subtitle: Option<String>,
    /// Animation delay for staggered appearance
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    let subtitle_view = subtitle.map(|s| {
        view! { <div class="stat-card__subtitle">{s}</div> }
    });

    view! {
        <div class="stat-card" style=style>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
