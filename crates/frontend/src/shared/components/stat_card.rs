use contracts::shared::indicators::IndicatorStatus;
use leptos::prelude::*;

/// KPI tile for the dashboard header.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Pre-formatted display value
    #[prop(into)]
    value: Signal<String>,
    /// Secondary line below the value
    #[prop(into)]
    subtitle: Signal<String>,
    /// Visual status
    #[prop(into)]
    status: Signal<IndicatorStatus>,
) -> impl IntoView {
    let status_class = move || match status.get() {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    view! {
        <div class=status_class>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
                <div class="stat-card__subtitle">{subtitle}</div>
            </div>
        </div>
    }
}
