//! Inline-SVG chart components. Pure views over derived data; no chart
//! recomputes a metric on its own.

use crate::shared::components::number_format::{format_brl, format_brl_abbr, format_percent};
use contracts::domain::a001_sales_ledger::metrics::{
    attainment_percent, MonthComparison, QuarterRollup,
};
use contracts::domain::a002_client_portfolio::metrics::{HealthStatus, PortfolioEntry};
use leptos::prelude::*;

const BAR_COLOR_TARGET: &str = "#334155";
const BAR_COLOR_ACTUAL: &str = "#10b981";
const BAR_COLOR_PLANNED: &str = "#3b82f6";

fn health_color(health: HealthStatus) -> &'static str {
    match health {
        HealthStatus::Churned => "#f43f5e",
        HealthStatus::AtRisk => "#fbbf24",
        HealthStatus::Healthy => "#3b82f6",
    }
}

/// Month-by-month target vs actual grouped bars.
#[component]
pub fn MonthlyComparisonChart(
    /// Twelve comparison rows in calendar order
    #[prop(into)]
    data: Signal<Vec<MonthComparison>>,
) -> impl IntoView {
    let bars = move || {
        let rows = data.get();
        let max = rows
            .iter()
            .map(|r| r.target.max(r.actual))
            .fold(1.0_f64, f64::max);
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                let group_x = 12.0 + i as f64 * 59.0;
                let target_h = (row.target.max(0.0) / max) * 180.0;
                let actual_h = (row.actual.max(0.0) / max) * 180.0;
                view! {
                    <g>
                        <rect
                            x=group_x
                            y=200.0 - target_h
                            width="22"
                            height=target_h
                            fill=BAR_COLOR_TARGET
                            rx="3"
                        />
                        <rect
                            x=group_x + 25.0
                            y=200.0 - actual_h
                            width="22"
                            height=actual_h
                            fill=BAR_COLOR_ACTUAL
                            rx="3"
                        />
                        <text x=group_x + 23.0 y="218" class="chart__axis-label" text-anchor="middle">
                            {row.month.label()}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <svg class="chart" viewBox="0 0 720 224" role="img">
            <line x1="8" y1="200" x2="712" y2="200" class="chart__baseline" />
            {bars}
        </svg>
    }
}

/// Quarter rollups: target and actual bars with the attainment percentage
/// above each group.
#[component]
pub fn QuarterlyAnalysisChart(
    /// Four rollups in calendar order
    #[prop(into)]
    data: Signal<Vec<QuarterRollup>>,
) -> impl IntoView {
    let bars = move || {
        let rollups = data.get();
        let max = rollups
            .iter()
            .map(|r| r.target.max(r.actual))
            .fold(1.0_f64, f64::max);
        rollups
            .into_iter()
            .enumerate()
            .map(|(i, rollup)| {
                let group_x = 40.0 + i as f64 * 170.0;
                let target_h = (rollup.target.max(0.0) / max) * 160.0;
                let actual_h = (rollup.actual.max(0.0) / max) * 160.0;
                view! {
                    <g>
                        <text x=group_x + 52.0 y="24" class="chart__value-label" text-anchor="middle">
                            {format_percent(rollup.attainment)}
                        </text>
                        <rect
                            x=group_x
                            y=200.0 - target_h
                            width="50"
                            height=target_h
                            fill=BAR_COLOR_TARGET
                            rx="4"
                        />
                        <rect
                            x=group_x + 54.0
                            y=200.0 - actual_h
                            width="50"
                            height=actual_h
                            fill=BAR_COLOR_ACTUAL
                            rx="4"
                        />
                        <text x=group_x + 52.0 y="218" class="chart__axis-label" text-anchor="middle">
                            {rollup.quarter.label()}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <svg class="chart" viewBox="0 0 720 224" role="img">
            <line x1="8" y1="200" x2="712" y2="200" class="chart__baseline" />
            {bars}
        </svg>
    }
}

/// Per-seller progress bar for the selected month's goal.
#[component]
pub fn GoalIndicator(
    /// Seller short label
    label: &'static str,
    /// Recorded revenue
    #[prop(into)]
    current: Signal<f64>,
    /// Monthly goal
    #[prop(into)]
    target: Signal<f64>,
) -> impl IntoView {
    let percent = move || attainment_percent(current.get(), target.get());
    let width = move || format!("width: {:.1}%", percent().clamp(0.0, 100.0));

    view! {
        <div class="goal-indicator">
            <div class="goal-indicator__header">
                <span class="goal-indicator__label">{label}</span>
                <span class="goal-indicator__percent">{move || format_percent(percent())}</span>
            </div>
            <div class="goal-indicator__track">
                <div class="goal-indicator__fill" style=width></div>
            </div>
            <div class="goal-indicator__amounts">
                {move || format!("{} / {}", format_brl(current.get()), format_brl(target.get()))}
            </div>
        </div>
    }
}

/// One bar of the 2021–2030 portfolio evolution chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearTotal {
    pub year: u16,
    pub total: f64,
    /// Recorded history (true) or user-planned projection (false).
    pub historical: bool,
}

/// Portfolio totals per year over the full ten-year window, colour-coded
/// historical vs planned.
#[component]
pub fn YearlyBehaviorChart(
    /// Ten year totals in chronological order
    #[prop(into)]
    data: Signal<Vec<YearTotal>>,
) -> impl IntoView {
    let bars = move || {
        let rows = data.get();
        let max = rows.iter().map(|r| r.total).fold(1.0_f64, f64::max);
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                let x = 16.0 + i as f64 * 70.0;
                let height = (row.total.max(0.0) / max) * 170.0;
                let fill = if row.historical {
                    BAR_COLOR_ACTUAL
                } else {
                    BAR_COLOR_PLANNED
                };
                view! {
                    <g>
                        <text x=x + 28.0 y=222.0 - height class="chart__value-label" text-anchor="middle">
                            {format_brl_abbr(row.total)}
                        </text>
                        <rect x=x y=230.0 - height width="56" height=height fill=fill rx="5" />
                        <text x=x + 28.0 y="248" class="chart__axis-label" text-anchor="middle">
                            {row.year}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <svg class="chart" viewBox="0 0 720 254" role="img">
            <line x1="8" y1="230" x2="712" y2="230" class="chart__baseline" />
            {bars}
        </svg>
    }
}

/// Positioning matrix: estimated LTV (x) against growth factor (y),
/// colour-coded by health status. Shows the top of the ranked portfolio.
#[component]
pub fn PositioningMatrix(
    /// Ranked portfolio entries (already limited by the caller)
    #[prop(into)]
    entries: Signal<Vec<PortfolioEntry>>,
) -> impl IntoView {
    let points = move || {
        let entries = entries.get();
        let max_ltv = entries
            .iter()
            .map(|e| e.metrics.estimated_ltv)
            .fold(1.0_f64, f64::max);
        let max_growth = entries
            .iter()
            .map(|e| e.metrics.growth_factor)
            .fold(1.0_f64, f64::max);
        entries
            .into_iter()
            .map(|entry| {
                let x = 30.0 + (entry.metrics.estimated_ltv.max(0.0) / max_ltv) * 440.0;
                let y = 260.0 - (entry.metrics.growth_factor.max(0.0) / max_growth) * 230.0;
                let r = 6.0 + (entry.metrics.estimated_ltv.max(0.0) / max_ltv) * 12.0;
                let title = format!(
                    "{}: {}",
                    entry.client.name,
                    format_brl(entry.metrics.estimated_ltv)
                );
                view! {
                    <circle
                        cx=x
                        cy=y
                        r=r
                        fill=health_color(entry.metrics.health)
                        fill-opacity="0.85"
                    >
                        <title>{title}</title>
                    </circle>
                }
            })
            .collect_view()
    };

    view! {
        <svg class="chart chart--matrix" viewBox="0 0 500 280" role="img">
            <line x1="250" y1="10" x2="250" y2="270" class="chart__quadrant-line" />
            <line x1="10" y1="140" x2="490" y2="140" class="chart__quadrant-line" />
            <text x="125" y="76" class="chart__quadrant-label" text-anchor="middle">"ENCANTAR"</text>
            <text x="375" y="76" class="chart__quadrant-label" text-anchor="middle">"VALORIZAR"</text>
            <text x="125" y="210" class="chart__quadrant-label" text-anchor="middle">"DESENVOLVER"</text>
            <text x="375" y="210" class="chart__quadrant-label" text-anchor="middle">"FIDELIZAR"</text>
            {points}
        </svg>
    }
}
