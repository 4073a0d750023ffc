//! Top bar: title, tab navigation and the four KPI cards. Every card
//! value is a derived signal over the sales ledger.

use crate::shared::components::number_format::{format_brl, format_percent};
use crate::shared::components::stat_card::StatCard;
use crate::shared::state::{use_app_state, Tab};
use contracts::domain::a001_sales_ledger::aggregate::Quarter;
use contracts::domain::a001_sales_ledger::metrics::{
    annual_goal_percent, annual_total, best_performer, quarter_rollup,
};
use contracts::shared::indicators::{attainment_status, IndicatorStatus};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let state = use_app_state();

    let total = Signal::derive(move || state.sales.with(annual_total));
    let goal_percent = Signal::derive(move || state.sales.with(annual_goal_percent));
    let quarter = Signal::derive(move || Quarter::containing(state.selected_month.get()));
    let quarter_attainment = Signal::derive(move || {
        state
            .sales
            .with(|ledger| quarter_rollup(ledger, quarter.get()).attainment)
    });
    let best = Signal::derive(move || {
        state
            .sales
            .with(|ledger| best_performer(ledger, state.selected_month.get()))
    });

    view! {
        <header class="header">
            <div class="header__bar">
                <h1 class="header__title">"Dashboard de BI Corporativo"</h1>
                <nav class="header__tabs">
                    {Tab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class=move || {
                                        if state.active_tab.get() == tab {
                                            "header__tab header__tab--active"
                                        } else {
                                            "header__tab"
                                        }
                                    }
                                    on:click=move |_| state.active_tab.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>

            <div class="header__cards">
                <StatCard
                    label="Revenue Acumulado"
                    value=Signal::derive(move || format_brl(total.get()))
                    subtitle=Signal::derive(|| "YTD Realizado".to_string())
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Goal Atingido"
                    value=Signal::derive(move || format_percent(goal_percent.get()))
                    subtitle=Signal::derive(|| "Target 2026".to_string())
                    status=Signal::derive(move || attainment_status(goal_percent.get()))
                />
                <StatCard
                    label="Quarter Status"
                    value=Signal::derive(move || quarter.get().label().to_string())
                    subtitle=Signal::derive(move || {
                        format!("{} QTD", format_percent(quarter_attainment.get()))
                    })
                    status=Signal::derive(move || attainment_status(quarter_attainment.get()))
                />
                <StatCard
                    label="Top Seller"
                    value=Signal::derive(move || {
                        best.get()
                            .map(|(seller, _)| seller.short_label().to_string())
                            .unwrap_or_else(|| "Pendente".to_string())
                    })
                    subtitle=Signal::derive(move || {
                        best.get()
                            .map(|(_, amount)| format_brl(amount))
                            .unwrap_or_else(|| "Sem lançamentos".to_string())
                    })
                    status=Signal::derive(move || {
                        if best.get().is_some() {
                            IndicatorStatus::Good
                        } else {
                            IndicatorStatus::Neutral
                        }
                    })
                />
            </div>
        </header>
    }
}
