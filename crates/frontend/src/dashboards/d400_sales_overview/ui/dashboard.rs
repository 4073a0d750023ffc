//! Painel Analítico: seller goal indicators for the selected month,
//! monthly and quarterly charts, and the annual report table.

use crate::shared::components::charts::{GoalIndicator, MonthlyComparisonChart, QuarterlyAnalysisChart};
use crate::shared::components::number_format::{format_brl, format_percent};
use crate::shared::state::use_app_state;
use contracts::domain::a001_sales_ledger::aggregate::{SellerId, TARGETS};
use contracts::domain::a001_sales_ledger::metrics::{
    attainment_percent, month_comparison, quarter_rollups,
};
use contracts::shared::indicators::{attainment_status, IndicatorStatus};
use leptos::prelude::*;

fn badge_class(status: IndicatorStatus) -> &'static str {
    match status {
        IndicatorStatus::Good => "badge badge--success",
        IndicatorStatus::Warning => "badge badge--warning",
        IndicatorStatus::Bad => "badge badge--error",
        IndicatorStatus::Neutral => "badge",
    }
}

#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let state = use_app_state();

    let comparison = Memo::new(move |_| state.sales.with(month_comparison));
    let rollups = Memo::new(move |_| state.sales.with(quarter_rollups).to_vec());

    let goal_indicators = move || {
        let month = state.selected_month.get();
        SellerId::ALL
            .into_iter()
            .map(|seller| {
                let current = Signal::derive(move || {
                    state.sales.with(|ledger| ledger.entry(month).get(seller))
                });
                let target = Signal::derive(move || TARGETS[month.index()].get(seller));
                view! {
                    <GoalIndicator label=seller.short_label() current=current target=target />
                }
            })
            .collect_view()
    };

    let report_rows = move || {
        comparison
            .get()
            .into_iter()
            .map(|row| {
                let attainment = attainment_percent(row.actual, row.target);
                let status = attainment_status(attainment);
                view! {
                    <tr>
                        <td>{row.month.label()}</td>
                        <td class="table__number">{format_brl(row.target)}</td>
                        <td class="table__number">{format_brl(row.actual)}</td>
                        <td class="table__number">
                            <span class=badge_class(status)>{format_percent(attainment)}</span>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="dashboard dashboard--sales">
            <section class="panel">
                <h2 class="panel__title">
                    {move || format!("Metas de {}", state.selected_month.get().label())}
                </h2>
                <div class="panel__grid panel__grid--goals">{goal_indicators}</div>
            </section>

            <section class="panel">
                <h2 class="panel__title">"Meta vs Realizado (Mensal)"</h2>
                <MonthlyComparisonChart data=Signal::derive(move || comparison.get()) />
            </section>

            <section class="panel">
                <h2 class="panel__title">"Análise por Quarter"</h2>
                <QuarterlyAnalysisChart data=Signal::derive(move || rollups.get()) />
            </section>

            <section class="panel">
                <h2 class="panel__title">"Relatório Anual"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Mês"</th>
                            <th class="table__number">"Meta"</th>
                            <th class="table__number">"Realizado"</th>
                            <th class="table__number">"Atingimento"</th>
                        </tr>
                    </thead>
                    <tbody>{report_rows}</tbody>
                </table>
            </section>
        </div>
    }
}
