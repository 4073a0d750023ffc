//! Consultoria V4: status hero for the selected month plus the generated
//! narrative panel. A stale response never overwrites a newer one: each
//! request carries a sequence number and only the latest may commit.

use crate::dashboards::d402_growth_advisory::api;
use crate::shared::components::number_format::{format_brl, format_percent};
use crate::shared::state::use_app_state;
use contracts::domain::a001_sales_ledger::aggregate::Quarter;
use contracts::domain::a001_sales_ledger::metrics::{
    monthly_actual, monthly_attainment, monthly_target, quarter_rollup,
};
use contracts::domain::a002_client_portfolio::aggregate::TOP_CLIENTS;
use contracts::domain::a003_growth_advisory::{
    inactive_clients, AdvisoryError, AdvisorySnapshot, PerformanceStatus, FALLBACK_TEXT,
    MISSING_KEY_TEXT,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn hero_class(status: PerformanceStatus) -> &'static str {
    match status {
        PerformanceStatus::Alerta => "advisory-hero advisory-hero--alert",
        PerformanceStatus::Estabilidade => "advisory-hero advisory-hero--stable",
        PerformanceStatus::Oportunidade => "advisory-hero advisory-hero--opportunity",
    }
}

#[component]
pub fn GrowthAdvisoryDashboard() -> impl IntoView {
    let state = use_app_state();

    let snapshot = Memo::new(move |_| {
        let month = state.selected_month.get();
        state.sales.with(|ledger| {
            let attainment = monthly_attainment(ledger, month);
            AdvisorySnapshot {
                month,
                revenue: monthly_actual(ledger, month),
                target: monthly_target(month),
                attainment,
                status: PerformanceStatus::from_attainment(attainment),
                quarter_attainment: quarter_rollup(ledger, Quarter::containing(month)).attainment,
                inactive_clients: inactive_clients(&TOP_CLIENTS),
            }
        })
    });

    let insight = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let refresh = RwSignal::new(0u32);
    let request_seq = StoredValue::new(0u32);

    // Regenerate on month or status change, not on every ledger edit.
    let trigger = Memo::new(move |_| {
        let snap = snapshot.get();
        (snap.month, snap.status)
    });

    Effect::new(move |_| {
        refresh.track();
        trigger.track();
        let snap = snapshot.get_untracked();
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        loading.set(true);
        spawn_local(async move {
            let result = api::generate_insights(&snap).await;
            if request_seq.get_value() != seq {
                // A newer request superseded this one.
                return;
            }
            loading.set(false);
            match result {
                Ok(text) => insight.set(text),
                Err(AdvisoryError::MissingApiKey) => insight.set(MISSING_KEY_TEXT.to_string()),
                Err(err) => {
                    log::error!("advisory generation failed: {err}");
                    insight.set(FALLBACK_TEXT.to_string());
                }
            }
        });
    });

    let paragraphs = move || {
        insight
            .get()
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(|line| view! { <p class="advisory-panel__line">{line.to_string()}</p> })
            .collect_view()
    };

    view! {
        <div class="dashboard dashboard--advisory">
            <section class=move || hero_class(snapshot.get().status)>
                <div class="advisory-hero__status">
                    {move || snapshot.get().status.label()}
                </div>
                <div class="advisory-hero__facts">
                    <span>
                        {move || {
                            let snap = snapshot.get();
                            format!("{}: {}", snap.month.label(), format_brl(snap.revenue))
                        }}
                    </span>
                    <span>
                        {move || format!("Meta {}", format_brl(snapshot.get().target))}
                    </span>
                    <span>
                        {move || format!(
                            "Atingimento {}",
                            format_percent(snapshot.get().attainment),
                        )}
                    </span>
                    <span>
                        {move || format!(
                            "Quarter {}",
                            format_percent(snapshot.get().quarter_attainment),
                        )}
                    </span>
                </div>
                <button
                    class="advisory-hero__refresh"
                    disabled=move || loading.get()
                    on:click=move |_| refresh.update(|n| *n += 1)
                >
                    "Gerar novamente"
                </button>
            </section>

            <section class="panel advisory-panel">
                <h2 class="panel__title">"Plano de Crescimento"</h2>
                {move || {
                    if loading.get() {
                        view! {
                            <p class="advisory-panel__loading">
                                "Sincronizando estratégias V4..."
                            </p>
                        }
                            .into_any()
                    } else {
                        view! { <div class="advisory-panel__body">{paragraphs}</div> }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}
