//! T20 Clientes: LTV-ranked portfolio with health badges, the decennial
//! revenue table (historical cells read-only, projection cells editable),
//! the positioning matrix and the CRM note cards.

use crate::shared::components::charts::{PositioningMatrix, YearTotal, YearlyBehaviorChart};
use crate::shared::components::number_format::{format_brl, format_brl_abbr, format_percent, parse_brl};
use crate::shared::state::use_app_state;
use contracts::domain::a002_client_portfolio::aggregate::{
    value_or_zero, CURRENT_YEAR, HISTORY_YEARS, PROJECTION_YEARS, TOP_CLIENTS,
};
use contracts::domain::a002_client_portfolio::metrics::{
    filter_portfolio, ranked_portfolio, yearly_portfolio_total, HealthStatus, PortfolioEntry,
};
use leptos::prelude::*;

const MATRIX_LIMIT: usize = 15;
const CRM_CARD_LIMIT: usize = 9;
const LTV_HEADLINE_LIMIT: usize = 10;

fn health_badge_class(health: HealthStatus) -> &'static str {
    match health {
        HealthStatus::Healthy => "badge badge--success",
        HealthStatus::AtRisk => "badge badge--warning",
        HealthStatus::Churned => "badge badge--error",
    }
}

fn history_cell_class(amount: f64) -> &'static str {
    if amount == 0.0 {
        "table__cell--empty"
    } else if amount < 50_000.0 {
        "table__cell--low"
    } else if amount < 150_000.0 {
        "table__cell--mid"
    } else {
        "table__cell--high"
    }
}

#[component]
pub fn ClientPortfolioDashboard() -> impl IntoView {
    let state = use_app_state();
    let search = RwSignal::new(String::new());

    let ranked = Memo::new(move |_| {
        state
            .projections
            .with(|projections| ranked_portfolio(&TOP_CLIENTS, projections))
    });
    let filtered = Memo::new(move |_| {
        ranked.with(|entries| filter_portfolio(entries, search.get().trim()))
    });

    let ltv_headline = Memo::new(move |_| {
        ranked.with(|entries| {
            entries
                .iter()
                .take(LTV_HEADLINE_LIMIT)
                .map(|e| e.metrics.estimated_ltv)
                .sum::<f64>()
        })
    });

    let yearly = Memo::new(move |_| {
        state.projections.with(|projections| {
            HISTORY_YEARS
                .into_iter()
                .chain(PROJECTION_YEARS)
                .map(|year| YearTotal {
                    year,
                    total: yearly_portfolio_total(&TOP_CLIENTS, projections, year),
                    historical: year <= CURRENT_YEAR,
                })
                .collect::<Vec<_>>()
        })
    });

    let matrix_entries = Memo::new(move |_| {
        ranked.with(|entries| entries.iter().take(MATRIX_LIMIT).cloned().collect::<Vec<_>>())
    });

    view! {
        <div class="dashboard dashboard--clients">
            <section class="panel panel--headline">
                <div>
                    <h2 class="panel__title">"Carteira T20"</h2>
                    <p class="panel__subtitle">
                        {move || format!("LTV Top 10: {}", format_brl(ltv_headline.get()))}
                    </p>
                </div>
                <input
                    class="panel__search"
                    type="search"
                    placeholder="Buscar cliente ou setor..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </section>

            <section class="panel">
                <h2 class="panel__title">"Comportamento Anual da Carteira"</h2>
                <YearlyBehaviorChart data=Signal::derive(move || yearly.get()) />
            </section>

            <section class="panel">
                <h2 class="panel__title">"Matriz de Posicionamento"</h2>
                <PositioningMatrix entries=Signal::derive(move || matrix_entries.get()) />
            </section>

            <section class="panel panel--wide">
                <h2 class="panel__title">"Tabela Decenal 2021–2030"</h2>
                <table class="table table--decennial">
                    <thead>
                        <tr>
                            <th>"Cliente"</th>
                            <th>"Saúde"</th>
                            {HISTORY_YEARS
                                .into_iter()
                                .chain(PROJECTION_YEARS)
                                .map(|year| view! { <th class="table__number">{year}</th> })
                                .collect_view()}
                            <th class="table__number">"LTV"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || filtered.get()
                            key=|entry| entry.client.id.clone()
                            children=move |entry: PortfolioEntry| {
                                let client_id = entry.client.id.clone();
                                let history_cells = HISTORY_YEARS
                                    .into_iter()
                                    .map(|year| {
                                        let amount = value_or_zero(&entry.client.history, year);
                                        let text = if amount == 0.0 {
                                            "—".to_string()
                                        } else {
                                            format_brl_abbr(amount)
                                        };
                                        view! {
                                            <td class=format!(
                                                "table__number {}",
                                                history_cell_class(amount),
                                            )>{text}</td>
                                        }
                                    })
                                    .collect_view();
                                let projection_cells = PROJECTION_YEARS
                                    .into_iter()
                                    .map(|year| {
                                        let id = client_id.clone();
                                        let current = state.projections.with_untracked(|p| {
                                            p.value(&id, year)
                                        });
                                        let initial = if current == 0.0 {
                                            String::new()
                                        } else {
                                            format!("{current}")
                                        };
                                        view! {
                                            <td class="table__number table__cell--editable">
                                                <input
                                                    class="table__input"
                                                    type="text"
                                                    inputmode="decimal"
                                                    placeholder="—"
                                                    value=initial
                                                    on:change=move |ev| {
                                                        state
                                                            .record_projection(
                                                                &id,
                                                                year,
                                                                parse_brl(&event_target_value(&ev)),
                                                            );
                                                    }
                                                />
                                            </td>
                                        }
                                    })
                                    .collect_view();
                                view! {
                                    <tr>
                                        <td>
                                            <div class="table__client-name">{entry.client.name.clone()}</div>
                                            <div class="table__client-sector">{entry.client.sector.clone()}</div>
                                        </td>
                                        <td>
                                            <span class=health_badge_class(entry.metrics.health)>
                                                {entry.metrics.health.label()}
                                            </span>
                                        </td>
                                        {history_cells}
                                        {projection_cells}
                                        <td class="table__number table__cell--ltv">
                                            {format_brl_abbr(entry.metrics.estimated_ltv)}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>

            <section class="panel panel--wide">
                <h2 class="panel__title">"CRM de Relacionamento"</h2>
                <div class="panel__grid panel__grid--crm">
                    <For
                        each=move || {
                            filtered.with(|entries| {
                                entries.iter().take(CRM_CARD_LIMIT).cloned().collect::<Vec<_>>()
                            })
                        }
                        key=|entry| entry.client.id.clone()
                        children=move |entry: PortfolioEntry| {
                            let client_id = entry.client.id.clone();
                            let note = state
                                .notes
                                .with_untracked(|notes| {
                                    notes.get(&client_id).cloned().unwrap_or_default()
                                });
                            view! {
                                <div class="crm-card">
                                    <div class="crm-card__header">
                                        <span class="crm-card__name">{entry.client.name.clone()}</span>
                                        <span class=health_badge_class(entry.metrics.health)>
                                            {entry.metrics.health.label()}
                                        </span>
                                    </div>
                                    <div class="crm-card__metrics">
                                        <span>{format!("LTV {}", format_brl_abbr(entry.metrics.estimated_ltv))}</span>
                                        <span>{format!(
                                            "Crescimento {}",
                                            format_percent(entry.metrics.growth_factor),
                                        )}</span>
                                    </div>
                                    <textarea
                                        class="crm-card__note"
                                        placeholder="Próximos passos, contatos, follow-up..."
                                        prop:value=note
                                        on:change=move |ev| {
                                            state.save_note(&client_id, event_target_value(&ev));
                                        }
                                    ></textarea>
                                </div>
                            }
                        }
                    />
                </div>
            </section>
        </div>
    }
}
