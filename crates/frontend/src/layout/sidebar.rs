//! Left control panel: month selection plus the four revenue entry
//! fields. Typing into a field writes straight through the store.

use crate::shared::components::month_selector::MonthSelector;
use crate::shared::components::number_format::parse_brl;
use crate::shared::state::use_app_state;
use contracts::domain::a001_sales_ledger::aggregate::SellerId;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_app_state();
    let entry_open = RwSignal::new(true);

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__brand-mark">"SKG"</span>
                <span class="sidebar__brand-name">"BI Corporativo"</span>
            </div>

            <div class="sidebar__section">
                <h3 class="sidebar__section-title">"Mês de Lançamento"</h3>
                <MonthSelector selected=state.selected_month />
            </div>

            <div class="sidebar__section">
                <button
                    class="sidebar__section-toggle"
                    on:click=move |_| entry_open.update(|open| *open = !*open)
                >
                    <span class="sidebar__section-title">"Faturamento do Mês"</span>
                    <span class="sidebar__section-chevron">
                        {move || if entry_open.get() { "▾" } else { "▸" }}
                    </span>
                </button>
                <div
                    class="sidebar__entry"
                    class=("sidebar__entry--collapsed", move || !entry_open.get())
                >
                {SellerId::ALL
                    .into_iter()
                    .map(|seller| {
                        let current = move || {
                            let amount = state
                                .sales
                                .with(|ledger| {
                                    ledger.entry(state.selected_month.get()).get(seller)
                                });
                            if amount == 0.0 { String::new() } else { format!("{amount}") }
                        };
                        view! {
                            <label class="sidebar__field">
                                <span class="sidebar__field-label">{seller.label()}</span>
                                <input
                                    class="sidebar__field-input"
                                    type="text"
                                    inputmode="decimal"
                                    placeholder="R$ 0"
                                    prop:value=current
                                    on:input=move |ev| {
                                        state
                                            .record_sale(
                                                seller,
                                                parse_brl(&event_target_value(&ev)),
                                            );
                                    }
                                />
                            </label>
                        }
                    })
                    .collect_view()}
                </div>
            </div>
        </aside>
    }
}
