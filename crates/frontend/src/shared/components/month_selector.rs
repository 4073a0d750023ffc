use contracts::domain::a001_sales_ledger::aggregate::Month;
use leptos::prelude::*;

/// Selector over the twelve fixed months of the tracked year.
#[component]
pub fn MonthSelector(
    /// Currently selected month
    #[prop(into)]
    selected: RwSignal<Month>,
) -> impl IntoView {
    view! {
        <div class="month-selector">
            {Month::ALL
                .into_iter()
                .map(|month| {
                    let is_active = move || selected.get() == month;
                    view! {
                        <button
                            class=move || {
                                if is_active() {
                                    "month-selector__item month-selector__item--active"
                                } else {
                                    "month-selector__item"
                                }
                            }
                            on:click=move |_| selected.set(month)
                        >
                            {month.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
