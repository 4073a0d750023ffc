use crate::dashboards::d400_sales_overview::ui::dashboard::SalesOverviewDashboard;
use crate::dashboards::d401_client_portfolio::ui::dashboard::ClientPortfolioDashboard;
use crate::dashboards::d402_growth_advisory::ui::dashboard::GrowthAdvisoryDashboard;
use crate::layout::header::Header;
use crate::layout::sidebar::Sidebar;
use crate::shared::state::{AppState, Tab};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::load();
    provide_context(state);

    view! {
        <div class="app-shell">
            <Sidebar />
            <div class="app-shell__main">
                <Header />
                <main class="app-shell__content">
                    {move || match state.active_tab.get() {
                        Tab::Dashboard => view! { <SalesOverviewDashboard /> }.into_any(),
                        Tab::Clients => view! { <ClientPortfolioDashboard /> }.into_any(),
                        Tab::Growth => view! { <GrowthAdvisoryDashboard /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
