//! Application-wide signal store, provided via context from `App`.
//!
//! The two ledgers are the only mutable state; every mutation writes
//! through to localStorage. Metric calls always receive explicit
//! snapshots taken from these signals; nothing in `contracts` reads
//! ambient state.

use crate::shared::storage;
use contracts::domain::a001_sales_ledger::aggregate::{Month, SalesLedger, SellerId};
use contracts::domain::a002_client_portfolio::aggregate::ProjectionLedger;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Main navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Clients,
    Growth,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Clients, Tab::Growth];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Painel Analítico",
            Tab::Clients => "T20 Clientes",
            Tab::Growth => "Consultoria V4",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub sales: RwSignal<SalesLedger>,
    pub projections: RwSignal<ProjectionLedger>,
    pub notes: RwSignal<BTreeMap<String, String>>,
    pub selected_month: RwSignal<Month>,
    pub active_tab: RwSignal<Tab>,
}

impl AppState {
    /// Restore persisted ledgers, or start from the empty defaults on
    /// first run.
    pub fn load() -> Self {
        Self {
            sales: RwSignal::new(storage::load_json(storage::SALES_KEY).unwrap_or_default()),
            projections: RwSignal::new(
                storage::load_json(storage::PROJECTIONS_KEY).unwrap_or_default(),
            ),
            notes: RwSignal::new(storage::load_json(storage::NOTES_KEY).unwrap_or_default()),
            selected_month: RwSignal::new(Month::Jan),
            active_tab: RwSignal::new(Tab::Dashboard),
        }
    }

    /// Record one seller's revenue for the currently selected month.
    pub fn record_sale(&self, seller: SellerId, amount: f64) {
        let month = self.selected_month.get_untracked();
        self.sales
            .update(|ledger| ledger.entry_mut(month).set(seller, amount));
        storage::save_json(storage::SALES_KEY, &self.sales.get_untracked());
    }

    /// Record one (client, year) projection cell.
    pub fn record_projection(&self, client_id: &str, year: u16, amount: f64) {
        self.projections
            .update(|ledger| ledger.set(client_id, year, amount));
        storage::save_json(storage::PROJECTIONS_KEY, &self.projections.get_untracked());
    }

    pub fn save_note(&self, client_id: &str, note: String) {
        self.notes
            .update(|notes| {
                notes.insert(client_id.to_string(), note);
            });
        storage::save_json(storage::NOTES_KEY, &self.notes.get_untracked());
    }
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState context not found")
}
