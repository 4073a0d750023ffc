//! Client-lifecycle classification and portfolio ranking. Pure functions
//! of one profile plus its (possibly absent) projection entry, so editing
//! one client's projections can never change another client's metrics.

use super::aggregate::{
    value_or_zero, ClientProfile, ProjectionLedger, YearMap, CURRENT_YEAR, HISTORY_YEARS,
    PROJECTION_YEARS,
};
use std::cmp::Ordering;

/// Growth factor reported when a client has no historical baseline to
/// compare against. A neutral signal, not a measurement; keep it a named
/// constant.
pub const GROWTH_FACTOR_NEUTRAL: f64 = 50.0;

/// An active client earning less than this share of its own peak year is
/// considered at risk.
pub const AT_RISK_PEAK_RATIO: f64 = 0.4;

/// Three-way health classification of a client's recent revenue trend
/// relative to its own history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    AtRisk,
    Churned,
}

impl HealthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Saudável",
            HealthStatus::AtRisk => "Risco",
            HealthStatus::Churned => "Churn",
        }
    }
}

/// Metrics derived on demand from one profile plus its projections.
/// Never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientMetrics {
    pub total_history: f64,
    pub total_projected: f64,
    pub estimated_ltv: f64,
    pub peak_revenue: f64,
    pub current_revenue: f64,
    pub health: HealthStatus,
    pub growth_factor: f64,
}

/// Derive the full metric set for one client. `projection` is that
/// client's sparse projection entry; absent means all-zero.
pub fn derive_metrics(client: &ClientProfile, projection: Option<&YearMap>) -> ClientMetrics {
    static EMPTY: YearMap = YearMap::new();
    let projection = projection.unwrap_or(&EMPTY);

    let total_history: f64 = HISTORY_YEARS
        .into_iter()
        .map(|year| value_or_zero(&client.history, year))
        .sum();
    let total_projected: f64 = PROJECTION_YEARS
        .into_iter()
        .map(|year| value_or_zero(projection, year))
        .sum();

    let peak_revenue = HISTORY_YEARS
        .into_iter()
        .map(|year| value_or_zero(&client.history, year))
        .chain(
            PROJECTION_YEARS
                .into_iter()
                .map(|year| value_or_zero(projection, year)),
        )
        .fold(0.0_f64, f64::max);

    let current_revenue = value_or_zero(&client.history, CURRENT_YEAR);

    // Priority order matters: churn is checked before the at-risk band.
    let recently_active = value_or_zero(&client.history, 2023) > 0.0
        || value_or_zero(&client.history, 2024) > 0.0;
    let health = if current_revenue == 0.0 && recently_active {
        HealthStatus::Churned
    } else if current_revenue > 0.0 && current_revenue < peak_revenue * AT_RISK_PEAK_RATIO {
        HealthStatus::AtRisk
    } else {
        HealthStatus::Healthy
    };

    let growth_factor = if total_history > 0.0 {
        total_projected / total_history * 100.0
    } else {
        GROWTH_FACTOR_NEUTRAL
    };

    ClientMetrics {
        total_history,
        total_projected,
        estimated_ltv: total_history + total_projected,
        peak_revenue,
        current_revenue,
        health,
        growth_factor,
    }
}

/// One ranked portfolio row: the profile together with its derived
/// metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioEntry {
    pub client: ClientProfile,
    pub metrics: ClientMetrics,
}

/// All clients with metrics attached, sorted descending by estimated LTV.
/// The sort is stable, so equal LTVs keep registry order.
pub fn ranked_portfolio(
    registry: &[ClientProfile],
    projections: &ProjectionLedger,
) -> Vec<PortfolioEntry> {
    let mut entries: Vec<PortfolioEntry> = registry
        .iter()
        .map(|client| PortfolioEntry {
            metrics: derive_metrics(client, projections.client(&client.id)),
            client: client.clone(),
        })
        .collect();
    entries.sort_by(|a, b| {
        b.metrics
            .estimated_ltv
            .partial_cmp(&a.metrics.estimated_ltv)
            .unwrap_or(Ordering::Equal)
    });
    entries
}

/// Case-insensitive substring filter over client name and sector.
/// Empty query returns the input unchanged; relative order is preserved.
pub fn filter_portfolio(entries: &[PortfolioEntry], query: &str) -> Vec<PortfolioEntry> {
    if query.is_empty() {
        return entries.to_vec();
    }
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.client.name.to_lowercase().contains(&needle)
                || entry.client.sector.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Portfolio-wide revenue for one year: historical lookup up to
/// `CURRENT_YEAR`, projection lookup after it.
pub fn yearly_portfolio_total(
    registry: &[ClientProfile],
    projections: &ProjectionLedger,
    year: u16,
) -> f64 {
    registry
        .iter()
        .map(|client| {
            if year <= CURRENT_YEAR {
                value_or_zero(&client.history, year)
            } else {
                projections.value(&client.id, year)
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: &str, history: &[(u16, f64)]) -> ClientProfile {
        ClientProfile {
            id: id.to_string(),
            name: format!("CLIENTE {id}"),
            sector: "Setor".to_string(),
            history: history.iter().copied().collect(),
        }
    }

    #[test]
    fn test_churned_when_recent_revenue_then_silence() {
        let c = client("a", &[(2023, 100.0)]);
        let m = derive_metrics(&c, None);
        assert_eq!(m.health, HealthStatus::Churned);
        assert_eq!(m.current_revenue, 0.0);
    }

    #[test]
    fn test_at_risk_below_forty_percent_of_peak() {
        let c = client("a", &[(2022, 100.0), (2025, 30.0)]);
        let m = derive_metrics(&c, None);
        assert_eq!(m.peak_revenue, 100.0);
        assert_eq!(m.health, HealthStatus::AtRisk);

        // Exactly at the band edge is not at risk.
        let c = client("b", &[(2022, 100.0), (2025, 40.0)]);
        assert_eq!(derive_metrics(&c, None).health, HealthStatus::Healthy);
    }

    #[test]
    fn test_all_zero_client_is_healthy_with_neutral_growth() {
        let c = client("a", &[]);
        let m = derive_metrics(&c, None);
        assert_eq!(m.health, HealthStatus::Healthy);
        assert_eq!(m.estimated_ltv, 0.0);
        assert_eq!(m.peak_revenue, 0.0);
        assert_eq!(m.growth_factor, GROWTH_FACTOR_NEUTRAL);
    }

    #[test]
    fn test_ltv_and_growth_combine_history_and_projection() {
        let c = client("a", &[(2021, 400.0), (2025, 600.0)]);
        let projection: YearMap = [(2026, 1_500.0), (2030, 500.0)].into_iter().collect();
        let m = derive_metrics(&c, Some(&projection));
        assert_eq!(m.total_history, 1_000.0);
        assert_eq!(m.total_projected, 2_000.0);
        assert_eq!(m.estimated_ltv, 3_000.0);
        assert_eq!(m.peak_revenue, 1_500.0);
        assert_eq!(m.growth_factor, 200.0);
    }

    #[test]
    fn test_projection_edit_does_not_touch_other_clients() {
        let registry = vec![client("a", &[(2025, 50.0)]), client("b", &[(2025, 80.0)])];
        let before = ranked_portfolio(&registry, &ProjectionLedger::default());
        let metrics_a_before = before
            .iter()
            .find(|e| e.client.id == "a")
            .unwrap()
            .metrics;

        let mut projections = ProjectionLedger::default();
        projections.set("b", 2027, 9_999.0);
        let after = ranked_portfolio(&registry, &projections);
        let metrics_a_after = after.iter().find(|e| e.client.id == "a").unwrap().metrics;

        assert_eq!(metrics_a_before, metrics_a_after);
    }

    #[test]
    fn test_ranking_descends_with_stable_ties() {
        let registry = vec![
            client("low", &[(2021, 10.0)]),
            client("tie1", &[(2021, 500.0)]),
            client("high", &[(2021, 900.0)]),
            client("tie2", &[(2022, 500.0)]),
        ];
        let ranked = ranked_portfolio(&registry, &ProjectionLedger::default());
        let order: Vec<&str> = ranked.iter().map(|e| e.client.id.as_str()).collect();
        assert_eq!(order, vec!["high", "tie1", "tie2", "low"]);
        for pair in ranked.windows(2) {
            assert!(pair[0].metrics.estimated_ltv >= pair[1].metrics.estimated_ltv);
        }
    }

    #[test]
    fn test_empty_filter_is_identity_and_filtering_is_idempotent() {
        let registry = vec![
            client("a", &[(2021, 10.0)]),
            client("b", &[(2021, 20.0)]),
        ];
        let ranked = ranked_portfolio(&registry, &ProjectionLedger::default());
        assert_eq!(filter_portfolio(&ranked, ""), ranked);

        let once = filter_portfolio(&ranked, "cliente b");
        let twice = filter_portfolio(&once, "cliente b");
        assert_eq!(once, twice);
        assert_eq!(once.len(), 1);
        assert_eq!(once[0].client.id, "b");
    }

    #[test]
    fn test_filter_matches_sector_case_insensitively() {
        let mut registry = vec![client("a", &[])];
        registry[0].sector = "Agronegócio".to_string();
        let ranked = ranked_portfolio(&registry, &ProjectionLedger::default());
        assert_eq!(filter_portfolio(&ranked, "AGRO").len(), 1);
        assert_eq!(filter_portfolio(&ranked, "metal").len(), 0);
    }

    #[test]
    fn test_yearly_total_switches_source_at_the_boundary() {
        let registry = vec![client("a", &[(2025, 100.0)]), client("b", &[(2024, 40.0)])];
        let mut projections = ProjectionLedger::default();
        projections.set("a", 2026, 70.0);
        // Projections never leak into historical years, even if present.
        projections.set("a", 2025, 9_999.0);

        assert_eq!(yearly_portfolio_total(&registry, &projections, 2025), 100.0);
        assert_eq!(yearly_portfolio_total(&registry, &projections, 2026), 70.0);
        assert_eq!(yearly_portfolio_total(&registry, &projections, 2024), 40.0);
        assert_eq!(yearly_portfolio_total(&registry, &projections, 2029), 0.0);
    }
}
