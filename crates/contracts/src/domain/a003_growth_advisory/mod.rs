//! Growth-advisory contract: performance status, the snapshot handed to
//! the external text-generation service and the prompt built from it.
//! Everything here is pure; the HTTP transport lives in the frontend.

use crate::domain::a001_sales_ledger::aggregate::Month;
use crate::domain::a002_client_portfolio::aggregate::{value_or_zero, ClientProfile, CURRENT_YEAR};
use crate::shared::format::group_thousands;
use thiserror::Error;

/// Operating status derived from monthly goal attainment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceStatus {
    Alerta,
    Estabilidade,
    Oportunidade,
}

impl PerformanceStatus {
    /// Under 80% is an alert, 100% and above an opportunity, anything in
    /// between is stable.
    pub fn from_attainment(percent: f64) -> Self {
        if percent < 80.0 {
            PerformanceStatus::Alerta
        } else if percent >= 100.0 {
            PerformanceStatus::Oportunidade
        } else {
            PerformanceStatus::Estabilidade
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceStatus::Alerta => "ALERTA",
            PerformanceStatus::Estabilidade => "ESTABILIDADE",
            PerformanceStatus::Oportunidade => "OPORTUNIDADE",
        }
    }
}

/// Snapshot of derived values supplied to the advisory call. The service
/// never reads ledger state; it only sees this.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorySnapshot {
    pub month: Month,
    pub revenue: f64,
    pub target: f64,
    pub attainment: f64,
    pub status: PerformanceStatus,
    pub quarter_attainment: f64,
    /// Up to three retention opportunities, by client name.
    pub inactive_clients: Vec<String>,
}

/// Clients with no revenue in the latest recorded year, fed into the
/// prompt as retention opportunities. First three in registry order.
pub fn inactive_clients(registry: &[ClientProfile]) -> Vec<String> {
    registry
        .iter()
        .filter(|client| value_or_zero(&client.history, CURRENT_YEAR) == 0.0)
        .take(3)
        .map(|client| client.name.clone())
        .collect()
}

/// Build the consultancy prompt sent to the generation service.
pub fn build_prompt(snapshot: &AdvisorySnapshot) -> String {
    format!(
        "Atue como o CCO (Chief Growth Officer) da V4 Company em consultoria exclusiva \
         para a SK-G Automação. Utilize a metodologia V4 (Tráfego, Engajamento, Conversão \
         e Retenção).\n\n\
         CONTEXTO ATUAL ({month}):\n\
         - Faturamento Real: R$ {revenue}\n\
         - Atingimento: {attainment:.1}% (Status: {status})\n\
         - Quarter Trend: {quarter:.1}%\n\
         - Clientes Inativos (Oportunidade de Retenção): {inactive}\n\n\
         TAREFAS OBRIGATÓRIAS NA RESPOSTA (Formato Markdown Rico):\n\n\
         1. INTELIGÊNCIA MACROECONÔMICA: Analise como a Taxa Selic e o IPCA atual \
         impactam a decisão de compra de automação industrial hoje.\n\
         2. CALENDÁRIO EDITORIAL SEMANAL (LINKEDIN): Sugira temas de posts para 4 semanas.\n\
         3. MOTOR DE E-MAIL MARKETING: Rascunho para reativação de clientes.\n\
         4. ORQUESTRADOR DE ADS: Onde alocar verba extra esta semana.\n\n\
         Mantenha o tom profissional, direto e focado em execução.",
        month = snapshot.month.label(),
        revenue = group_thousands(snapshot.revenue.round() as i64),
        attainment = snapshot.attainment,
        status = snapshot.status.label(),
        quarter = snapshot.quarter_attainment,
        inactive = snapshot.inactive_clients.join(", "),
    )
}

/// Failure modes of the advisory call. All of them degrade to a fixed
/// display string; none may cross into ledger state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisoryError {
    #[error("API key not configured")]
    MissingApiKey,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP status {0}")]
    Http(u16),
    #[error("empty response from the generation service")]
    EmptyResponse,
}

/// Shown in place of the narrative panel whenever the call fails.
pub const FALLBACK_TEXT: &str = "Houve um erro ao conectar com o motor de inteligência \
industrial. Verifique a chave de API ou tente novamente.";

/// Shown when no API key was configured at build time.
pub const MISSING_KEY_TEXT: &str = "Configuração pendente: API_KEY não encontrada.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_client_portfolio::aggregate::TOP_CLIENTS;

    #[test]
    fn test_status_thresholds() {
        assert_eq!(
            PerformanceStatus::from_attainment(79.9),
            PerformanceStatus::Alerta
        );
        assert_eq!(
            PerformanceStatus::from_attainment(80.0),
            PerformanceStatus::Estabilidade
        );
        assert_eq!(
            PerformanceStatus::from_attainment(99.9),
            PerformanceStatus::Estabilidade
        );
        assert_eq!(
            PerformanceStatus::from_attainment(100.0),
            PerformanceStatus::Oportunidade
        );
    }

    #[test]
    fn test_inactive_clients_from_registry() {
        // Three roster clients have no 2025 revenue, in registry order.
        let names = inactive_clients(&TOP_CLIENTS);
        assert_eq!(
            names,
            vec![
                "PAIS E FILHOS USINAGEM LTDA".to_string(),
                "ITURRI COIMPAR INDUSTRIA".to_string(),
                "PLIMAX IND DE EMBALAGENS".to_string(),
            ]
        );
    }

    #[test]
    fn test_prompt_carries_snapshot_values() {
        let snapshot = AdvisorySnapshot {
            month: Month::Jan,
            revenue: 120_000.0,
            target: 142_500.0,
            attainment: 84.21,
            status: PerformanceStatus::Estabilidade,
            quarter_attainment: 28.1,
            inactive_clients: vec!["EMPRESA A".to_string(), "EMPRESA B".to_string()],
        };
        let prompt = build_prompt(&snapshot);
        assert!(prompt.contains("CONTEXTO ATUAL (Jan)"));
        // Revenue carries pt-BR thousand grouping, not bare digits.
        assert!(prompt.contains("Faturamento Real: R$ 120.000"));
        assert!(prompt.contains("84.2% (Status: ESTABILIDADE)"));
        assert!(prompt.contains("Quarter Trend: 28.1%"));
        assert!(prompt.contains("EMPRESA A, EMPRESA B"));
    }

    #[test]
    fn test_error_display_is_human_readable() {
        assert_eq!(
            AdvisoryError::Http(503).to_string(),
            "HTTP status 503"
        );
        assert_eq!(
            AdvisoryError::Network("timeout".to_string()).to_string(),
            "network error: timeout"
        );
    }
}
