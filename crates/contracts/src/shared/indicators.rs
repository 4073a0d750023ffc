use serde::{Deserialize, Serialize};

/// Visual status of an indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

/// Status band for a goal-attainment percentage, shared by the KPI cards
/// and the performance badges in the annual report table.
pub fn attainment_status(percent: f64) -> IndicatorStatus {
    if percent >= 100.0 {
        IndicatorStatus::Good
    } else if percent >= 80.0 {
        IndicatorStatus::Warning
    } else {
        IndicatorStatus::Bad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attainment_bands() {
        assert_eq!(attainment_status(120.0), IndicatorStatus::Good);
        assert_eq!(attainment_status(100.0), IndicatorStatus::Good);
        assert_eq!(attainment_status(99.9), IndicatorStatus::Warning);
        assert_eq!(attainment_status(80.0), IndicatorStatus::Warning);
        assert_eq!(attainment_status(79.9), IndicatorStatus::Bad);
        assert_eq!(attainment_status(0.0), IndicatorStatus::Bad);
    }
}
