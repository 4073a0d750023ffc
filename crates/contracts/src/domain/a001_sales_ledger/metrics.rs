//! Pure aggregation over the sales ledger and target table: monthly and
//! quarterly attainment, annual totals, best performer. Every function is
//! total and deterministic; calling twice with the same ledger yields
//! bit-identical results.

use super::aggregate::{Month, Quarter, SalesLedger, SellerId, ANNUAL_GOAL, TARGETS};

/// Attainment percentage with the zero-target policy: with no goal set,
/// any revenue counts as 100% and no revenue as 0%, so a zero target is
/// neutral rather than undefined.
pub fn attainment_percent(actual: f64, target: f64) -> f64 {
    if target > 0.0 {
        actual / target * 100.0
    } else if actual > 0.0 {
        100.0
    } else {
        0.0
    }
}

/// Total revenue recorded for one month across all four sellers.
pub fn monthly_actual(ledger: &SalesLedger, month: Month) -> f64 {
    ledger.entry(month).total()
}

/// Total goal for one month across all four sellers.
pub fn monthly_target(month: Month) -> f64 {
    TARGETS[month.index()].total()
}

pub fn monthly_attainment(ledger: &SalesLedger, month: Month) -> f64 {
    attainment_percent(monthly_actual(ledger, month), monthly_target(month))
}

/// Revenue accumulated over the whole year.
pub fn annual_total(ledger: &SalesLedger) -> f64 {
    Month::ALL
        .into_iter()
        .map(|month| monthly_actual(ledger, month))
        .sum()
}

pub fn annual_goal_percent(ledger: &SalesLedger) -> f64 {
    annual_total(ledger) / ANNUAL_GOAL * 100.0
}

/// Target, actual and attainment sums for one quarter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterRollup {
    pub quarter: Quarter,
    pub target: f64,
    pub actual: f64,
    pub attainment: f64,
}

pub fn quarter_rollup(ledger: &SalesLedger, quarter: Quarter) -> QuarterRollup {
    let mut target = 0.0;
    let mut actual = 0.0;
    for month in quarter.months() {
        target += monthly_target(month);
        actual += monthly_actual(ledger, month);
    }
    QuarterRollup {
        quarter,
        target,
        actual,
        attainment: attainment_percent(actual, target),
    }
}

/// All four quarter rollups in calendar order.
pub fn quarter_rollups(ledger: &SalesLedger) -> [QuarterRollup; 4] {
    Quarter::ALL.map(|quarter| quarter_rollup(ledger, quarter))
}

/// The seller with the strictly highest revenue for the month, with their
/// amount. `None` when nobody has recorded positive revenue yet. Ties
/// resolve to the first seller in declaration order.
pub fn best_performer(ledger: &SalesLedger, month: Month) -> Option<(SellerId, f64)> {
    let entry = ledger.entry(month);
    let mut best = (SellerId::Syllas, entry.get(SellerId::Syllas));
    for seller in SellerId::ALL {
        let amount = entry.get(seller);
        if amount > best.1 {
            best = (seller, amount);
        }
    }
    (best.1 > 0.0).then_some(best)
}

/// One row of the month-by-month target/actual comparison fed to the
/// monthly chart and the annual report table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthComparison {
    pub month: Month,
    pub target: f64,
    pub actual: f64,
}

pub fn month_comparison(ledger: &SalesLedger) -> Vec<MonthComparison> {
    Month::ALL
        .into_iter()
        .map(|month| MonthComparison {
            month,
            target: monthly_target(month),
            actual: monthly_actual(ledger, month),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales_ledger::aggregate::SellerRevenue;

    fn ledger_with_jan(jan: SellerRevenue) -> SalesLedger {
        SalesLedger {
            jan,
            ..SalesLedger::default()
        }
    }

    #[test]
    fn test_zero_target_policy() {
        // No month has a zero total target in the real table, so check the
        // policy through the shared helper.
        assert_eq!(attainment_percent(10.0, 0.0), 100.0);
        assert_eq!(attainment_percent(0.0, 0.0), 0.0);
        assert_eq!(attainment_percent(50.0, 200.0), 25.0);
    }

    #[test]
    fn test_january_end_to_end() {
        let ledger = ledger_with_jan(SellerRevenue::new(100_000.0, 20_000.0, 0.0, 0.0));

        assert_eq!(monthly_actual(&ledger, Month::Jan), 120_000.0);
        assert_eq!(monthly_target(Month::Jan), 142_500.0);

        let attainment = monthly_attainment(&ledger, Month::Jan);
        assert!((attainment - 84.21).abs() < 0.01, "got {attainment}");

        let (seller, amount) = best_performer(&ledger, Month::Jan).unwrap();
        assert_eq!(seller, SellerId::Syllas);
        assert_eq!(amount, 100_000.0);
    }

    #[test]
    fn test_annual_total_sums_all_months() {
        let mut ledger = SalesLedger::default();
        for (i, month) in Month::ALL.into_iter().enumerate() {
            ledger.entry_mut(month).syllas = (i + 1) as f64 * 1_000.0;
            ledger.entry_mut(month).vendedora2 = 500.0;
        }

        let by_month: f64 = Month::ALL
            .into_iter()
            .map(|m| monthly_actual(&ledger, m))
            .sum();
        assert_eq!(annual_total(&ledger), by_month);
        assert_eq!(annual_total(&ledger), 78_000.0 + 12.0 * 500.0);
    }

    #[test]
    fn test_quarter_rollup_sums_its_three_months() {
        let mut ledger = SalesLedger::default();
        ledger.out.syllas = 10_000.0;
        ledger.nov.vendedora1 = 5_000.0;
        ledger.dez.vendedora3 = 2_500.0;

        let rollup = quarter_rollup(&ledger, Quarter::Q4);
        let expected_target: f64 = Quarter::Q4
            .months()
            .into_iter()
            .map(monthly_target)
            .sum();
        assert_eq!(rollup.target, expected_target);
        assert_eq!(rollup.actual, 17_500.0);
        assert_eq!(
            rollup.attainment,
            attainment_percent(17_500.0, expected_target)
        );

        // The four rollups together cover the full target table, which is
        // not the same number as the separately configured annual goal.
        let total_target: f64 = quarter_rollups(&ledger).iter().map(|r| r.target).sum();
        assert_eq!(total_target, 2_219_500.0);
        assert_ne!(total_target, ANNUAL_GOAL);
    }

    #[test]
    fn test_best_performer_none_when_all_zero() {
        let ledger = SalesLedger::default();
        assert_eq!(best_performer(&ledger, Month::Mai), None);
    }

    #[test]
    fn test_best_performer_tie_goes_to_declaration_order() {
        let ledger = ledger_with_jan(SellerRevenue::new(0.0, 7_000.0, 7_000.0, 1_000.0));
        let (seller, _) = best_performer(&ledger, Month::Jan).unwrap();
        assert_eq!(seller, SellerId::Vendedora1);
    }

    #[test]
    fn test_negative_inputs_propagate_arithmetically() {
        let ledger = ledger_with_jan(SellerRevenue::new(-1_000.0, 0.0, 0.0, 0.0));
        assert_eq!(monthly_actual(&ledger, Month::Jan), -1_000.0);
        assert!(monthly_attainment(&ledger, Month::Jan) < 0.0);
        // A negative month never produces a best performer.
        assert_eq!(best_performer(&ledger, Month::Jan), None);
    }

    #[test]
    fn test_month_comparison_has_twelve_rows_in_order() {
        let rows = month_comparison(&SalesLedger::default());
        assert_eq!(rows.len(), 12);
        let months: Vec<Month> = rows.iter().map(|r| r.month).collect();
        assert_eq!(months, Month::ALL.to_vec());
        assert_eq!(rows[0].target, 142_500.0);
    }
}
