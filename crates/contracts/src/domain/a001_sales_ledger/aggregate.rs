//! Sales ledger data model: the twelve fixed months, the four sellers and
//! their monthly goals. The target table and annual goal are immutable
//! reference data; only `SalesLedger` is mutated by user entry.

use serde::{Deserialize, Serialize};

/// Calendar month of the tracked year. Labels follow the pt-BR
/// abbreviations used across the product and inside persisted blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Fev,
    Mar,
    Abr,
    Mai,
    Jun,
    Jul,
    Ago,
    Set,
    Out,
    Nov,
    Dez,
}

impl Month {
    /// Canonical calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Fev,
        Month::Mar,
        Month::Abr,
        Month::Mai,
        Month::Jun,
        Month::Jul,
        Month::Ago,
        Month::Set,
        Month::Out,
        Month::Nov,
        Month::Dez,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Fev => "Fev",
            Month::Mar => "Mar",
            Month::Abr => "Abr",
            Month::Mai => "Mai",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Ago => "Ago",
            Month::Set => "Set",
            Month::Out => "Out",
            Month::Nov => "Nov",
            Month::Dez => "Dez",
        }
    }

    /// Zero-based position in calendar order, also the index into `TARGETS`.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// The four sellers, in canonical declaration order. The order is load
/// bearing: ties in best-performer ranking resolve to the earlier seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SellerId {
    Syllas,
    Vendedora1,
    Vendedora2,
    Vendedora3,
}

impl SellerId {
    pub const ALL: [SellerId; 4] = [
        SellerId::Syllas,
        SellerId::Vendedora1,
        SellerId::Vendedora2,
        SellerId::Vendedora3,
    ];

    /// Full label for form fields.
    pub fn label(&self) -> &'static str {
        match self {
            SellerId::Syllas => "Syllas (Dir.)",
            SellerId::Vendedora1 => "Vendedora 01",
            SellerId::Vendedora2 => "Vendedora 02",
            SellerId::Vendedora3 => "Vendedora 03",
        }
    }

    /// Short label for cards and chart legends.
    pub fn short_label(&self) -> &'static str {
        match self {
            SellerId::Syllas => "Syllas",
            SellerId::Vendedora1 => "Vend 01",
            SellerId::Vendedora2 => "Vend 02",
            SellerId::Vendedora3 => "Vend 03",
        }
    }
}

/// Revenue figures for one month, one named field per seller.
///
/// A fixed record rather than a map: the roster is part of the contract and
/// the compiler checks completeness wherever a month entry is built.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SellerRevenue {
    pub syllas: f64,
    pub vendedora1: f64,
    pub vendedora2: f64,
    pub vendedora3: f64,
}

impl SellerRevenue {
    pub const fn new(syllas: f64, vendedora1: f64, vendedora2: f64, vendedora3: f64) -> Self {
        Self {
            syllas,
            vendedora1,
            vendedora2,
            vendedora3,
        }
    }

    pub fn get(&self, seller: SellerId) -> f64 {
        match seller {
            SellerId::Syllas => self.syllas,
            SellerId::Vendedora1 => self.vendedora1,
            SellerId::Vendedora2 => self.vendedora2,
            SellerId::Vendedora3 => self.vendedora3,
        }
    }

    pub fn set(&mut self, seller: SellerId, amount: f64) {
        match seller {
            SellerId::Syllas => self.syllas = amount,
            SellerId::Vendedora1 => self.vendedora1 = amount,
            SellerId::Vendedora2 => self.vendedora2 = amount,
            SellerId::Vendedora3 => self.vendedora3 = amount,
        }
    }

    pub fn total(&self) -> f64 {
        self.syllas + self.vendedora1 + self.vendedora2 + self.vendedora3
    }
}

/// Actual revenue recorded per month. All twelve months are present by
/// construction; the serialized form is an object keyed by month name,
/// matching the persisted blob layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesLedger {
    #[serde(rename = "Jan")]
    pub jan: SellerRevenue,
    #[serde(rename = "Fev")]
    pub fev: SellerRevenue,
    #[serde(rename = "Mar")]
    pub mar: SellerRevenue,
    #[serde(rename = "Abr")]
    pub abr: SellerRevenue,
    #[serde(rename = "Mai")]
    pub mai: SellerRevenue,
    #[serde(rename = "Jun")]
    pub jun: SellerRevenue,
    #[serde(rename = "Jul")]
    pub jul: SellerRevenue,
    #[serde(rename = "Ago")]
    pub ago: SellerRevenue,
    #[serde(rename = "Set")]
    pub set: SellerRevenue,
    #[serde(rename = "Out")]
    pub out: SellerRevenue,
    #[serde(rename = "Nov")]
    pub nov: SellerRevenue,
    #[serde(rename = "Dez")]
    pub dez: SellerRevenue,
}

impl SalesLedger {
    pub fn entry(&self, month: Month) -> &SellerRevenue {
        match month {
            Month::Jan => &self.jan,
            Month::Fev => &self.fev,
            Month::Mar => &self.mar,
            Month::Abr => &self.abr,
            Month::Mai => &self.mai,
            Month::Jun => &self.jun,
            Month::Jul => &self.jul,
            Month::Ago => &self.ago,
            Month::Set => &self.set,
            Month::Out => &self.out,
            Month::Nov => &self.nov,
            Month::Dez => &self.dez,
        }
    }

    pub fn entry_mut(&mut self, month: Month) -> &mut SellerRevenue {
        match month {
            Month::Jan => &mut self.jan,
            Month::Fev => &mut self.fev,
            Month::Mar => &mut self.mar,
            Month::Abr => &mut self.abr,
            Month::Mai => &mut self.mai,
            Month::Jun => &mut self.jun,
            Month::Jul => &mut self.jul,
            Month::Ago => &mut self.ago,
            Month::Set => &mut self.set,
            Month::Out => &mut self.out,
            Month::Nov => &mut self.nov,
            Month::Dez => &mut self.dez,
        }
    }
}

/// Per-seller monthly goals, indexed by `Month::index`. Defined once for
/// the fiscal year.
pub const TARGETS: [SellerRevenue; 12] = [
    SellerRevenue::new(118_500.0, 24_000.0, 0.0, 0.0),
    SellerRevenue::new(138_000.0, 28_000.0, 26_000.0, 0.0),
    SellerRevenue::new(100_000.0, 42_000.0, 26_000.0, 0.0),
    SellerRevenue::new(98_000.0, 43_000.0, 27_000.0, 0.0),
    SellerRevenue::new(94_000.0, 44_000.0, 27_000.0, 0.0),
    SellerRevenue::new(89_000.0, 44_000.0, 27_000.0, 0.0),
    SellerRevenue::new(103_000.0, 42_000.0, 42_000.0, 0.0),
    SellerRevenue::new(116_000.0, 40_000.0, 40_000.0, 0.0),
    SellerRevenue::new(128_000.0, 39_000.0, 39_000.0, 0.0),
    SellerRevenue::new(136_000.0, 38_000.0, 38_000.0, 0.0),
    SellerRevenue::new(144_000.0, 37_000.0, 37_000.0, 0.0),
    SellerRevenue::new(125_000.0, 40_000.0, 40_000.0, 0.0),
];

/// Fixed annual goal. Configured on its own, not derived from `TARGETS`;
/// the per-seller table sums to a higher, more ambitious figure.
pub const ANNUAL_GOAL: f64 = 2_180_000.0;

/// Calendar quarter. The four quarters partition the twelve months in
/// calendar order, three consecutive months each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    pub fn months(&self) -> [Month; 3] {
        match self {
            Quarter::Q1 => [Month::Jan, Month::Fev, Month::Mar],
            Quarter::Q2 => [Month::Abr, Month::Mai, Month::Jun],
            Quarter::Q3 => [Month::Jul, Month::Ago, Month::Set],
            Quarter::Q4 => [Month::Out, Month::Nov, Month::Dez],
        }
    }

    pub fn containing(month: Month) -> Quarter {
        Quarter::ALL[month.index() / 3]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_goal_is_configured_independently_of_targets() {
        let table_sum: f64 = TARGETS.iter().map(|t| t.total()).sum();
        assert_eq!(table_sum, 2_219_500.0);
        assert_eq!(ANNUAL_GOAL, 2_180_000.0);
        assert!(table_sum > ANNUAL_GOAL);
    }

    #[test]
    fn test_quarters_partition_the_year() {
        let mut seen = Vec::new();
        for quarter in Quarter::ALL {
            for month in quarter.months() {
                assert!(!seen.contains(&month), "{:?} in two quarters", month);
                assert_eq!(Quarter::containing(month), quarter);
                seen.push(month);
            }
        }
        assert_eq!(seen, Month::ALL.to_vec());
    }

    #[test]
    fn test_ledger_serde_round_trip_is_lossless() {
        let mut ledger = SalesLedger::default();
        for (i, month) in Month::ALL.into_iter().enumerate() {
            for (j, seller) in SellerId::ALL.into_iter().enumerate() {
                ledger
                    .entry_mut(month)
                    .set(seller, (i * 4 + j) as f64 * 1_234.56);
            }
        }

        let blob = serde_json::to_string(&ledger).unwrap();
        let restored: SalesLedger = serde_json::from_str(&blob).unwrap();
        assert_eq!(restored, ledger);
        // Fractional amounts must restore bit-identically, not merely close.
        assert_eq!(
            restored.mar.vendedora1.to_bits(),
            ledger.mar.vendedora1.to_bits()
        );
    }

    #[test]
    fn test_ledger_blob_layout_matches_persisted_format() {
        let blob = serde_json::to_value(SalesLedger::default()).unwrap();
        let object = blob.as_object().unwrap();
        assert_eq!(object.len(), 12);
        for month in Month::ALL {
            let entry = object
                .get(month.label())
                .unwrap_or_else(|| panic!("missing month key {}", month.label()));
            let fields = entry.as_object().unwrap();
            assert_eq!(fields.len(), 4);
            for key in ["syllas", "vendedora1", "vendedora2", "vendedora3"] {
                assert_eq!(fields.get(key).and_then(|v| v.as_f64()), Some(0.0));
            }
        }
    }

    #[test]
    fn test_partial_blob_loads_with_zero_defaults() {
        let ledger: SalesLedger =
            serde_json::from_str(r#"{"Jan": {"syllas": 500.0}}"#).unwrap();
        assert_eq!(ledger.jan.syllas, 500.0);
        assert_eq!(ledger.jan.vendedora2, 0.0);
        assert_eq!(ledger.dez, SellerRevenue::default());
    }
}
