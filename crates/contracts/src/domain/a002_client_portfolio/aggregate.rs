//! Client portfolio data model: the fixed twenty-client registry with its
//! 2021–2025 revenue history, and the user-editable 2026–2030 projection
//! ledger.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse year → revenue mapping. Missing years read as zero.
pub type YearMap = BTreeMap<u16, f64>;

/// The single accessor for sparse year lookups, so "missing" and "zero"
/// are never conflated by ad hoc fallbacks.
pub fn value_or_zero(map: &YearMap, year: u16) -> f64 {
    map.get(&year).copied().unwrap_or(0.0)
}

pub const HISTORY_YEARS: [u16; 5] = [2021, 2022, 2023, 2024, 2025];
pub const PROJECTION_YEARS: [u16; 5] = [2026, 2027, 2028, 2029, 2030];

/// Latest recorded year. Everything up to and including it is history,
/// everything after is projection; no year is both.
pub const CURRENT_YEAR: u16 = 2025;

/// One key client: identity plus recorded revenue per historical year.
/// Immutable reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub history: YearMap,
}

fn profile(id: &str, name: &str, sector: &str, history: &[(u16, f64)]) -> ClientProfile {
    ClientProfile {
        id: id.to_string(),
        name: name.to_string(),
        sector: sector.to_string(),
        history: history.iter().copied().collect(),
    }
}

/// The fixed roster of twenty key clients (zero years omitted; sparse
/// lookups default them back to zero).
pub static TOP_CLIENTS: Lazy<Vec<ClientProfile>> = Lazy::new(|| {
    vec![
        profile(
            "1",
            "MACCAFERRI DO BRASIL LTDA",
            "Infraestrutura",
            &[
                (2021, 284_869.48),
                (2022, 50_161.64),
                (2023, 104_303.31),
                (2024, 135_998.77),
                (2025, 57_016.57),
            ],
        ),
        profile(
            "2",
            "FERTIPAR BANDEIRANTES LTDA",
            "Agronegócio",
            &[
                (2021, 62_158.43),
                (2022, 99_953.25),
                (2023, 529_550.73),
                (2024, 669_462.42),
                (2025, 825_707.65),
            ],
        ),
        profile(
            "3",
            "PLASTEK DO BRASIL IND E COM LTDA",
            "Indústria Plástica",
            &[
                (2021, 143_580.96),
                (2022, 126_538.62),
                (2023, 52_269.78),
                (2024, 16_275.25),
                (2025, 18_309.26),
            ],
        ),
        profile(
            "4",
            "TEX EQUIPAMENTOS ELETRONICOS",
            "Eletrônicos",
            &[
                (2021, 82_418.85),
                (2022, 77_266.88),
                (2023, 105_537.46),
                (2024, 121_464.41),
                (2025, 123_748.48),
            ],
        ),
        profile(
            "5",
            "CONFIBRA INDUSTRIA E COMERCIO",
            "Construção Civil",
            &[
                (2021, 75_438.37),
                (2022, 120_144.89),
                (2023, 64_626.48),
                (2024, 45_824.28),
                (2025, 46_212.30),
            ],
        ),
        profile(
            "6",
            "AJINOMOTO DO BRASIL LTDA",
            "Alimentício",
            &[
                (2021, 75_186.64),
                (2022, 19_467.50),
                (2023, 53_603.91),
                (2024, 55_354.56),
                (2025, 44_257.40),
            ],
        ),
        profile(
            "7",
            "AQUAGEL REFRIGERACAO LTDA",
            "Refrigeração",
            &[
                (2022, 68_222.40),
                (2023, 108_894.90),
                (2024, 83_043.66),
                (2025, 74_082.82),
            ],
        ),
        profile(
            "8",
            "IGARATIBA IND E COM LTDA",
            "Indústria Geral",
            &[
                (2021, 47_469.35),
                (2022, 38_007.22),
                (2023, 51_410.31),
                (2024, 55_703.10),
                (2025, 27_566.24),
            ],
        ),
        profile(
            "9",
            "CJ DO BRASIL LTDA",
            "Alimentício",
            &[
                (2021, 64_585.35),
                (2022, 98_068.89),
                (2024, 200_000.00),
                (2025, 13_353.50),
            ],
        ),
        profile(
            "10",
            "CLARIOS ENERGY SOLUTIONS",
            "Energia",
            &[
                (2021, 28_570.46),
                (2022, 48_064.32),
                (2023, 49_474.53),
                (2025, 13_258.17),
            ],
        ),
        profile(
            "11",
            "ELEKEIROZ S/A",
            "Químico",
            &[
                (2021, 15_957.88),
                (2022, 45_817.58),
                (2023, 30_596.01),
                (2024, 25_631.10),
                (2025, 30_809.09),
            ],
        ),
        profile(
            "12",
            "GLOBAL FLEX INDUSTRIA LTDA",
            "Logística",
            &[(2024, 29_022.50), (2025, 71_597.55)],
        ),
        profile(
            "13",
            "USINA ACUCAREIRA ESTER SA",
            "Usinas/Açúcar",
            &[(2024, 36_961.79), (2025, 43_178.71)],
        ),
        profile(
            "14",
            "PAIS E FILHOS USINAGEM LTDA",
            "Metalurgia",
            &[(2022, 69_586.26), (2023, 51_720.59), (2024, 12_736.42)],
        ),
        profile(
            "15",
            "ITURRI COIMPAR INDUSTRIA",
            "EPIs/Segurança",
            &[(2021, 22_199.07), (2022, 71_398.24), (2023, 76_310.96)],
        ),
        profile("16", "SIKA S.A.", "Construção Civil", &[(2025, 44_211.86)]),
        profile(
            "17",
            "SANTHER FABRICA DE PAPEL",
            "Papel e Celulose",
            &[(2022, 19_057.02), (2025, 18_952.36)],
        ),
        profile(
            "18",
            "PLIMAX IND DE EMBALAGENS",
            "Indústria Plástica",
            &[(2021, 17_913.31), (2022, 19_704.67), (2024, 21_743.81)],
        ),
        profile("19", "EMS S/A", "Farmacêutico", &[(2025, 16_600.00)]),
        profile(
            "20",
            "SUDESTE AUTOMACAO EIRELI",
            "Automação",
            &[(2025, 15_682.18)],
        ),
    ]
});

/// User-entered projections per client, keyed by the client's stable id.
/// Starts empty; the serialized form matches the persisted blob:
/// `{"<id>": {"2026": n, ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectionLedger(pub BTreeMap<String, YearMap>);

impl ProjectionLedger {
    pub fn client(&self, id: &str) -> Option<&YearMap> {
        self.0.get(id)
    }

    /// Record one (client, year) projection cell.
    pub fn set(&mut self, id: &str, year: u16, amount: f64) {
        self.0.entry(id.to_string()).or_default().insert(year, amount);
    }

    pub fn value(&self, id: &str, year: u16) -> f64 {
        self.client(id).map_or(0.0, |years| value_or_zero(years, year))
    }
}
