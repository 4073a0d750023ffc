//! pt-BR currency and percentage formatting for cards, tables and chart
//! labels, plus the parser for user-typed currency input. The grouping
//! core lives in `contracts` so the prompt builder formats identically.

pub use contracts::shared::format::format_brl;

/// Abbreviated money for dense cells: "R$ 1,2M", "R$ 120k".
pub fn format_brl_abbr(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("R$ {:.1}M", value / 1_000_000.0).replace('.', ",")
    } else if value >= 1_000.0 {
        format!("R$ {:.0}k", value / 1_000.0)
    } else {
        format_brl(value)
    }
}

/// Percentage with one decimal: "84.2%".
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Parse user-typed currency text: thousand dots are dropped, a decimal
/// comma becomes a dot, anything unparsable coerces to 0 (never an
/// error).
pub fn parse_brl(raw: &str) -> f64 {
    let cleaned: String = raw
        .replace('.', "")
        .replace(',', ".")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl_abbr() {
        assert_eq!(format_brl_abbr(2_180_000.0), "R$ 2,2M");
        assert_eq!(format_brl_abbr(120_000.0), "R$ 120k");
        assert_eq!(format_brl_abbr(850.0), "R$ 850");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(84.21), "84.2%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn test_parse_brl() {
        assert_eq!(parse_brl("1.234,56"), 1234.56);
        assert_eq!(parse_brl("120000"), 120000.0);
        assert_eq!(parse_brl("R$ 5.000"), 5000.0);
        assert_eq!(parse_brl(""), 0.0);
        assert_eq!(parse_brl("abc"), 0.0);
    }
}
