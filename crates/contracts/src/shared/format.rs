//! pt-BR number formatting shared by the prompt builder and the UI.

/// Whole-unit currency with dot thousand separators: "R$ 1.234.567".
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", group_thousands(value.round() as i64))
}

/// Dot-grouped integer digits: "1.234.567".
pub fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if n < 0 {
        grouped.push('-');
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(1_234_567.0), "R$ 1.234.567");
        assert_eq!(format_brl(0.0), "R$ 0");
        assert_eq!(format_brl(999.6), "R$ 1.000");
        assert_eq!(format_brl(-45_000.0), "R$ -45.000");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(120_000), "120.000");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(-1_000), "-1.000");
    }
}
