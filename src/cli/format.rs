//! Number formatting for the terminal dashboard.

/// `R$ 12.34`; a missing mean renders as zero.
pub fn format_brl(value: Option<f64>) -> String {
    format!("R$ {:.2}", value.unwrap_or(0.0))
}

/// `4.1 / 5.0`
pub fn format_rating(value: Option<f64>) -> String {
    format!("{:.1} / 5.0", value.unwrap_or(0.0))
}

/// Integer with `.` as the thousands separator (`1.234.567`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_currency_and_rating() {
        assert_eq!(format_brl(Some(33.249)), "R$ 33.25");
        assert_eq!(format_brl(None), "R$ 0.00");
        assert_eq!(format_rating(Some(4.16)), "4.2 / 5.0");
        assert_eq!(format_rating(None), "0.0 / 5.0");
    }

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1.000");
        assert_eq!(format_thousands(1_234_567), "1.234.567");
    }
}
