/// Parse a rating cell into a decimal; unparseable or blank values become 0.
///
/// Values are not clamped: a catalog with a `7.5` keeps it, mirroring how the
/// dashboard averages whatever the source reports.
pub fn parse_rating(raw: &str) -> f64 {
    parse_finite(raw.trim()).unwrap_or(0.0)
}

/// Parse a rating-count cell such as `"24,269"`.
///
/// Thousands separators are stripped first. Blank, unparseable and negative
/// counts become 0; fractional counts are rounded. Counts beyond `u64::MAX`
/// are clamped to it.
pub fn parse_rating_count(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    let digits = digits.trim();
    if let Ok(count) = digits.parse::<u64>() {
        return count;
    }
    match parse_finite(digits) {
        Some(v) if v >= u64::MAX as f64 => u64::MAX,
        Some(v) if v > 0.0 => v.round() as u64,
        _ => 0,
    }
}

/// Whether a raw cell would be replaced by the rating sentinel.
pub fn is_rating_coerced(raw: &str) -> bool {
    parse_finite(raw.trim()).is_none()
}

/// Whether a raw cell would be replaced by the rating-count sentinel.
pub fn is_rating_count_coerced(raw: &str) -> bool {
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    match parse_finite(digits.trim()) {
        Some(v) => v < 0.0,
        None => true,
    }
}

fn parse_finite(input: &str) -> Option<f64> {
    input.parse::<f64>().ok().filter(|v| v.is_finite())
}
