/// Fixed rupee to real rate applied to every discounted price.
pub const INR_TO_BRL: f64 = 0.07;

/// Characters removed from a price cell before numeric coercion.
const STRIPPED_CHARS: [char; 3] = ['₹', '$', ','];

/// Parse a catalog price cell such as `"₹1,234.50"` or `"$50"`.
///
/// Currency symbols and thousands separators are stripped first. Anything
/// that still fails to parse (including blanks and `NaN`) becomes `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Discounted price converted with [`INR_TO_BRL`]; a missing price stays missing.
pub fn convert_price(discounted: Option<f64>) -> Option<f64> {
    discounted.map(|price| price * INR_TO_BRL)
}
