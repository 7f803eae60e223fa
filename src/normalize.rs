//! Numeric normalization of raw price strings.

/// Parse a primary-source price string like `"$5,179.00"` or `"67,616.72"`
/// into a float.
///
/// Strips every character that is not an ASCII digit or a decimal point
/// before parsing, so currency symbols and thousands separators in any
/// position are tolerated. Absent or digit-free input yields `None`.
pub fn parse_price(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}
