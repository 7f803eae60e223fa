//! Reference-source (Kitco) spot price extraction.
//!
//! The spot price lives in an `<h3>` whose text is a bare number like
//! `"5,165.70"`. The scan takes the FIRST heading in document order that
//! matches the bare-number pattern — a deliberate simplification tied to
//! the page's known layout, not a robustness guarantee.

use crate::renderer::{RenderContext, RenderError};
use regex::Regex;

/// Returns every `<h3>` text on the page, in document order.
const HEADINGS_SCRIPT: &str = r#"
(() => Array.from(document.querySelectorAll('h3')).map(h => h.innerText.trim()))()
"#;

/// Extract the spot price from a loaded reference page.
pub async fn extract(ctx: &dyn RenderContext) -> Result<Option<f64>, RenderError> {
    let value = ctx.evaluate(HEADINGS_SCRIPT).await?;

    let headings: Vec<String> = match value.as_array() {
        Some(arr) => arr
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect(),
        None => return Ok(None),
    };

    Ok(first_spot_heading(&headings))
}

/// Pick the first heading whose trimmed text is a bare decimal with
/// optional thousands separators (`^[\d,]+\.[\d]+$`) and parse it.
///
/// Headings with currency symbols or extra words are skipped.
pub fn first_spot_heading<S: AsRef<str>>(headings: &[S]) -> Option<f64> {
    let re = Regex::new(r"^[\d,]+\.[\d]+$").expect("spot heading regex is valid");
    headings
        .iter()
        .map(|h| h.as_ref().trim())
        .find(|text| re.is_match(text))
        .and_then(|text| text.replace(',', "").parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_bare_number_in_document_order() {
        let headings = ["Gold Price Today", "5,165.70", "5,200.00"];
        assert_eq!(first_spot_heading(&headings), Some(5165.70));
    }

    #[test]
    fn skips_headings_with_currency_symbols_or_words() {
        let headings = ["$5,165.70", "5,165.70 USD", "52-week high", "48.25"];
        assert_eq!(first_spot_heading(&headings), Some(48.25));
    }

    #[test]
    fn requires_a_decimal_part() {
        let headings = ["5,165", "Gold"];
        assert_eq!(first_spot_heading(&headings), None);
    }

    #[test]
    fn no_match_yields_absent() {
        let headings: [&str; 2] = ["Charts", "Market News"];
        assert_eq!(first_spot_heading(&headings), None);
    }
}
