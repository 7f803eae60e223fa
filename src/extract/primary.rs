//! Primary-source (Google Finance) extraction.
//!
//! All queries are scoped to the `[data-last-price]` entity container,
//! which wraps only the main ticker's data. Unscoped queries against the
//! price/change class names match many elements on the page (related
//! tickers, market movers) and silently return the wrong ticker's value.
//!
//! The percent change is reconstructed from the change element's
//! aria-label ("Up by 1.87%" / "Down by 2.3%") rather than its visible
//! text, which may omit the sign.

use super::FetchResult;
use crate::renderer::{RenderContext, RenderError};
use regex::Regex;

/// Returns `{ price, change_label }` scoped to the entity container.
/// The price node has two candidate class patterns across layout variants.
const QUOTE_SCRIPT: &str = r#"
(() => {
    const entity = document.querySelector('[data-last-price]');
    if (!entity) return { price: null, change_label: null };

    const priceEl = entity.querySelector('.YMlKec.fxKbKc') || entity.querySelector('.YMlKec');
    const price = priceEl ? priceEl.innerText.trim() : null;

    const changeEl = entity.querySelector('[jsname="Fe7oBc"]');
    const change_label = changeEl ? (changeEl.getAttribute('aria-label') || '') : null;

    return { price, change_label };
})()
"#;

/// Extract price and signed percent change from a loaded quote page.
///
/// A missing entity container or missing sub-elements yield absent fields;
/// only evaluation failure itself is an error.
pub async fn extract(ctx: &dyn RenderContext) -> Result<FetchResult, RenderError> {
    let value = ctx.evaluate(QUOTE_SCRIPT).await?;

    let raw_price = value["price"]
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);
    let raw_change = value["change_label"].as_str().and_then(signed_change);

    Ok(FetchResult {
        raw_price,
        raw_change,
    })
}

/// Reconstruct a signed percent-change string from an accessibility label.
///
/// `"Up by 1.87%"` becomes `"+1.87%"`, `"Down by 2.3%"` becomes `"-2.3%"`.
/// Labels matching neither pattern yield `None`.
pub fn signed_change(label: &str) -> Option<String> {
    let re = Regex::new(r"(?i)(Up|Down) by ([\d.]+)%").expect("change label regex is valid");
    let caps = re.captures(label)?;
    let sign = if caps[1].eq_ignore_ascii_case("up") {
        "+"
    } else {
        "-"
    };
    Some(format!("{sign}{}%", &caps[2]))
}
