//! Final report assembly and formatting.

use crate::extract::FetchResult;
use crate::validate::ValidationOutcome;

/// Banner printed before the per-asset lines.
pub const BANNER: &str = "💰 Live Prices:";

/// Cross-reference data for one asset, present only when a reference
/// source is configured for it.
#[derive(Debug, Clone)]
pub struct ReferenceCheck {
    pub price: Option<f64>,
    pub outcome: ValidationOutcome,
}

/// One report line's worth of data.
#[derive(Debug, Clone)]
pub struct AssetReport {
    pub emoji: String,
    pub name: String,
    pub fetch: FetchResult,
    pub reference: Option<ReferenceCheck>,
}

/// The full per-run report, in tracked-item declaration order.
#[derive(Debug, Clone, Default)]
pub struct PriceReport {
    pub assets: Vec<AssetReport>,
}

impl PriceReport {
    /// Render the banner plus one line per asset.
    pub fn render(&self) -> String {
        let mut out = String::from(BANNER);
        for asset in &self.assets {
            out.push('\n');
            out.push_str(&render_line(asset));
        }
        out
    }
}

/// Render a single asset line.
///
/// Assets without a reference source get `<emoji> <name>: <price> (<change>)`;
/// assets with one get a `| Reference:` suffix whose status glyph appears
/// only when both sides of the comparison were available.
pub fn render_line(asset: &AssetReport) -> String {
    let price = asset.fetch.raw_price.as_deref().unwrap_or("N/A");
    let change = match &asset.fetch.raw_change {
        Some(c) => format!("({c})"),
        None => "(change N/A)".to_string(),
    };

    let mut line = format!("{} {}: {} {}", asset.emoji, asset.name, price, change);

    if let Some(check) = &asset.reference {
        let reference = check
            .price
            .map(format_usd)
            .unwrap_or_else(|| "N/A".to_string());
        match check.outcome {
            ValidationOutcome::Match => {
                line.push_str(&format!(" | Reference: {reference} ✅"));
            }
            ValidationOutcome::Mismatch => {
                line.push_str(&format!(" | Reference: {reference} ⚠️ Price mismatch detected"));
            }
            ValidationOutcome::Unavailable => {
                line.push_str(&format!(" | Reference: {reference}"));
            }
        }
    }

    line
}

/// Format a dollar amount with thousands separators and two decimals,
/// e.g. `5165.7` becomes `"$5,165.70"`.
pub fn format_usd(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch(price: Option<&str>, change: Option<&str>) -> FetchResult {
        FetchResult {
            raw_price: price.map(String::from),
            raw_change: change.map(String::from),
        }
    }

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(format_usd(5165.7), "$5,165.70");
        assert_eq!(format_usd(67616.72), "$67,616.72");
        assert_eq!(format_usd(48.25), "$48.25");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn asset_without_reference_has_no_suffix() {
        let asset = AssetReport {
            emoji: "₿".into(),
            name: "Bitcoin".into(),
            fetch: fetch(Some("$67,616.72"), Some("+1.02%")),
            reference: None,
        };
        assert_eq!(render_line(&asset), "₿ Bitcoin: $67,616.72 (+1.02%)");
    }

    #[test]
    fn matching_reference_gets_check_glyph() {
        let asset = AssetReport {
            emoji: "🥇".into(),
            name: "Gold".into(),
            fetch: fetch(Some("$5,179.00"), Some("-0.21%")),
            reference: Some(ReferenceCheck {
                price: Some(5165.70),
                outcome: ValidationOutcome::Match,
            }),
        };
        assert_eq!(
            render_line(&asset),
            "🥇 Gold: $5,179.00 (-0.21%) | Reference: $5,165.70 ✅"
        );
    }

    #[test]
    fn mismatching_reference_gets_warning() {
        let asset = AssetReport {
            emoji: "🥇".into(),
            name: "Gold".into(),
            fetch: fetch(Some("$5,179.00"), None),
            reference: Some(ReferenceCheck {
                price: Some(4800.0),
                outcome: ValidationOutcome::Mismatch,
            }),
        };
        assert_eq!(
            render_line(&asset),
            "🥇 Gold: $5,179.00 (change N/A) | Reference: $4,800.00 ⚠️ Price mismatch detected"
        );
    }

    #[test]
    fn unavailable_outcome_has_no_glyph() {
        let asset = AssetReport {
            emoji: "🥈".into(),
            name: "Silver".into(),
            fetch: fetch(None, None),
            reference: Some(ReferenceCheck {
                price: Some(48.25),
                outcome: ValidationOutcome::Unavailable,
            }),
        };
        assert_eq!(
            render_line(&asset),
            "🥈 Silver: N/A (change N/A) | Reference: $48.25"
        );

        let no_reference = AssetReport {
            reference: Some(ReferenceCheck {
                price: None,
                outcome: ValidationOutcome::Unavailable,
            }),
            ..asset
        };
        assert_eq!(
            render_line(&no_reference),
            "🥈 Silver: N/A (change N/A) | Reference: N/A"
        );
    }

    #[test]
    fn render_starts_with_banner() {
        let report = PriceReport {
            assets: vec![AssetReport {
                emoji: "₿".into(),
                name: "Bitcoin".into(),
                fetch: fetch(None, None),
                reference: None,
            }],
        };
        assert_eq!(report.render(), "💰 Live Prices:\n₿ Bitcoin: N/A (change N/A)");
    }
}
