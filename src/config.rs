//! Static pipeline configuration: the tracked-asset and reference lists
//! plus run tunables.
//!
//! The production set tracks Bitcoin and the COMEX gold/silver front-month
//! contracts on Google Finance, with Kitco spot pages as the independent
//! reference for the two metals. Bitcoin deliberately has no reference
//! entry. Tests pass small fixture lists instead of the production set.

/// An asset quoted from the primary source.
#[derive(Debug, Clone)]
pub struct TrackedItem {
    /// Primary-source ticker symbol (e.g. "BTC-USD").
    pub ticker: String,
    /// Human-readable name; also the join key against [`ReferenceItem`].
    pub display_name: String,
    /// Primary-source quote page.
    pub source_url: String,
    /// Report-line prefix glyph.
    pub emoji: String,
}

/// An asset with an independent reference price source.
#[derive(Debug, Clone)]
pub struct ReferenceItem {
    /// Must match a [`TrackedItem::display_name`] to be cross-validated.
    pub display_name: String,
    /// Reference-source page.
    pub source_url: String,
}

/// Everything the pipeline needs for one run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub tracked: Vec<TrackedItem>,
    pub references: Vec<ReferenceItem>,
    /// Navigation timeout for primary-source pages.
    pub primary_timeout_ms: u64,
    /// Navigation timeout for reference-source pages (slower to settle).
    pub reference_timeout_ms: u64,
    /// Politeness delay inserted after every page fetch.
    pub delay_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tracked: tracked_items(),
            references: reference_items(),
            primary_timeout_ms: 30_000,
            reference_timeout_ms: 45_000,
            delay_ms: 2_000,
        }
    }
}

/// The production tracked-asset list, in report order.
pub fn tracked_items() -> Vec<TrackedItem> {
    vec![
        TrackedItem {
            ticker: "BTC-USD".into(),
            display_name: "Bitcoin".into(),
            source_url: "https://www.google.com/finance/quote/BTC-USD".into(),
            emoji: "₿".into(),
        },
        TrackedItem {
            ticker: "GCW00".into(),
            display_name: "Gold".into(),
            source_url: "https://www.google.com/finance/quote/GCW00:COMEX".into(),
            emoji: "🥇".into(),
        },
        TrackedItem {
            ticker: "SIW00".into(),
            display_name: "Silver".into(),
            source_url: "https://www.google.com/finance/quote/SIW00:COMEX".into(),
            emoji: "🥈".into(),
        },
    ]
}

/// The production reference list. Bitcoin has no reference source.
pub fn reference_items() -> Vec<ReferenceItem> {
    vec![
        ReferenceItem {
            display_name: "Gold".into(),
            source_url: "https://www.kitco.com/gold-price-today-usa/".into(),
        },
        ReferenceItem {
            display_name: "Silver".into(),
            source_url: "https://www.kitco.com/silver-price-today-usa/".into(),
        },
    ]
}
