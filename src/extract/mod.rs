//! In-page extraction against the two fixed source layouts.
//!
//! Each extractor sends a small script through the renderer's evaluate
//! contract and does all parsing on the Rust side, so the parsing logic is
//! unit-testable and the scripts stay trivial DOM reads.

pub mod primary;
pub mod reference;

/// Raw extraction result for one tracked asset.
///
/// Absent fields signal extraction failure for that field, never a fatal
/// error; they surface as "N/A" in the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResult {
    /// Price text as displayed, e.g. `"$67,616.72"`.
    pub raw_price: Option<String>,
    /// Signed percent change, e.g. `"+1.02%"`.
    pub raw_change: Option<String>,
}
