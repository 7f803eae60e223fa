//! Cross-source price validation.

/// Maximum tolerated relative difference between primary and reference.
pub const TOLERANCE: f64 = 0.02;

/// Outcome of comparing a primary price against its reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Both sides present and within tolerance.
    Match,
    /// Both sides present, relative difference above tolerance.
    Mismatch,
    /// Either side absent; no comparison possible.
    Unavailable,
}

/// Compare a primary price against a reference price.
///
/// The relative difference is taken against the *primary* price: the check
/// guards against the primary source drifting from a trusted reference,
/// not the other way around.
pub fn validate(primary: Option<f64>, reference: Option<f64>) -> ValidationOutcome {
    let (primary, reference) = match (primary, reference) {
        (Some(p), Some(r)) => (p, r),
        _ => return ValidationOutcome::Unavailable,
    };

    let rel_diff = (primary - reference).abs() / primary;
    if rel_diff > TOLERANCE {
        ValidationOutcome::Mismatch
    } else {
        ValidationOutcome::Match
    }
}
