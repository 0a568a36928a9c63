use thiserror::Error;

/// Errors reported to the host.
///
/// Index problems are never errors; out-of-range screens are clamped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PagerError {
    /// The host measured the pager with a non-exact constraint.
    #[error("pager can only be measured with an exact {dimension}")]
    InexactMeasureSpec { dimension: &'static str },
    /// Layout was requested before any successful measure pass.
    #[error("pager laid out before it was measured")]
    NotMeasured,
    /// A configuration value is out of its valid range.
    #[error("invalid pager configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}
