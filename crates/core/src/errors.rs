use thiserror::Error;

/// Unified error type for the price-history-core library.
///
/// The chart pipeline itself never fails: empty input yields an empty chart
/// and out-of-range dates are clamped. Only import/export and settings
/// loading return `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input ───────────────────────────────────────────────────────
    #[error("Observation validation failed: {0}")]
    ValidationError(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json reports both directions through one type; reading
        // failures carry a line/column, writing failures never do.
        if e.line() == 0 {
            CoreError::Serialization(e.to_string())
        } else {
            CoreError::Deserialization(e.to_string())
        }
    }
}
