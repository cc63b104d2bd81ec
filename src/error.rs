use thiserror::Error;

/// Errors generated by the password engine.
#[derive(Debug, Error)]
pub enum Error {
    /// No character classes enabled and no custom characters given.
    #[error("character set is empty")]
    EmptyCharset,

    /// Entropy sizing requested over a single-character set.
    #[error("need at least 2 distinct characters in set for entropy sizing")]
    DegenerateCharset,

    /// Resolved length is negative or above the ceiling.
    #[error("invalid password length {0} (must be 0..={max})", max = crate::pass::MAX_LENGTH)]
    InvalidLength(f64),

    /// A sampled index fell outside `[0, bound)`.
    #[error("arithmetic fault: sampled {value} outside [0, {bound})")]
    ArithmeticFault { value: u64, bound: u64 },

    /// The secure source failed after it was detected.
    #[error("secure random source failed: {0}")]
    SecureSource(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
