//! Error types for range coding.

use thiserror::Error;

/// Error variants for range coder operations.
///
/// Every variant is a caller contract violation detected before any coder
/// state is mutated. A failed call leaves the encoder or decoder exactly as
/// it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `precision` is outside the supported `1..=16` window.
    #[error("precision {0} out of range, must be in 1..=16")]
    PrecisionOutOfRange(u8),

    /// The symbol interval is empty or exceeds the CDF scale.
    #[error("invalid symbol interval [{low}, {high}) at precision {precision}")]
    InvalidInterval {
        /// Lower CDF bound of the symbol.
        low: u32,
        /// Upper CDF bound of the symbol.
        high: u32,
        /// Precision the bounds were checked against.
        precision: u8,
    },

    /// The CDF table violates its structural invariant: it must have at
    /// least two entries, start at 0, end at `1 << precision`, and be
    /// non-decreasing.
    #[error("malformed cdf table of length {0}")]
    InvalidCdf(usize),
}

/// A specialized Result type for range coder operations.
pub type Result<T> = std::result::Result<T, Error>;
