// created = "2026-10-17"
// modified = "2026-10-17"

//! Errors raised by digit chain operations.
//!
//! Only caller mistakes are errors here. Clamped arithmetic, malformed
//! decimal text and failed persistence all resolve to a value instead.

use thiserror::Error;

/// Error returned when a chain operation is given bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The digit does not fit the chain's radix.
    #[error("digit {digit} is not valid for radix {radix}")]
    InvalidDigit { digit: u8, radix: u32 },

    /// A positional access fell outside the chain.
    #[error("index {index} out of range for chain of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A radix outside `MIN_RADIX..=MAX_RADIX`.
    #[error("radix {0} is not supported")]
    InvalidRadix(u32),

    /// A configuration with no radices to choose from.
    #[error("radix table is empty")]
    EmptyRadixTable,
}
