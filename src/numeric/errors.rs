// ============================================================================
// Quantity Errors
// Error types for quantity construction, parsing, and arithmetic
// ============================================================================

use thiserror::Error;

use super::quantity::MAX_SCALE;

/// Errors that can occur when constructing or operating on quantities.
///
/// All variants are caller input-validation failures. None are transient and
/// none warrant a retry; the operation that produced the error left no
/// partially constructed state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// Scale outside the supported `[0, MAX_SCALE]` range
    #[error("scale must be between 0 and {MAX_SCALE}, got {0}")]
    InvalidScale(u32),
    /// Decimal string does not match `-?[0-9]+(\.[0-9]+)?`
    #[error("invalid decimal string format: {0:?}")]
    InvalidFormat(String),
    /// Decimal string carries more fractional digits than the requested scale
    #[error("fractional part has {digits} digits, exceeding scale {scale}")]
    FractionalDigitsExceedScale { digits: usize, scale: u32 },
    /// Binary operation invoked on operands with differing units
    #[error("cannot {op} quantities of different units")]
    UnitMismatch { op: &'static str },
    /// Divisor magnitude is zero
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type alias for quantity operations
pub type QuantityResult<T> = Result<T, QuantityError>;
