// ============================================================================
// Numeric Module
// Unit-tagged arbitrary-precision fixed-point quantities
// ============================================================================
//
// This module provides:
// - Quantity<U>: immutable value tagged with an opaque unit discriminator
// - QuantityError: error types for construction, parsing, and arithmetic
//
// Design principles:
// - No floating-point operations; magnitudes are num-bigint integers
// - All fallible operations return Result (no panics)
// - Values are immutable; every operation constructs a new value
// - Decimal text round-trips exactly, with no rounding anywhere

mod errors;
mod quantity;

pub use errors::{QuantityError, QuantityResult};
pub use quantity::{Quantity, MAX_SCALE};
