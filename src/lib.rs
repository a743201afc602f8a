// ============================================================================
// Tagged Quantity Library
// Type-tagged arbitrary-precision fixed-point quantities
// ============================================================================

//! # Tagged Quantity
//!
//! Exact, unit-tagged quantities for monetary and unit-bearing values,
//! backed by arbitrary-precision integers instead of floating point.
//!
//! ## Features
//!
//! - **Unit-tagged values** with runtime `UnitMismatch` guards against
//!   cross-unit arithmetic
//! - **Arbitrary-precision magnitudes** using `num-bigint`, so 18-decimal
//!   token balances and beyond are represented exactly
//! - **Lossless decimal text** with exact parse/render round-trips and no
//!   floating-point involvement
//! - **Immutable value semantics** safe to share across threads without
//!   coordination
//!
//! ## Example
//!
//! ```rust
//! use tagged_quantity::prelude::*;
//!
//! // Parse a balance with 18 implied decimal places
//! let balance = Quantity::from_decimal("WEI", "1.5", 18)?;
//! assert_eq!(balance.magnitude().to_string(), "1500000000000000000");
//!
//! // Arithmetic stays within the unit
//! let deposit = Quantity::from_decimal("WEI", "0.25", 18)?;
//! let total = balance.checked_add(&deposit)?;
//! assert_eq!(total.to_decimal_string(), "1.750000000000000000");
//!
//! // A differently tagged quantity is rejected at runtime
//! let other = Quantity::from_decimal("GWEI", "1.0", 9)?;
//! assert!(total.checked_add(&other).is_err());
//! # Ok::<(), QuantityError>(())
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{Quantity, QuantityError, QuantityResult, MAX_SCALE};
}

#[cfg(test)]
mod integration_tests {
    use num_bigint::BigInt;

    use super::prelude::*;

    #[test]
    fn test_end_to_end_balance_flow() {
        // Ledger-style flow: parse, accumulate, settle, render
        let opening = Quantity::from_decimal("USD", "1000.00", 2).unwrap();
        let payment = Quantity::from_decimal("USD", "249.99", 2).unwrap();
        let refund = Quantity::from_decimal("USD", "0.99", 2).unwrap();

        let closing = opening
            .checked_sub(&payment)
            .unwrap()
            .checked_add(&refund)
            .unwrap();

        assert_eq!(closing.to_decimal_string(), "751.00");
        assert!(closing.is_positive());
        assert_eq!(*closing.magnitude(), BigInt::from(75100));
    }

    #[test]
    fn test_units_never_mix() {
        let usd = Quantity::from_decimal("USD", "10.00", 2).unwrap();
        let eur = Quantity::from_decimal("EUR", "10.00", 2).unwrap();

        assert!(matches!(
            usd.checked_add(&eur),
            Err(QuantityError::UnitMismatch { .. })
        ));
        assert_ne!(usd, eur);
        assert!(usd.is_unit(&"USD"));
        assert!(!usd.is_unit(&"EUR"));
    }

    #[test]
    fn test_enum_unit_tags() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Asset {
            Btc,
            Eth,
        }

        let btc = Quantity::new(Asset::Btc, 100_000_000, 8).unwrap();
        let eth = Quantity::new(Asset::Eth, 1, 18).unwrap();

        assert_eq!(btc.to_decimal_string(), "1.00000000");
        assert_eq!(eth.to_decimal_string(), "0.000000000000000001");
        assert!(matches!(
            btc.checked_sub(&eth),
            Err(QuantityError::UnitMismatch { op: "subtract" })
        ));
    }

    #[test]
    fn test_max_scale_round_trip() {
        let q = Quantity::new("TOKEN", 1, MAX_SCALE).unwrap();
        let text = q.to_decimal_string();
        let back = Quantity::from_decimal("TOKEN", &text, MAX_SCALE).unwrap();
        assert_eq!(back.magnitude(), q.magnitude());
    }
}
