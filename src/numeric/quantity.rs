// ============================================================================
// Tagged Quantity
// Unit-tagged arbitrary-precision fixed-point values
// ============================================================================

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};

use super::errors::{QuantityError, QuantityResult};

/// The maximum number of fractional decimal digits a quantity may carry.
pub const MAX_SCALE: u32 = 18;

#[inline]
fn check_scale(scale: u32) -> QuantityResult<()> {
    if scale > MAX_SCALE {
        Err(QuantityError::InvalidScale(scale))
    } else {
        Ok(())
    }
}

/// An immutable, unit-tagged quantity backed by an arbitrary-precision
/// signed integer.
///
/// Internally stores the amount in the smallest indivisible sub-unit as a
/// [`BigInt`] `magnitude`, alongside a `scale` giving the number of decimal
/// places implied when the magnitude is rendered or parsed as decimal text.
/// No floating point is involved anywhere, so decimal round-trips are exact.
///
/// # Unit tag
///
/// `U` is an opaque comparable discriminator (a string, an enum, an interned
/// symbol). Quantities with distinct Rust unit *types* cannot meet in a
/// binary operation at all; quantities with distinct unit *values* of the
/// same type are rejected at runtime with [`QuantityError::UnitMismatch`].
///
/// # Scale
///
/// Arithmetic operates on raw magnitudes and carries the receiver's `unit`
/// and `scale` into the result unchanged. Operand scales are deliberately
/// not compared; callers keep operands at consistent scales when the decimal
/// interpretation of a result matters.
///
/// # Example
/// ```
/// use tagged_quantity::prelude::*;
///
/// let price = Quantity::from_decimal("USD", "1234.56", 2)?;
/// let fee = Quantity::from_decimal("USD", "0.44", 2)?;
/// let total = price.checked_add(&fee)?;
/// assert_eq!(total.to_decimal_string(), "1235.00");
/// # Ok::<(), QuantityError>(())
/// ```
#[derive(Clone)]
pub struct Quantity<U> {
    unit: U,
    magnitude: BigInt,
    scale: u32,
}

impl<U> Quantity<U> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a quantity from a raw magnitude expressed in the smallest
    /// sub-unit.
    ///
    /// The magnitude is stored as given; no normalization against `scale`
    /// takes place.
    ///
    /// # Errors
    /// Returns `InvalidScale` if `scale` exceeds [`MAX_SCALE`].
    pub fn new<M: Into<BigInt>>(unit: U, magnitude: M, scale: u32) -> QuantityResult<Self> {
        check_scale(scale)?;
        Ok(Self {
            unit,
            magnitude: magnitude.into(),
            scale,
        })
    }

    /// Create a zero quantity at the given scale.
    ///
    /// # Errors
    /// Returns `InvalidScale` if `scale` exceeds [`MAX_SCALE`].
    pub fn zero(unit: U, scale: u32) -> QuantityResult<Self> {
        Self::new(unit, BigInt::ZERO, scale)
    }

    /// Parse a human-readable decimal string into a quantity whose magnitude
    /// is the written value scaled up by `10^scale`.
    ///
    /// Accepts exactly `-?[0-9]+(\.[0-9]+)?`: an optional leading minus, one
    /// or more digits, optionally a point followed by one or more digits. No
    /// grouping separators, no exponents, no surrounding whitespace.
    ///
    /// The fractional part is right-padded with zeros up to `scale`; a
    /// fractional part *longer* than `scale` is rejected rather than rounded
    /// or truncated.
    ///
    /// # Errors
    /// - `InvalidScale` if `scale` exceeds [`MAX_SCALE`]
    /// - `InvalidFormat` if `text` does not match the grammar
    /// - `FractionalDigitsExceedScale` if the fraction is longer than `scale`
    pub fn from_decimal(unit: U, text: &str, scale: u32) -> QuantityResult<Self> {
        check_scale(scale)?;

        let unsigned = text.strip_prefix('-').unwrap_or(text);
        let negative = unsigned.len() != text.len();

        let (int_digits, frac_digits) = match unsigned.split_once('.') {
            Some((_, "")) => return Err(QuantityError::InvalidFormat(text.to_string())),
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (unsigned, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if int_digits.is_empty() || !all_digits(int_digits) || !all_digits(frac_digits) {
            return Err(QuantityError::InvalidFormat(text.to_string()));
        }

        if frac_digits.len() > scale as usize {
            return Err(QuantityError::FractionalDigitsExceedScale {
                digits: frac_digits.len(),
                scale,
            });
        }

        // Shift the written value up by 10^scale: append the fraction and
        // right-pad with zeros until the fraction occupies `scale` digits.
        let mut combined = String::with_capacity(int_digits.len() + scale as usize);
        combined.push_str(int_digits);
        combined.push_str(frac_digits);
        for _ in frac_digits.len()..scale as usize {
            combined.push('0');
        }

        let mut magnitude: BigInt = combined
            .parse()
            .map_err(|_| QuantityError::InvalidFormat(text.to_string()))?;
        if negative {
            magnitude = -magnitude;
        }

        Ok(Self {
            unit,
            magnitude,
            scale,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The unit tag.
    #[inline]
    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// The raw magnitude in smallest sub-units (no decimal interpretation).
    #[inline]
    pub fn magnitude(&self) -> &BigInt {
        &self.magnitude
    }

    /// The number of fractional decimal digits implied by the magnitude.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Check if the magnitude is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Check if the magnitude is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.magnitude.is_positive()
    }

    /// Check if the magnitude is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.magnitude.is_negative()
    }

    // ========================================================================
    // Decimal Rendering
    // ========================================================================

    /// Render the magnitude as a decimal string honoring `scale`.
    ///
    /// With `scale == 0` the signed magnitude is written verbatim with no
    /// decimal point. Otherwise the low `scale` digits become the fractional
    /// part, preserving trailing zeros (`50` at scale 2 renders as `0.50`).
    /// The rendering is exact; no rounding takes place.
    pub fn to_decimal_string(&self) -> String {
        let digits = self.magnitude.magnitude().to_string();
        let sign = if self.magnitude.sign() == Sign::Minus {
            "-"
        } else {
            ""
        };

        if self.scale == 0 {
            return format!("{sign}{digits}");
        }

        let scale = self.scale as usize;
        if digits.len() <= scale {
            // Less than one whole unit: zero-fill between the point and the
            // first significant digit.
            let mut out = String::with_capacity(scale + 3);
            out.push_str(sign);
            out.push_str("0.");
            for _ in digits.len()..scale {
                out.push('0');
            }
            out.push_str(digits.trim_start_matches('0'));
            // A zero magnitude strips to nothing; keep one fractional digit
            // so the output stays inside the accepted grammar.
            if out.ends_with('.') {
                out.push('0');
            }
            out
        } else {
            let (int_digits, frac_digits) = digits.split_at(digits.len() - scale);
            format!("{sign}{int_digits}.{frac_digits}")
        }
    }
}

impl<U: PartialEq> Quantity<U> {
    #[inline]
    fn check_unit(&self, other: &Self, op: &'static str) -> QuantityResult<()> {
        if self.unit == other.unit {
            Ok(())
        } else {
            Err(QuantityError::UnitMismatch { op })
        }
    }

    /// Answer whether this quantity is tagged with the given unit.
    ///
    /// A plain query for boundary checks against externally supplied data;
    /// never fails.
    #[inline]
    pub fn is_unit(&self, unit: &U) -> bool {
        self.unit == *unit
    }
}

impl<U: PartialEq + Clone> Quantity<U> {
    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Add the raw magnitudes of two same-unit quantities.
    ///
    /// # Errors
    /// Returns `UnitMismatch` if the operands carry different units.
    pub fn checked_add(&self, rhs: &Self) -> QuantityResult<Self> {
        self.check_unit(rhs, "add")?;
        Ok(Self {
            unit: self.unit.clone(),
            magnitude: &self.magnitude + &rhs.magnitude,
            scale: self.scale,
        })
    }

    /// Subtract the raw magnitude of `rhs` from this quantity's.
    ///
    /// # Errors
    /// Returns `UnitMismatch` if the operands carry different units.
    pub fn checked_sub(&self, rhs: &Self) -> QuantityResult<Self> {
        self.check_unit(rhs, "subtract")?;
        Ok(Self {
            unit: self.unit.clone(),
            magnitude: &self.magnitude - &rhs.magnitude,
            scale: self.scale,
        })
    }

    /// Multiply the raw magnitudes of two same-unit quantities.
    ///
    /// The magnitudes multiply with no scale adjustment: when both operands
    /// are scaled representations of decimal numbers the result's effective
    /// scale is the *sum* of the operand scales, while the stored `scale`
    /// remains the receiver's. Callers account for this when interpreting
    /// the result decimally.
    ///
    /// # Errors
    /// Returns `UnitMismatch` if the operands carry different units.
    pub fn checked_mul(&self, rhs: &Self) -> QuantityResult<Self> {
        self.check_unit(rhs, "multiply")?;
        Ok(Self {
            unit: self.unit.clone(),
            magnitude: &self.magnitude * &rhs.magnitude,
            scale: self.scale,
        })
    }

    /// Divide this quantity's raw magnitude by another's, truncating toward
    /// zero.
    ///
    /// Returns the bare integer ratio rather than a quantity: the unit
    /// cancels and the remainder is discarded.
    ///
    /// # Errors
    /// - `UnitMismatch` if the operands carry different units
    /// - `DivisionByZero` if the divisor magnitude is zero
    pub fn checked_div(&self, rhs: &Self) -> QuantityResult<BigInt> {
        self.check_unit(rhs, "divide")?;
        if rhs.magnitude.is_zero() {
            return Err(QuantityError::DivisionByZero);
        }
        Ok(&self.magnitude / &rhs.magnitude)
    }
}

impl<U: Clone> Quantity<U> {
    /// The absolute value, keeping unit and scale.
    pub fn abs(&self) -> Self {
        Self {
            unit: self.unit.clone(),
            magnitude: self.magnitude.abs(),
            scale: self.scale,
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

/// Equality compares `unit` and `magnitude` only; `scale` is a rendering
/// hint and does not participate.
impl<U: PartialEq> PartialEq for Quantity<U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.magnitude == other.magnitude
    }
}

impl<U: Eq> Eq for Quantity<U> {}

impl<U: Hash> Hash for Quantity<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Consistent with PartialEq: scale excluded
        self.unit.hash(state);
        self.magnitude.hash(state);
    }
}

impl<U> Neg for Quantity<U> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            unit: self.unit,
            magnitude: -self.magnitude,
            scale: self.scale,
        }
    }
}

impl<U: fmt::Debug> fmt::Debug for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quantity({:?}, {}, scale={})",
            self.unit, self.magnitude, self.scale
        )
    }
}

/// Renders as `"<raw magnitude> <unit>"` with no decimal interpretation.
/// Intended for debugging and logs; use [`Quantity::to_decimal_string`] for
/// decimal display.
impl<U: fmt::Display> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

// ============================================================================
// Tests
// ============================================================================


// ============================================================================
// Property Tests
// ============================================================================
