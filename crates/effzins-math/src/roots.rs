//! Real n-th roots of decimal values.
//!
//! The radicand arrives as a [`BigDecimal`] and the root is returned as a
//! [`BigDecimal`], but the exponentiation itself runs in `f64`:
//!
//! ```text
//! nth_root(x, n) = x^(1/n)   computed as   (x as f64).powf(1.0 / n)
//! ```
//!
//! # Precision
//!
//! Everything that determines the radicand (products and the division of
//! target by contributions) stays in decimal arithmetic. The root is only as
//! precise as an `f64`, roughly 15-17 significant digits. Callers round the
//! result to five fractional digits, well inside that ceiling, but must not
//! assume full decimal precision end to end.
//!
//! # Range
//!
//! [`BigDecimal`] is unbounded, so the only range limit is that of `f64`
//! (about `1.8e308`); a root or power beyond it is [`MathError::Overflow`].

use bigdecimal::{BigDecimal, ToPrimitive, Zero};

use crate::error::{MathError, MathResult};

/// Computes the real `n`-th root of `value`.
///
/// # Errors
///
/// - [`MathError::NoRealRoot`] if `value` is negative.
/// - [`MathError::InvalidInput`] if `n` is zero.
/// - [`MathError::Overflow`] if the radicand or the result is outside the
///   `f64` range.
///
/// # Example
///
/// ```rust
/// use bigdecimal::BigDecimal;
/// use effzins_math::nth_root;
///
/// let root = nth_root(&BigDecimal::from(27), 3).unwrap();
/// assert_eq!(root.round(10), BigDecimal::from(3));
/// ```
pub fn nth_root(value: &BigDecimal, n: i64) -> MathResult<BigDecimal> {
    root_f64(value, n).and_then(|root| from_f64(root, "n-th root"))
}

/// [`nth_root`] without the conversion back to decimal.
pub(crate) fn root_f64(value: &BigDecimal, n: i64) -> MathResult<f64> {
    if *value < BigDecimal::zero() {
        return Err(MathError::NoRealRoot {
            value: value.clone(),
        });
    }
    if n == 0 {
        return Err(MathError::invalid_input("root degree must be non-zero"));
    }

    let x = value
        .to_f64()
        .filter(|x| x.is_finite())
        .ok_or_else(|| MathError::overflow("decimal to f64 conversion"))?;
    let root = x.powf(1.0 / n as f64);

    if root.is_finite() {
        Ok(root)
    } else {
        Err(MathError::overflow("n-th root"))
    }
}

/// Converts a finite `f64` into a [`BigDecimal`] holding its shortest
/// round-trip decimal digits.
pub(crate) fn from_f64(value: f64, operation: &str) -> MathResult<BigDecimal> {
    if !value.is_finite() {
        return Err(MathError::overflow(operation));
    }
    value
        .to_string()
        .parse::<BigDecimal>()
        .map_err(|_| MathError::overflow(operation))
}
