//! Factories for the usual shapes of fuzzy numbers.
//!
//! ```text
//!   trapezoid  interval(a,b,c,d)      triangle  number(a,b,c)
//!
//!   1.0      b-------c                1.0        b
//!           /         \                         / \
//!          /           \                       /   \
//!   0.0   a             d             0.0     a     c
//! ```

use crate::checked;
use crate::errors::{Error, Result};
use crate::fuzzy::{alpha, Fuzzy, LEVELS};
use crate::intervals::Interval;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A trapezoidal fuzzy number: values between a and d are possible, values
/// between b and c are the most likely.  The left side of each cut moves
/// linearly from a to b as membership increases, and independently the
/// right side moves from d to c.
pub fn interval(
    a: Decimal,
    b: Decimal,
    c: Decimal,
    d: Decimal,
) -> Result<Fuzzy> {
    if !(a <= b && b <= c && c <= d) {
        return Err(Error::Configuration(format!(
            "expected {a} <= {b} <= {c} <= {d}"
        )));
    }
    let cuts = (0..LEVELS)
        .map(|level| {
            let membership = alpha(level);
            Ok(Interval::new(
                towards(a, b, membership)?,
                towards(d, c, membership)?,
            ))
        })
        .collect::<Result<Vec<Interval>>>()?;
    Fuzzy::new(cuts)
}

/// The value a fraction `membership` of the way from `from` to `to`.
/// Fails when `to - from` does not fit in a decimal.
fn towards(from: Decimal, to: Decimal, membership: Decimal) -> Result<Decimal> {
    let offset = checked::mul(checked::sub(to, from)?, membership)?;
    Ok(checked::add(from, offset)?.normalize())
}

/// A triangular fuzzy number, whose most likely value is b
pub fn number(a: Decimal, b: Decimal, c: Decimal) -> Result<Fuzzy> {
    interval(a, b, b, c)
}

/// A crisp value, with no uncertainty
#[must_use]
pub fn point(a: Decimal) -> Fuzzy {
    Fuzzy::new_crisp(Interval::new_single(a))
}

/// Parse `A`, `A,B,C` or `A,B,C,D` as respectively a point, a triangular
/// or a trapezoidal fuzzy number.
pub fn parse_shape(text: &str) -> Result<Fuzzy> {
    let values = text
        .split(',')
        .map(|v| {
            Decimal::from_str(v.trim()).map_err(|e| {
                Error::TypeMismatch(format!("'{v}' is not a number: {e}"))
            })
        })
        .collect::<Result<Vec<Decimal>>>()?;
    match values.as_slice() {
        [a] => Ok(point(*a)),
        [a, b, c] => number(*a, *b, *c),
        [a, b, c, d] => interval(*a, *b, *c, *d),
        _ => Err(Error::TypeMismatch(format!(
            "'{text}' is neither a point, a triangle nor a trapezoid"
        ))),
    }
}

impl FromStr for Fuzzy {
    type Err = Error;

    /// Same as [`parse_shape`]
    fn from_str(s: &str) -> Result<Self> {
        parse_shape(s)
    }
}
