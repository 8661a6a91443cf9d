use crate::checked;
use crate::errors::{Error, Result};
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A closed interval of values `[low, high]`.
///
/// Well-formed intervals satisfy `low <= high`.  This is not checked by the
/// arithmetic operations, only by the parsers.  Arithmetic follows interval
/// semantics, so that the result always contains every value obtained by
/// applying the operation to any pair of values taken from the operands:
///
/// ```text
///     [1, 2] + [10, 20]  = [11, 22]
///     [1, 2] - [10, 20]  = [-19, -8]     (not [-9, -18])
///     [-2, 3] * [-1, 4]  = [-8, 12]      (min/max of the cross products)
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
    Deserialize,
)]
pub struct Interval {
    low: Decimal,
    high: Decimal,
}

impl Interval {
    /// The interval `[0, 0]`
    pub const ZERO: Interval = Interval {
        low: Decimal::ZERO,
        high: Decimal::ZERO,
    };

    /// Construct the interval `[low, high]`.
    #[must_use]
    pub const fn new(low: Decimal, high: Decimal) -> Self {
        Self { low, high }
    }

    /// Returns an interval that contains a single value (`[value,value]`)
    #[must_use]
    pub const fn new_single(value: Decimal) -> Self {
        Self::new(value, value)
    }

    #[must_use]
    pub const fn low(&self) -> Decimal {
        self.low
    }

    #[must_use]
    pub const fn high(&self) -> Decimal {
        self.high
    }

    /// `high - low`, or an error if it does not fit in a decimal
    pub fn width(&self) -> Result<Decimal> {
        checked::sub(self.high, self.low)
    }

    pub fn midpoint(&self) -> Result<Decimal> {
        Ok(checked::add(self.low, self.high)? / Decimal::TWO)
    }

    /// True if self is of the form `[A, A]`.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.low == self.high
    }

    /// Whether value is contained in the interval
    #[must_use]
    pub fn contains(&self, value: Decimal) -> bool {
        self.low <= value && value <= self.high
    }

    /// Whether self contains all values of the second interval (and possibly
    /// more).
    #[must_use]
    pub fn contains_interval(&self, other: &Self) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    /// Whether zero is one of the values of the interval.  Such an interval
    /// cannot be used as a divisor.
    #[must_use]
    pub fn straddles_zero(&self) -> bool {
        self.contains(Decimal::ZERO)
    }

    /// All arithmetic fails with [`Error::Undefined`] when a bound overflows
    pub fn add(&self, right: &Self) -> Result<Self> {
        Ok(Self::new(
            checked::add(self.low, right.low)?,
            checked::add(self.high, right.high)?,
        ))
    }

    /// The lower bound of the result comes from the upper bound of right,
    /// and conversely.
    pub fn subtract(&self, right: &Self) -> Result<Self> {
        Ok(Self::new(
            checked::sub(self.low, right.high)?,
            checked::sub(self.high, right.low)?,
        ))
    }

    /// The bounds are the extremes of the four cross products.  When either
    /// interval includes negative values, `low * low` is not necessarily the
    /// lower bound.
    pub fn multiply(&self, right: &Self) -> Result<Self> {
        self.cross(right, checked::mul)
    }

    /// The extremes of the four quotients of the bounds.  Only defined when
    /// right excludes zero.
    pub fn divide(&self, right: &Self) -> Result<Self> {
        if right.straddles_zero() {
            log::debug!("cannot divide {} by {}", self, right);
            return Err(Error::Division(*right));
        }
        self.cross(right, checked::div)
    }

    fn cross(
        &self,
        right: &Self,
        op: fn(Decimal, Decimal) -> Result<Decimal>,
    ) -> Result<Self> {
        let first = op(self.low, right.low)?;
        let others = [
            op(self.low, right.high)?,
            op(self.high, right.low)?,
            op(self.high, right.high)?,
        ];
        let (low, high) = others
            .into_iter()
            .fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Ok(Self::new(low, high))
    }

    /// Raise both bounds to the power `exponent`.
    /// Only defined for a positive exponent and an interval with no
    /// negative values, since otherwise the bounds of the result are no
    /// longer the images of the bounds.
    pub fn pow(&self, exponent: Decimal) -> Result<Self> {
        if exponent <= Decimal::ZERO {
            log::debug!("{} to the power {}", self, exponent);
            return Err(Error::Undefined(format!(
                "non-positive exponent {exponent}"
            )));
        }
        if self.low < Decimal::ZERO {
            log::debug!("{} to the power {}", self, exponent);
            return Err(Error::Undefined(format!(
                "{self} includes negative values, cannot raise to the power \
                 {exponent}"
            )));
        }
        let low = pow_bound(self.low, exponent)?;
        let high = pow_bound(self.high, exponent)?;
        Ok(Self::new(low.min(high), low.max(high)))
    }

    /// How far apart two intervals are: the sum of the distances between
    /// their lower bounds and between their upper bounds.
    pub fn distance(&self, other: &Self) -> Result<Decimal> {
        checked::add(
            checked::sub(self.low, other.low)?.abs(),
            checked::sub(self.high, other.high)?.abs(),
        )
    }
}

fn pow_bound(value: Decimal, exponent: Decimal) -> Result<Decimal> {
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    value.checked_powd(exponent).ok_or_else(|| {
        Error::Undefined(format!("{value} to the power {exponent} overflows"))
    })
}

///   Interval + Interval
impl core::ops::Add<Interval> for Interval {
    type Output = Result<Interval>;

    /// Same as [`Interval::add()`]
    fn add(self, rhs: Interval) -> Self::Output {
        Interval::add(&self, &rhs)
    }
}

///   Interval - Interval
impl core::ops::Sub<Interval> for Interval {
    type Output = Result<Interval>;

    /// Same as [`Interval::subtract()`]
    fn sub(self, rhs: Interval) -> Self::Output {
        self.subtract(&rhs)
    }
}

///   Interval * Interval
impl core::ops::Mul<Interval> for Interval {
    type Output = Result<Interval>;

    /// Same as [`Interval::multiply()`]
    fn mul(self, rhs: Interval) -> Self::Output {
        self.multiply(&rhs)
    }
}

///   Interval / Interval
impl core::ops::Div<Interval> for Interval {
    type Output = Result<Interval>;

    /// Same as [`Interval::divide()`]
    fn div(self, rhs: Interval) -> Self::Output {
        self.divide(&rhs)
    }
}

///   -Interval
impl core::ops::Neg for Interval {
    type Output = Interval;

    /// Decimal negation is exact, so this cannot fail
    fn neg(self) -> Self::Output {
        Interval::new(-self.high, -self.low)
    }
}

///   Interval + Decimal
impl core::ops::Add<Decimal> for Interval {
    type Output = Result<Interval>;

    fn add(self, rhs: Decimal) -> Self::Output {
        Interval::add(&self, &Interval::new_single(rhs))
    }
}

///   Interval - Decimal
impl core::ops::Sub<Decimal> for Interval {
    type Output = Result<Interval>;

    fn sub(self, rhs: Decimal) -> Self::Output {
        self.subtract(&Interval::new_single(rhs))
    }
}

///   Interval * Decimal
impl core::ops::Mul<Decimal> for Interval {
    type Output = Result<Interval>;

    fn mul(self, rhs: Decimal) -> Self::Output {
        self.multiply(&Interval::new_single(rhs))
    }
}

///   Interval / Decimal
impl core::ops::Div<Decimal> for Interval {
    type Output = Result<Interval>;

    fn div(self, rhs: Decimal) -> Self::Output {
        self.divide(&Interval::new_single(rhs))
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

impl FromStr for Interval {
    type Err = Error;

    /// Parse either `[low, high]` or `low,high`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .unwrap_or(trimmed);
        let (low, high) = inner.split_once(',').ok_or_else(|| {
            Error::TypeMismatch(format!("'{s}' is not an interval"))
        })?;
        let parse = |v: &str| {
            Decimal::from_str(v.trim()).map_err(|e| {
                Error::TypeMismatch(format!("'{}' is not a number: {e}", v))
            })
        };
        let result = Interval::new(parse(low)?, parse(high)?);
        if result.low > result.high {
            return Err(Error::Configuration(format!(
                "lower bound above upper bound in '{s}'"
            )));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rust_decimal_macros::dec;

    fn intv(low: Decimal, high: Decimal) -> Interval {
        Interval::new(low, high)
    }

    #[test]
    fn test_add_sub() {
        let a = intv(dec!(1), dec!(2));
        let b = intv(dec!(10), dec!(20));
        assert_eq!(a + b, Ok(intv(dec!(11), dec!(22))));
        assert_eq!(a - b, Ok(intv(dec!(-19), dec!(-8))));
        assert_eq!(b - a, Ok(intv(dec!(8), dec!(19))));
        assert_eq!(a + Interval::ZERO, Ok(a));
        assert_eq!(a - Interval::ZERO, Ok(a));
        assert_eq!(a + dec!(1), Ok(intv(dec!(2), dec!(3))));

        // Subtracting an interval from itself does not give zero, unless
        // it is a single value
        assert_eq!(a - a, Ok(intv(dec!(-1), dec!(1))));
        let single = Interval::new_single(dec!(3.5));
        assert_eq!(single - single, Ok(Interval::ZERO));
    }

    #[test]
    fn test_multiply() {
        let a = intv(dec!(-2), dec!(3));
        let b = intv(dec!(-1), dec!(4));
        assert_eq!(a * b, Ok(intv(dec!(-8), dec!(12))));
        assert_eq!(b * a, Ok(intv(dec!(-8), dec!(12))));

        let neg = intv(dec!(-3), dec!(-2));
        assert_eq!(neg * neg, Ok(intv(dec!(4), dec!(9))));
        assert_eq!(neg * dec!(-1), Ok(intv(dec!(2), dec!(3))));
        assert_eq!(a * Interval::ZERO, Ok(Interval::ZERO));
    }

    #[test]
    fn test_overflow() {
        let huge = Interval::new_single(dec!(100000000000000000000));
        assert!(matches!(huge * huge, Err(Error::Undefined(_))));

        let max = Interval::new_single(Decimal::MAX);
        assert!(matches!(max + max, Err(Error::Undefined(_))));
        assert!(matches!(max + dec!(1), Err(Error::Undefined(_))));
        assert!(matches!(-max - max, Err(Error::Undefined(_))));
        assert!(matches!(max / dec!(0.1), Err(Error::Undefined(_))));
        assert_eq!(max - max, Ok(Interval::ZERO));
        assert_eq!(max * dec!(1), Ok(max));

        let all = intv(Decimal::MIN, Decimal::MAX);
        assert!(matches!(all.width(), Err(Error::Undefined(_))));
        assert_eq!(all.midpoint(), Ok(Decimal::ZERO));
        assert!(matches!(max.midpoint(), Err(Error::Undefined(_))));
        assert!(matches!(
            all.distance(&Interval::ZERO),
            Err(Error::Undefined(_))
        ));
    }

    #[test]
    fn test_divide() {
        let a = intv(dec!(1), dec!(2));
        let b = intv(dec!(4), dec!(8));
        assert_eq!(a / b, Ok(intv(dec!(0.125), dec!(0.5))));
        assert_eq!(
            intv(dec!(-2), dec!(4)) / intv(dec!(-4), dec!(-2)),
            Ok(intv(dec!(-2), dec!(1))),
        );
        assert_eq!(a / dec!(2), Ok(intv(dec!(0.5), dec!(1))));

        // Quotients are computed directly, with no rounded reciprocal
        assert_eq!(
            Interval::new_single(dec!(6)) / dec!(3),
            Ok(Interval::new_single(dec!(2)))
        );
        assert_eq!(
            intv(dec!(2), dec!(5)) / intv(dec!(1), dec!(3)),
            Ok(intv(dec!(2) / dec!(3), dec!(5)))
        );

        let zero = intv(dec!(-1), dec!(1));
        assert_eq!(a / zero, Err(Error::Division(zero)));
        assert!(matches!(a / dec!(0), Err(Error::Division(_))));
        assert!(matches!(
            a / intv(dec!(0), dec!(3)),
            Err(Error::Division(_))
        ));
    }

    #[test]
    fn test_pow() {
        let a = intv(dec!(2), dec!(3));
        assert_eq!(a.pow(dec!(2)), Ok(intv(dec!(4), dec!(9))));
        assert_eq!(a.pow(dec!(1)), Ok(a));
        assert_eq!(
            intv(dec!(0), dec!(2)).pow(dec!(3)),
            Ok(intv(dec!(0), dec!(8)))
        );
        assert!(matches!(
            intv(dec!(-1), dec!(2)).pow(dec!(2)),
            Err(Error::Undefined(_))
        ));
        assert!(matches!(a.pow(dec!(-1)), Err(Error::Undefined(_))));
        assert!(matches!(a.pow(dec!(0)), Err(Error::Undefined(_))));
    }

    #[test]
    fn test_neg() {
        assert_eq!(-intv(dec!(-1), dec!(3)), intv(dec!(-3), dec!(1)));
    }

    #[test]
    fn test_distance() {
        let a = intv(dec!(1), dec!(5));
        let b = intv(dec!(2), dec!(3));
        assert_eq!(a.distance(&a), Ok(Decimal::ZERO));
        assert_eq!(a.distance(&b), Ok(dec!(3)));
        assert_eq!(b.distance(&a), Ok(dec!(3)));
    }

    #[test]
    fn test_contains() {
        let a = intv(dec!(1), dec!(5));
        assert!(a.contains(dec!(1)));
        assert!(a.contains(dec!(5)));
        assert!(!a.contains(dec!(5.01)));
        assert!(a.contains_interval(&intv(dec!(2), dec!(3))));
        assert!(a.contains_interval(&a));
        assert!(!intv(dec!(2), dec!(3)).contains_interval(&a));
        assert!(!a.straddles_zero());
        assert!(intv(dec!(-1), dec!(0)).straddles_zero());
        assert_eq!(a.width(), Ok(dec!(4)));
        assert_eq!(a.midpoint(), Ok(dec!(3)));
    }

    #[test]
    fn test_ord() {
        let a = intv(dec!(1), dec!(5));
        assert!(a < intv(dec!(1), dec!(6)));
        assert!(a < intv(dec!(2), dec!(3)));
        assert!(a > intv(dec!(0), dec!(9)));
    }

    #[test]
    fn test_display_parse() {
        let a = intv(dec!(1.5), dec!(2));
        assert_eq!(a.to_string(), "[1.5, 2]");
        assert_eq!("[1.5, 2]".parse::<Interval>(), Ok(a));
        assert_eq!(" 1.5,2 ".parse::<Interval>(), Ok(a));
        assert!(matches!(
            "1.5".parse::<Interval>(),
            Err(Error::TypeMismatch(_))
        ));
        assert!(matches!(
            "[a, 2]".parse::<Interval>(),
            Err(Error::TypeMismatch(_))
        ));
        assert!(matches!(
            "3,2".parse::<Interval>(),
            Err(Error::Configuration(_))
        ));
    }
}
