//! Reduce fuzzy numbers to a single representative value.
//!
//! All functions here compute a weighted average over the alpha-cuts, where
//! the weight of each cut is its membership.  The top cut therefore counts
//! the most, and the bottom cut (membership 0) is ignored.

use crate::checked;
use crate::errors::{Error, Result};
use crate::fuzzy::{alpha, Fuzzy, LEVELS};
use crate::intervals::Interval;
use itertools::izip;
use rust_decimal::Decimal;

/// Sum of the membership of all levels
fn total_weight() -> Decimal {
    (0..LEVELS).map(alpha).sum()
}

/// Weighted average of f applied to the cuts of the same level in left and
/// right.  Fails if f fails on any level, or if the sum overflows.
pub fn binary(
    f: impl Fn(&Interval, &Interval) -> Result<Decimal>,
    left: &Fuzzy,
    right: &Fuzzy,
) -> Result<Decimal> {
    let mut total = Decimal::ZERO;
    for (level, l, r) in izip!(0..LEVELS, left.cuts(), right.cuts()) {
        total = checked::add(total, checked::mul(alpha(level), f(l, r)?)?)?;
    }
    checked::div(total, total_weight())
}

/// Weighted average of f applied to each cut
pub fn unary(
    f: impl Fn(&Interval) -> Result<Decimal>,
    value: &Fuzzy,
) -> Result<Decimal> {
    let mut total = Decimal::ZERO;
    for (a, cut) in value.iter() {
        total = checked::add(total, checked::mul(a, f(cut)?)?)?;
    }
    checked::div(total, total_weight())
}

/// How different two fuzzy numbers are.  This is zero for identical numbers.
pub fn distance(left: &Fuzzy, right: &Fuzzy) -> Result<Decimal> {
    binary(Interval::distance, left, right)
}

/// The amount of uncertainty
pub fn width(value: &Fuzzy) -> Result<Decimal> {
    unary(Interval::width, value)
}

/// The uncertainty relative to the magnitude of the value, i.e. the width of
/// each cut divided by its midpoint.
/// This is undefined when a cut is centered on zero.
pub fn risk(value: &Fuzzy) -> Result<Decimal> {
    unary(
        |cut| {
            let sum = checked::add(cut.low(), cut.high())?;
            if sum.is_zero() {
                log::debug!("no risk for {}, centered on zero", cut);
                return Err(Error::Undefined(format!(
                    "risk of {cut}, which is centered on zero"
                )));
            }
            checked::div(checked::mul(Decimal::TWO, cut.width()?)?, sum)
        },
        value,
    )
}

/// The weighted average of the midpoints, a crisp value representative of
/// the fuzzy number.
pub fn center(value: &Fuzzy) -> Result<Decimal> {
    unary(Interval::midpoint, value)
}
