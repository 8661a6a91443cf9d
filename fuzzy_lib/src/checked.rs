//! Decimal arithmetic that reports overflow as an error instead of
//! panicking.

use crate::errors::{Error, Result};
use rust_decimal::Decimal;

fn apply(
    op: fn(Decimal, Decimal) -> Option<Decimal>,
    symbol: &str,
    left: Decimal,
    right: Decimal,
) -> Result<Decimal> {
    op(left, right).ok_or_else(|| {
        log::debug!("{left} {symbol} {right} overflows");
        Error::Undefined(format!("{left} {symbol} {right} overflows"))
    })
}

pub(crate) fn add(left: Decimal, right: Decimal) -> Result<Decimal> {
    apply(Decimal::checked_add, "+", left, right)
}

pub(crate) fn sub(left: Decimal, right: Decimal) -> Result<Decimal> {
    apply(Decimal::checked_sub, "-", left, right)
}

pub(crate) fn mul(left: Decimal, right: Decimal) -> Result<Decimal> {
    apply(Decimal::checked_mul, "*", left, right)
}

/// Callers must have excluded a zero divisor already
pub(crate) fn div(left: Decimal, right: Decimal) -> Result<Decimal> {
    apply(Decimal::checked_div, "/", left, right)
}
