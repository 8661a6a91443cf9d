//! Fuzzy numbers represented as stacks of nested closed intervals.
//!
//! A fuzzy number is approximated by 11 alpha-cuts, at membership levels
//! 0.0, 0.1, ..., 1.0.  Each cut is a closed [`Interval`] of values that
//! have at least that membership.  Arithmetic applies the interval
//! operation independently at each level (the extension principle):
//!
//! ```text
//!   alpha
//!    1.0          [--top--]
//!    0.5      [---------------]
//!    0.0  [-----------bottom-------]
//! ```
//!
//! All values are [`rust_decimal::Decimal`], so that financial computations
//! do not drift with rounding.  Operations that would overflow a decimal
//! return [`Error::Undefined`] rather than panicking.
//!
//! ```
//! use fuzzy_lib::{defuzzification::width, shapes::number};
//! use rust_decimal::Decimal;
//!
//! let rate = number(
//!     Decimal::new(11, 4), Decimal::new(12, 4), Decimal::new(14, 4),
//! ).unwrap();
//! let shifted = (&rate + Decimal::ONE).unwrap();
//! assert_eq!(width(&shifted), width(&rate));
//! ```

mod checked;
pub mod defuzzification;
pub mod errors;
pub mod fuzzy;
pub mod intervals;
pub mod plots;
pub mod shapes;

pub use crate::errors::{Error, Result};
pub use crate::fuzzy::Fuzzy;
pub use crate::intervals::Interval;
