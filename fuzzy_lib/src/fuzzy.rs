use crate::errors::{Error, Result};
use crate::intervals::Interval;
use itertools::{izip, Itertools};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Number of alpha-cuts in a fuzzy number
pub const LEVELS: usize = 11;

/// The membership associated with a given level, from 0 (bottom) to 1 (top)
#[must_use]
pub fn alpha(level: usize) -> Decimal {
    Decimal::from(level) / Decimal::from(LEVELS - 1)
}

/// A fuzzy number, stored as its alpha-cuts.
///
/// The cut at index `i` contains all values whose membership is at least
/// `alpha(i)`.  Higher memberships are expected to give narrower intervals,
/// so that each cut is included in the one below it:
///
/// ```text
///    alpha=1.0            [-----]            top
///    alpha=0.9           [-------]
///    ...
///    alpha=0.0    [-------------------]      bottom
/// ```
///
/// [`Fuzzy::new`] does not enforce this nesting (see
/// [`Fuzzy::new_nested`]).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Fuzzy {
    cuts: [Interval; LEVELS],
}

impl Fuzzy {
    /// All cuts are `[0, 0]`
    pub const ZERO: Fuzzy = Fuzzy {
        cuts: [Interval::ZERO; LEVELS],
    };

    /// Build a fuzzy number from its alpha-cuts, ordered from the bottom
    /// (membership 0) to the top (membership 1).  There must be exactly
    /// [`LEVELS`] of them.
    pub fn new(cuts: impl IntoIterator<Item = Interval>) -> Result<Self> {
        let cuts: Vec<Interval> = cuts.into_iter().collect();
        let count = cuts.len();
        let cuts: [Interval; LEVELS] = cuts.try_into().map_err(|_| {
            Error::Configuration(format!(
                "expected {LEVELS} alpha-cuts, got {count}"
            ))
        })?;
        let result = Fuzzy { cuts };
        if !result.is_nested() {
            log::debug!("alpha-cuts are not nested: {:?}", result.cuts);
        }
        Ok(result)
    }

    /// Same as [`Fuzzy::new`], but also rejects stacks where a cut is not
    /// included in the cut just below it.
    pub fn new_nested(cuts: impl IntoIterator<Item = Interval>) -> Result<Self> {
        let result = Self::new(cuts)?;
        if result.is_nested() {
            Ok(result)
        } else {
            Err(Error::Configuration(
                "each alpha-cut must be included in the one below".into(),
            ))
        }
    }

    /// A crisp interval: every cut is the same
    #[must_use]
    pub const fn new_crisp(cut: Interval) -> Self {
        Fuzzy {
            cuts: [cut; LEVELS],
        }
    }

    /// Whether cuts shrink (or stay the same) as membership increases
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.cuts
            .iter()
            .tuple_windows()
            .all(|(below, above)| below.contains_interval(above))
    }

    /// The cut with membership 0, i.e. all possible values
    #[must_use]
    pub fn bottom(&self) -> &Interval {
        let [bottom, ..] = &self.cuts;
        bottom
    }

    /// The cut with membership 1, i.e. the most likely values
    #[must_use]
    pub fn top(&self) -> &Interval {
        let [.., top] = &self.cuts;
        top
    }

    #[must_use]
    pub fn cut(&self, level: usize) -> Option<&Interval> {
        self.cuts.get(level)
    }

    #[must_use]
    pub fn cuts(&self) -> &[Interval; LEVELS] {
        &self.cuts
    }

    /// Iterate over the cuts from bottom to top, along with their membership
    #[must_use]
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = (Decimal, &Interval)>
           + ExactSizeIterator
           + '_ {
        self.cuts.iter().enumerate().map(|(idx, c)| (alpha(idx), c))
    }

    /// Combine two fuzzy numbers level by level.  Cuts from different levels
    /// never interact.  Stops at the first failing level.
    pub fn operation(
        &self,
        right: &Fuzzy,
        f: impl Fn(&Interval, &Interval) -> Result<Interval>,
    ) -> Result<Fuzzy> {
        let mut cuts = [Interval::ZERO; LEVELS];
        for (out, l, r) in izip!(cuts.iter_mut(), &self.cuts, &right.cuts) {
            *out = f(l, r)?;
        }
        Ok(Fuzzy { cuts })
    }

    /// Apply f to every cut
    #[must_use]
    pub fn map(&self, f: impl Fn(&Interval) -> Interval) -> Fuzzy {
        Fuzzy {
            cuts: self.cuts.map(|c| f(&c)),
        }
    }

    pub fn try_map(
        &self,
        f: impl Fn(&Interval) -> Result<Interval>,
    ) -> Result<Fuzzy> {
        let mut cuts = self.cuts;
        for c in cuts.iter_mut() {
            *c = f(c)?;
        }
        Ok(Fuzzy { cuts })
    }

    /// Raise every cut to the given power, see [`Interval::pow`]
    pub fn pow(&self, exponent: Decimal) -> Result<Fuzzy> {
        self.try_map(|c| c.pow(exponent))
    }
}

impl PartialEq for Fuzzy {
    fn eq(&self, other: &Self) -> bool {
        self.cuts.iter().zip(other.cuts.iter()).all(|(l, r)| l == r)
    }
}

impl Eq for Fuzzy {}

impl Ord for Fuzzy {
    /// Lexicographic, starting from the bottom cut
    fn cmp(&self, other: &Self) -> Ordering {
        self.cuts.iter().cmp(other.cuts.iter())
    }
}

impl PartialOrd for Fuzzy {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Fuzzy {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for cut in &self.cuts {
            cut.hash(state);
        }
    }
}

impl std::fmt::Display for Fuzzy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.bottom(), self.top())
    }
}

///   &Fuzzy + &Fuzzy
impl core::ops::Add<&Fuzzy> for &Fuzzy {
    type Output = Result<Fuzzy>;

    fn add(self, rhs: &Fuzzy) -> Self::Output {
        self.operation(rhs, Interval::add)
    }
}

///   &Fuzzy - &Fuzzy
impl core::ops::Sub<&Fuzzy> for &Fuzzy {
    type Output = Result<Fuzzy>;

    fn sub(self, rhs: &Fuzzy) -> Self::Output {
        self.operation(rhs, Interval::subtract)
    }
}

///   &Fuzzy * &Fuzzy
impl core::ops::Mul<&Fuzzy> for &Fuzzy {
    type Output = Result<Fuzzy>;

    fn mul(self, rhs: &Fuzzy) -> Self::Output {
        self.operation(rhs, Interval::multiply)
    }
}

///   &Fuzzy / &Fuzzy
impl core::ops::Div<&Fuzzy> for &Fuzzy {
    type Output = Result<Fuzzy>;

    /// Fails if any cut of rhs contains zero
    fn div(self, rhs: &Fuzzy) -> Self::Output {
        self.operation(rhs, Interval::divide)
    }
}

///   &Fuzzy + Decimal
impl core::ops::Add<Decimal> for &Fuzzy {
    type Output = Result<Fuzzy>;

    fn add(self, rhs: Decimal) -> Self::Output {
        let scalar = Interval::new_single(rhs);
        self.try_map(|c| Interval::add(c, &scalar))
    }
}

///   &Fuzzy - Decimal
impl core::ops::Sub<Decimal> for &Fuzzy {
    type Output = Result<Fuzzy>;

    fn sub(self, rhs: Decimal) -> Self::Output {
        let scalar = Interval::new_single(rhs);
        self.try_map(|c| c.subtract(&scalar))
    }
}

///   &Fuzzy * Decimal
impl core::ops::Mul<Decimal> for &Fuzzy {
    type Output = Result<Fuzzy>;

    fn mul(self, rhs: Decimal) -> Self::Output {
        let scalar = Interval::new_single(rhs);
        self.try_map(|c| c.multiply(&scalar))
    }
}

///   &Fuzzy / Decimal
impl core::ops::Div<Decimal> for &Fuzzy {
    type Output = Result<Fuzzy>;

    fn div(self, rhs: Decimal) -> Self::Output {
        let scalar = Interval::new_single(rhs);
        self.try_map(|c| c.divide(&scalar))
    }
}

///   Decimal + &Fuzzy
impl core::ops::Add<&Fuzzy> for Decimal {
    type Output = Result<Fuzzy>;

    fn add(self, rhs: &Fuzzy) -> Self::Output {
        rhs + self
    }
}

///   Decimal - &Fuzzy
impl core::ops::Sub<&Fuzzy> for Decimal {
    type Output = Result<Fuzzy>;

    fn sub(self, rhs: &Fuzzy) -> Self::Output {
        let scalar = Interval::new_single(self);
        rhs.try_map(|c| scalar.subtract(c))
    }
}

///   Decimal * &Fuzzy
impl core::ops::Mul<&Fuzzy> for Decimal {
    type Output = Result<Fuzzy>;

    fn mul(self, rhs: &Fuzzy) -> Self::Output {
        rhs * self
    }
}

///   Decimal / &Fuzzy
impl core::ops::Div<&Fuzzy> for Decimal {
    type Output = Result<Fuzzy>;

    /// Fails if any cut of rhs contains zero
    fn div(self, rhs: &Fuzzy) -> Self::Output {
        let scalar = Interval::new_single(self);
        rhs.try_map(|c| scalar.divide(c))
    }
}

///   -&Fuzzy
impl core::ops::Neg for &Fuzzy {
    type Output = Fuzzy;

    fn neg(self) -> Self::Output {
        self.map(|c| -*c)
    }
}

///   -Fuzzy
impl core::ops::Neg for Fuzzy {
    type Output = Fuzzy;

    fn neg(self) -> Self::Output {
        -&self
    }
}

/// Operators on owned values, forwarding to the implementation on
/// references.  Like the latter, they all fail on overflow.
macro_rules! forward_owned_binop {
    ($trait:ident, $method:ident) => {
        impl core::ops::$trait<Fuzzy> for Fuzzy {
            type Output = Result<Fuzzy>;

            fn $method(self, rhs: Fuzzy) -> Self::Output {
                core::ops::$trait::$method(&self, &rhs)
            }
        }

        impl core::ops::$trait<&Fuzzy> for Fuzzy {
            type Output = Result<Fuzzy>;

            fn $method(self, rhs: &Fuzzy) -> Self::Output {
                core::ops::$trait::$method(&self, rhs)
            }
        }

        impl core::ops::$trait<Fuzzy> for &Fuzzy {
            type Output = Result<Fuzzy>;

            fn $method(self, rhs: Fuzzy) -> Self::Output {
                core::ops::$trait::$method(self, &rhs)
            }
        }

        impl core::ops::$trait<Decimal> for Fuzzy {
            type Output = Result<Fuzzy>;

            fn $method(self, rhs: Decimal) -> Self::Output {
                core::ops::$trait::$method(&self, rhs)
            }
        }

        impl core::ops::$trait<Fuzzy> for Decimal {
            type Output = Result<Fuzzy>;

            fn $method(self, rhs: Fuzzy) -> Self::Output {
                core::ops::$trait::$method(self, &rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);
forward_owned_binop!(Div, div);
