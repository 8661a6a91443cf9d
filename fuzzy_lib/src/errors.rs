use crate::intervals::Interval;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A fuzzy number cannot be built from the given parameters
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The divisor contains zero, so its reciprocal is unbounded
    #[error("division by an interval containing zero: {0}")]
    Division(Interval),

    /// Input does not describe the expected kind of value
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// The result is not a meaningful number (infinity, NaN,...)
    #[error("undefined result: {0}")]
    Undefined(String),
}

pub type Result<T> = std::result::Result<T, Error>;
