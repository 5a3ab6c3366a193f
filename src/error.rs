use std::num::ParseIntError;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FractionError {
    #[error("denominator can't be zero")]
    ZeroDenominator,

    #[error("fraction does not fit in 64-bit numerator/denominator")]
    Overflow,

    #[error("NaN or infinite value has no fraction form")]
    NotFinite,
}

/// Errors from reading a fraction out of text (`"<numerator> <denominator>"`).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReadError {
    #[error("expected two integers, found {0}")]
    MissingInteger(usize),

    #[error("invalid integer: {0}")]
    InvalidInteger(#[from] ParseIntError),

    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),

    #[error(transparent)]
    Fraction(#[from] FractionError),
}
