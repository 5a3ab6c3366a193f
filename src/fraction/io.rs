use std::{
    fmt::{self, Display, Formatter},
    io::{self, Write},
    str::FromStr,
};

use super::Fraction;
use crate::error::ReadError;

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Fraction {
    /// Writes `numerator/denominator`, without a trailing newline.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{}", self)
    }
}

/// Reads two whitespace-separated integers, numerator first.
///
/// This is deliberately minimal: `"3/4"` or `"0.5"` are not accepted.
pub fn read_fraction(input: &str) -> Result<Fraction, ReadError> {
    let mut tokens = input.split_whitespace();

    let numerator = tokens.next().ok_or(ReadError::MissingInteger(0))?.parse::<i64>()?;
    let denominator = tokens.next().ok_or(ReadError::MissingInteger(1))?.parse::<i64>()?;

    if let Some(extra) = tokens.next() {
        return Err(ReadError::TrailingInput(extra.to_string()));
    }

    Ok(Fraction::new(numerator, denominator)?)
}

impl FromStr for Fraction {
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_fraction(s)
    }
}
