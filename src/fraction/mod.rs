use log::{debug, trace};

use crate::error::FractionError;

mod cmp;
mod convert;
mod io;
mod ops;

#[cfg(test)]
mod proptests;

pub use io::read_fraction;
pub use ops::Operand;

/// Largest denominator [`Fraction::approximate`] will scale a float up to.
pub const FLOAT_DENOMINATOR_CAP: i64 = 1000;

/// A rational number kept in lowest terms with a positive denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

/// Greatest common divisor by Euclid's algorithm, `gcd(a, 0) == a`.
pub fn gcd(a: u128, b: u128) -> u128 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

impl Fraction {
    pub const ZERO: Fraction = Fraction::from_integer(0);

    pub const ONE: Fraction = Fraction::from_integer(1);

    pub fn new(numerator: i64, denominator: i64) -> Result<Self, FractionError> {
        Self::from_wide(i128::from(numerator), i128::from(denominator))
    }

    pub const fn from_integer(value: i64) -> Self {
        Fraction {
            numerator: value,
            denominator: 1,
        }
    }

    /// Lossy conversion of a float.
    ///
    /// The value is scaled by 10, 100, ... until it is integral or the scale
    /// reaches [`FLOAT_DENOMINATOR_CAP`], then rounded. So `0.57` becomes
    /// `57/100`, but `1.0 / 3.0` becomes `333/1000`.
    pub fn approximate(value: f64) -> Result<Self, FractionError> {
        if !value.is_finite() {
            return Err(FractionError::NotFinite);
        }

        let mut scaled = value;
        let mut denominator = 1;

        // rescale from `value` each time so rounding errors don't compound
        while !is_whole(scaled) && denominator < FLOAT_DENOMINATOR_CAP {
            denominator *= 10;
            scaled = value * denominator as f64;
        }

        if !is_whole(scaled) {
            debug!("{} rounded to a denominator of {}", value, denominator);
        }

        let scaled = scaled.round();

        // i64::MIN is exactly representable, i64::MAX is not
        if scaled < i64::MIN as f64 || scaled >= -(i64::MIN as f64) {
            trace!("{} is out of range for a fraction", value);
            return Err(FractionError::Overflow);
        }

        Self::new(scaled as i64, denominator)
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn to_float(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Integer part, truncated toward zero.
    pub fn to_integer(&self) -> i64 {
        self.numerator / self.denominator
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    pub fn signum(&self) -> i64 {
        self.numerator.signum()
    }

    pub fn abs(self) -> Self {
        if self.numerator < 0 {
            -self
        } else {
            self
        }
    }

    /// Unary plus.
    pub fn pos(self) -> Self {
        self
    }

    pub fn try_recip(self) -> Result<Self, FractionError> {
        Self::from_wide(i128::from(self.denominator), i128::from(self.numerator))
    }

    /// `++x`: adds one and returns the new value.
    pub fn pre_increment(&mut self) -> Self {
        *self += 1i64;
        *self
    }

    /// `x++`: adds one and returns the value it had before.
    pub fn post_increment(&mut self) -> Self {
        let old = *self;
        *self += 1i64;
        old
    }

    pub fn pre_decrement(&mut self) -> Self {
        *self -= 1i64;
        *self
    }

    pub fn post_decrement(&mut self) -> Self {
        let old = *self;
        *self -= 1i64;
        old
    }

    pub(crate) fn wide(&self) -> (i128, i128) {
        (i128::from(self.numerator), i128::from(self.denominator))
    }

    // Every constructor ends up here: validates, moves the sign up and reduces.
    pub(crate) fn from_wide(numerator: i128, denominator: i128) -> Result<Self, FractionError> {
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }

        let (numerator, denominator) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        // denominator > 0, so the divisor is at least 1 and fits back into i128
        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i128;

        match (
            i64::try_from(numerator / divisor),
            i64::try_from(denominator / divisor),
        ) {
            (Ok(numerator), Ok(denominator)) => Ok(Fraction {
                numerator,
                denominator,
            }),
            _ => {
                trace!("{}/{} overflows", numerator, denominator);
                Err(FractionError::Overflow)
            }
        }
    }
}

// Within a few ulps of an integer; `0.57 * 100.0` is `56.99999999999999`.
fn is_whole(x: f64) -> bool {
    (x - x.round()).abs() <= 64.0 * f64::EPSILON * x.abs().max(1.0)
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}
