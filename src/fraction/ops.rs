use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Zero};

use super::Fraction;
use crate::error::FractionError;

/// Anything that can stand on either side of a fraction operator.
///
/// Mixed arithmetic and comparisons coerce the scalar side through
/// [`Operand::into_fraction`] and then run the fraction-by-fraction rule, so
/// `a + k` and `k + a` share one code path. Floats go through the lossy
/// [`Fraction::approximate`].
pub trait Operand: Copy {
    fn into_fraction(self) -> Result<Fraction, FractionError>;
}

impl Operand for Fraction {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Ok(self)
    }
}

macro_rules! integer_operand {
    ($($t:ty)*) => {$(
        impl Operand for $t {
            fn into_fraction(self) -> Result<Fraction, FractionError> {
                Ok(Fraction::from_integer(i64::from(self)))
            }
        }
    )*};
}

integer_operand!(i8 i16 i32 i64 u8 u16 u32);

impl Operand for f64 {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Fraction::approximate(self)
    }
}

impl Operand for f32 {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Fraction::approximate(f64::from(self))
    }
}

impl Fraction {
    // (a/b) + (c/d) = (ad + cb) / bd
    pub fn try_add<T: Operand>(self, rhs: T) -> Result<Self, FractionError> {
        let (a, b) = self.wide();
        let (c, d) = rhs.into_fraction()?.wide();

        Self::from_wide(a * d + c * b, b * d)
    }

    pub fn try_sub<T: Operand>(self, rhs: T) -> Result<Self, FractionError> {
        let (a, b) = self.wide();
        let (c, d) = rhs.into_fraction()?.wide();

        Self::from_wide(a * d - c * b, b * d)
    }

    pub fn try_mul<T: Operand>(self, rhs: T) -> Result<Self, FractionError> {
        let (a, b) = self.wide();
        let (c, d) = rhs.into_fraction()?.wide();

        Self::from_wide(a * c, b * d)
    }

    /// Fails with [`FractionError::ZeroDenominator`] when `rhs` is zero.
    pub fn try_div<T: Operand>(self, rhs: T) -> Result<Self, FractionError> {
        let (a, b) = self.wide();
        let (c, d) = rhs.into_fraction()?.wide();

        Self::from_wide(a * d, b * c)
    }
}

// Operators behave like the integer ones: a zero divisor or an overflow panics.
fn or_panic(result: Result<Fraction, FractionError>) -> Fraction {
    match result {
        Ok(fraction) => fraction,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! scalar_lhs_op {
    ($imp:ident, $method:ident, $try_method:ident; $($t:ty)*) => {$(
        impl $imp<Fraction> for $t {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                or_panic(self.into_fraction().and_then(|lhs| lhs.$try_method(rhs)))
            }
        }
    )*};
}

macro_rules! binary_op {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $try_method:ident) => {
        impl<T: Operand> $imp<T> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: T) -> Fraction {
                or_panic(self.$try_method(rhs))
            }
        }

        impl<T: Operand> $assign_imp<T> for Fraction {
            fn $assign_method(&mut self, rhs: T) {
                *self = or_panic(self.$try_method(rhs));
            }
        }

        scalar_lhs_op!($imp, $method, $try_method; i8 i16 i32 i64 u8 u16 u32 f32 f64);
    };
}

binary_op!(Add, add, AddAssign, add_assign, try_add);
binary_op!(Sub, sub, SubAssign, sub_assign, try_sub);
binary_op!(Mul, mul, MulAssign, mul_assign, try_mul);
binary_op!(Div, div, DivAssign, div_assign, try_div);

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        match self.numerator.checked_neg() {
            Some(numerator) => Fraction {
                numerator,
                denominator: self.denominator,
            },
            None => panic!("{}", FractionError::Overflow),
        }
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Fraction::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Fraction::ONE
    }
}

impl CheckedAdd for Fraction {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        self.try_add(*v).ok()
    }
}

impl CheckedSub for Fraction {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        self.try_sub(*v).ok()
    }
}

impl CheckedMul for Fraction {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        self.try_mul(*v).ok()
    }
}

impl CheckedDiv for Fraction {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        self.try_div(*v).ok()
    }
}
