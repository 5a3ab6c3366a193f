use num_traits::{FromPrimitive, ToPrimitive};

use super::Fraction;
use crate::error::FractionError;

macro_rules! from_integer {
    ($($t:ty)*) => {$(
        impl From<$t> for Fraction {
            fn from(value: $t) -> Self {
                Fraction::from_integer(i64::from(value))
            }
        }
    )*};
}

from_integer!(i8 i16 i32 i64 u8 u16 u32);

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Fraction::approximate(value)
    }
}

impl TryFrom<f32> for Fraction {
    type Error = FractionError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Fraction::approximate(f64::from(value))
    }
}

impl From<Fraction> for f64 {
    fn from(value: Fraction) -> Self {
        value.to_float()
    }
}

impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        Some(self.to_integer())
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.to_integer()).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.to_float())
    }
}

impl FromPrimitive for Fraction {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Fraction::from_integer(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        i64::try_from(n).ok().map(Fraction::from_integer)
    }

    fn from_f64(n: f64) -> Option<Self> {
        Fraction::approximate(n).ok()
    }
}
