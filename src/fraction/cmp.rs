use std::cmp::Ordering;

use super::Fraction;

// Denominators are positive, so a/b < c/d exactly when ad < cb.
impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.wide();
        let (c, d) = other.wide();

        (a * d).cmp(&(c * b))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Fraction {
    fn cmp_integer(&self, value: i128) -> Ordering {
        let (numerator, denominator) = self.wide();

        numerator.cmp(&(value * denominator))
    }
}

macro_rules! integer_cmp {
    ($($t:ty)*) => {$(
        impl PartialEq<$t> for Fraction {
            fn eq(&self, other: &$t) -> bool {
                self.cmp_integer(i128::from(*other)) == Ordering::Equal
            }
        }

        impl PartialEq<Fraction> for $t {
            fn eq(&self, other: &Fraction) -> bool {
                other.eq(self)
            }
        }

        impl PartialOrd<$t> for Fraction {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(self.cmp_integer(i128::from(*other)))
            }
        }

        impl PartialOrd<Fraction> for $t {
            fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    )*};
}

integer_cmp!(i8 i16 i32 i64 u8 u16 u32);

// Against floats the fraction is converted with `to_float`, so the result is
// only as precise as an f64 quotient. NaN is unordered with everything.
macro_rules! float_cmp {
    ($($t:ty)*) => {$(
        impl PartialEq<$t> for Fraction {
            fn eq(&self, other: &$t) -> bool {
                self.to_float() == f64::from(*other)
            }
        }

        impl PartialEq<Fraction> for $t {
            fn eq(&self, other: &Fraction) -> bool {
                other.eq(self)
            }
        }

        impl PartialOrd<$t> for Fraction {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.to_float().partial_cmp(&f64::from(*other))
            }
        }

        impl PartialOrd<Fraction> for $t {
            fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    )*};
}

float_cmp!(f32 f64);
