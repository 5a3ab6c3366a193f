pub mod dispatcher;

pub mod error;

pub mod fraction;

pub mod prelude {
    pub use crate::dispatcher::{DispatchResult, Dispatcher};
    pub use crate::error::{FractionError, ReadError};
    pub use crate::fraction::{gcd, read_fraction, Fraction, Operand, FLOAT_DENOMINATOR_CAP};
}
