//! Exact scalar arithmetic.
//!
//! Every coordinate and every derived value in the kernel is a [`Scalar`],
//! an arbitrary-precision rational. There is no [`IntoScalar`] impl for `f32`
//! or `f64`: approximate values belong to presentation code, not here.

use num_bigint::BigInt;
use num_rational::{BigRational, Ratio};
use num_traits::Signed;

/// Exact rational number used for all coordinates, quadrances and parameters.
pub type Scalar = BigRational;

/// Lossless conversion into a [`Scalar`].
pub trait IntoScalar {
    fn into_scalar(self) -> Scalar;
}

macro_rules! impl_into_scalar_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoScalar for $t {
                fn into_scalar(self) -> Scalar {
                    Scalar::from_integer(BigInt::from(self))
                }
            }
        )*
    };
}

impl_into_scalar_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_into_scalar_for_ratio {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoScalar for Ratio<$t> {
                fn into_scalar(self) -> Scalar {
                    Scalar::new(BigInt::from(*self.numer()), BigInt::from(*self.denom()))
                }
            }
        )*
    };
}

impl_into_scalar_for_ratio!(i32, i64);

impl IntoScalar for BigInt {
    fn into_scalar(self) -> Scalar {
        Scalar::from_integer(self)
    }
}

impl IntoScalar for BigRational {
    fn into_scalar(self) -> Scalar {
        self
    }
}

impl IntoScalar for &BigRational {
    fn into_scalar(self) -> Scalar {
        self.clone()
    }
}

/// Integer literal as a scalar.
pub fn integer(n: i64) -> Scalar {
    Scalar::from_integer(BigInt::from(n))
}

/// `numer / denom` as a reduced scalar.
///
/// Panics if `denom` is zero, like `Ratio::new`. Meant for literals.
pub fn ratio(numer: i64, denom: i64) -> Scalar {
    Scalar::new(BigInt::from(numer), BigInt::from(denom))
}

/// Rational square root, if `value` is the square of a rational.
///
/// `BigRational` is kept in lowest terms, so this holds exactly when the
/// numerator and denominator are both perfect squares.
pub fn exact_sqrt(value: &Scalar) -> Option<Scalar> {
    if value.is_negative() {
        return None;
    }
    let numer = value.numer().sqrt();
    let denom = value.denom().sqrt();
    if &numer * &numer == *value.numer() && &denom * &denom == *value.denom() {
        Some(Scalar::new(numer, denom))
    } else {
        None
    }
}
