//! Complex numbers over a floating-point scalar.
//!
//! Addition, subtraction, and the scalar operators are componentwise like
//! every other container here; multiplication and division follow the
//! complex algebra instead, so `Mul`/`Div` between two complex values are
//! implemented by hand.

use core::fmt;

use crate::ops::{impl_approx_fields, impl_componentwise_ops, impl_components, impl_scalar_lhs_ops};
use crate::scalar::FloatScalar;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Complex<T> {
    pub real: T,
    pub imag: T,
}

impl<T: FloatScalar> Complex<T> {
    #[inline]
    pub const fn new(real: T, imag: T) -> Self {
        Self { real, imag }
    }

    /// The imaginary unit.
    #[inline]
    pub fn i() -> Self {
        Self::new(T::zero(), T::one())
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// From polar form: magnitude `rho` at angle `theta` radians.
    #[inline]
    pub fn from_polar(rho: T, theta: T) -> Self {
        Self::new(rho * theta.cos(), rho * theta.sin())
    }

    /// Magnitude.
    #[inline]
    pub fn abs(self) -> T {
        (self.real * self.real + self.imag * self.imag).sqrt()
    }

    /// Phase angle in radians, in `(-π, π]`.
    #[inline]
    pub fn arg(self) -> T {
        self.imag.atan2(self.real)
    }

    /// Squared magnitude.
    #[inline]
    pub fn norm(self) -> T {
        let a = self.abs();
        a * a
    }

    /// Complex conjugate.
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.real, -self.imag)
    }

    #[inline]
    pub fn cast<U: FloatScalar>(self) -> Option<Complex<U>> {
        Some(Complex {
            real: num_traits::cast(self.real)?,
            imag: num_traits::cast(self.imag)?,
        })
    }
}

impl<T: FloatScalar> core::ops::Mul for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.imag * rhs.real + self.real * rhs.imag,
        )
    }
}

/// Division by the conjugate over the squared magnitude. A zero divisor
/// produces Inf/NaN components.
impl<T: FloatScalar> core::ops::Div for Complex<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        let denom = rhs.real * rhs.real + rhs.imag * rhs.imag;
        Self::new(
            (self.real * rhs.real + self.imag * rhs.imag) / denom,
            (self.imag * rhs.real - self.real * rhs.imag) / denom,
        )
    }
}

impl<T: FloatScalar> core::ops::MulAssign for Complex<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: FloatScalar> core::ops::DivAssign for Complex<T> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

macro_rules! impl_complex_scalar_div {
    ($($s:ty),+) => {
        $(
            impl core::ops::Div<Complex<$s>> for $s {
                type Output = Complex<$s>;

                #[inline]
                fn div(self, rhs: Complex<$s>) -> Complex<$s> {
                    Complex::new(self, 0.0) / rhs
                }
            }
        )+
    };
}

impl_complex_scalar_div!(f32, f64);

impl<T: FloatScalar> From<T> for Complex<T> {
    /// A real number with zero imaginary part.
    #[inline]
    fn from(real: T) -> Self {
        Self::new(real, T::zero())
    }
}

impl<T: FloatScalar> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imag < T::zero() {
            write!(f, "{} - {}i", self.real, -self.imag)
        } else {
            write!(f, "{} + {}i", self.real, self.imag)
        }
    }
}

impl_components!(Complex, FloatScalar, 2, real, imag);
impl_componentwise_ops!(Complex, FloatScalar);
impl_scalar_lhs_ops!(Complex, f32, f64);
impl_approx_fields!(Complex, FloatScalar, real, imag);
