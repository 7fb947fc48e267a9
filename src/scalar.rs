//! Scalar dispatch for the component types.
//!
//! Every container in this crate is generic over a component scalar. The
//! traits here pick the precision-correct primitive operation for that
//! scalar at compile time; invoking a float-only operation on an integer
//! vector is a type error, not a runtime failure.

use core::fmt::{Debug, Display};
use num_traits::{Float, Num, NumCast, PrimInt, Signed};

/// Any scalar usable as a component: the primitive integers and floats.
pub trait Scalar: Copy + Num + NumCast + PartialOrd + Debug + Display + 'static {}

impl<T> Scalar for T where T: Copy + Num + NumCast + PartialOrd + Debug + Display + 'static {}

/// Fixed-width integer component scalar. Gates the bitwise and wrapping
/// operator families.
pub trait IntScalar: Scalar + PrimInt {}

impl<T> IntScalar for T where T: Scalar + PrimInt {}

/// Floating-point component scalar of a single supported precision.
///
/// `num_traits::Float` supplies the transcendental and rounding set
/// (sin..atanh, pow, exp/exp2, ln/log2, sqrt, floor, trunc, round, ceil,
/// mul_add) without upcasting; this trait adds the libc-style operations it
/// lacks plus the small constants the projection formulas need.
pub trait FloatScalar: Scalar + Float + Signed {
    /// Exactly 0.5.
    const HALF: Self;
    /// Exactly 2.0.
    const TWO: Self;

    /// Splits into fractional and integral parts, both carrying the sign
    /// of `self`.
    #[inline]
    fn modf(self) -> (Self, Self) {
        let integral = self.trunc();
        (self - integral, integral)
    }

    /// Decomposes into a significand in `[0.5, 1)` and a power-of-two
    /// exponent such that `f * 2^e == self`, by exact bit manipulation.
    /// Zero, infinities, and NaN return `(self, 0)`.
    fn frexp(self) -> (Self, i32);

    /// Computes `self * 2^exp` exactly, without intermediate overflow for
    /// exponents a finite result can absorb.
    fn ldexp(self, exp: i32) -> Self;
}

impl FloatScalar for f32 {
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;

    fn frexp(self) -> (Self, i32) {
        if self == 0.0 || !self.is_finite() {
            return (self, 0);
        }
        let bits = self.to_bits();
        let exponent = ((bits >> 23) & 0xff) as i32;
        if exponent == 0 {
            // Subnormal: renormalize by 2^64 and compensate.
            let (f, e) = (self * f32::from_bits(0x5f80_0000)).frexp();
            return (f, e - 64);
        }
        let f = f32::from_bits((bits & 0x807f_ffff) | (126 << 23));
        (f, exponent - 126)
    }

    fn ldexp(self, exp: i32) -> Self {
        let mut x = self;
        let mut e = exp;
        while e > 127 {
            x *= f32::from_bits(0x7f00_0000); // 2^127
            e -= 127;
        }
        while e < -126 {
            x *= f32::from_bits(0x0080_0000); // 2^-126
            e += 126;
        }
        // Remaining exponent is in normal range.
        x * f32::from_bits(((e + 127) as u32) << 23)
    }
}

impl FloatScalar for f64 {
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;

    fn frexp(self) -> (Self, i32) {
        if self == 0.0 || !self.is_finite() {
            return (self, 0);
        }
        let bits = self.to_bits();
        let exponent = ((bits >> 52) & 0x7ff) as i32;
        if exponent == 0 {
            let (f, e) = (self * f64::from_bits(0x43f0_0000_0000_0000)).frexp(); // 2^64
            return (f, e - 64);
        }
        let f = f64::from_bits((bits & 0x800f_ffff_ffff_ffff) | (1022 << 52));
        (f, exponent - 1022)
    }

    fn ldexp(self, exp: i32) -> Self {
        let mut x = self;
        let mut e = exp;
        while e > 1023 {
            x *= f64::from_bits(0x7fe0_0000_0000_0000); // 2^1023
            e -= 1023;
        }
        while e < -1022 {
            x *= f64::from_bits(0x0010_0000_0000_0000); // 2^-1022
            e += 1022;
        }
        x * f64::from_bits(((e + 1023) as u64) << 52)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modf_signs() {
        let (frac, int) = 2.75f32.modf();
        assert_eq!(int, 2.0);
        assert_eq!(frac, 0.75);

        let (frac, int) = (-2.75f64).modf();
        assert_eq!(int, -2.0);
        assert_eq!(frac, -0.75);
    }

    #[test]
    fn test_frexp_normal() {
        let (f, e) = 8.0f32.frexp();
        assert_eq!(f, 0.5);
        assert_eq!(e, 4);

        let (f, e) = 0.75f64.frexp();
        assert_eq!(f, 0.75);
        assert_eq!(e, 0);
    }

    #[test]
    fn test_frexp_subnormal() {
        let x = f32::from_bits(1); // smallest subnormal, 2^-149
        let (f, e) = x.frexp();
        assert_eq!(f, 0.5);
        assert_eq!(e, -148);
        assert_eq!(f.ldexp(e), x);
    }

    #[test]
    fn test_frexp_special() {
        assert_eq!(0.0f64.frexp(), (0.0, 0));
        let (f, e) = f32::INFINITY.frexp();
        assert!(f.is_infinite());
        assert_eq!(e, 0);
    }

    #[test]
    fn test_ldexp_round_trip() {
        for &x in &[1.0f64, -3.5, 0.1, 1e300, 1e-300] {
            let (f, e) = x.frexp();
            assert_eq!(f.ldexp(e), x);
        }
    }

    #[test]
    fn test_ldexp_extreme_exponent() {
        // Subnormal input scaled up past what a single power of two holds.
        let tiny = f32::from_bits(1);
        assert_eq!(tiny.ldexp(149), 1.0);
        assert_eq!(1.0f32.ldexp(-149), tiny);
    }
}
