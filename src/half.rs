//! IEEE 754 binary16 ⇄ binary32 conversion.
//!
//! Exact bit-pattern conversion: exponent rebias and mantissa shifting with
//! explicit zero, subnormal, Inf, and NaN handling. No float arithmetic is
//! involved, so results are identical on every target.

/// Expands a binary16 bit pattern to the `f32` with the same value.
///
/// Every half value is exactly representable in single precision, so this
/// direction is lossless: subnormal halves renormalize, Inf and NaN keep
/// their sign and payload.
pub fn f32_from_half(i: u16) -> f32 {
    let sign = u32::from(i & 0x8000) << 16;
    let mut exponent = u32::from(i) & 0x7c00;
    let ret = if exponent == 0 {
        let mut significand = u32::from(i & 0x03ff);
        if significand == 0 {
            // Zero
            sign
        } else {
            // Subnormal: shift the leading bit into the implicit position.
            significand <<= 1;
            while significand & 0x0400 == 0 {
                significand <<= 1;
                exponent += 1;
            }
            let exponent = (127 - 15 - exponent) << 23;
            let significand = (significand & 0x03ff) << 13;
            sign | exponent | significand
        }
    } else if exponent == 0x7c00 {
        // Inf or NaN, payload preserved
        sign | 0x7f80_0000 | (u32::from(i & 0x03ff) << 13)
    } else {
        // Normal: rebias 15 -> 127
        sign | ((u32::from(i & 0x7fff) + 0x1c000) << 13)
    };
    f32::from_bits(ret)
}

/// Truncates an `f32` to the nearest binary16 bit pattern.
///
/// Values below the smallest half subnormal round to signed zero; values at
/// or above the overflow threshold become Inf. NaN keeps its sign and the
/// top payload bits, falling back to a quiet pattern when the payload
/// truncates to zero.
pub fn half_from_f32(f: f32) -> u16 {
    let fbits = f.to_bits();
    let sign = ((fbits & 0x8000_0000) >> 16) as u16;
    let mut exponent = fbits & 0x7f80_0000;
    let mut significand = fbits & 0x007f_ffff;

    if exponent <= 0x3800_0000 {
        // Exponent underflow
        if exponent < 0x3300_0000 {
            // Zero
            return sign;
        }
        // Subnormal: denormalize with the implicit bit made explicit,
        // adding the round bit before the final shift.
        exponent >>= 23;
        significand |= 0x0080_0000;
        significand >>= 113 - exponent;
        significand += 0x0000_1000;
        return sign | (significand >> 13) as u16;
    }

    if exponent >= 0x4780_0000 {
        // Exponent overflow
        if exponent == 0x7f80_0000 && significand != 0 {
            // NaN
            significand >>= 13;
            if significand == 0 {
                return 0x7c01;
            }
            return sign | 0x7c00 | significand as u16;
        }
        // Inf
        return sign | 0x7c00;
    }

    // Nominal (the parts must be summed for correct rounding)
    exponent -= 0x3800_0000;
    significand += 0x0000_1000;
    sign + ((exponent >> 13) as u16) + ((significand >> 13) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALLEST_SUBNORMAL: u16 = 0x0001; // 2^-24
    const LARGEST_FINITE: u16 = 0x7bff; // 65504.0

    #[test]
    fn test_signed_zero() {
        assert_eq!(f32_from_half(0x0000).to_bits(), 0x0000_0000);
        assert_eq!(f32_from_half(0x8000).to_bits(), 0x8000_0000);
        assert_eq!(half_from_f32(0.0), 0x0000);
        assert_eq!(half_from_f32(-0.0), 0x8000);
    }

    #[test]
    fn test_infinities() {
        assert_eq!(f32_from_half(0x7c00), f32::INFINITY);
        assert_eq!(f32_from_half(0xfc00), f32::NEG_INFINITY);
        assert_eq!(half_from_f32(f32::INFINITY), 0x7c00);
        assert_eq!(half_from_f32(f32::NEG_INFINITY), 0xfc00);
    }

    #[test]
    fn test_nan() {
        assert!(f32_from_half(0x7e00).is_nan());
        assert!(f32_from_half(0xfe01).is_nan());
        let h = half_from_f32(f32::NAN);
        assert_eq!(h & 0x7c00, 0x7c00);
        assert_ne!(h & 0x03ff, 0);
    }

    #[test]
    fn test_boundary_values() {
        assert_eq!(f32_from_half(SMALLEST_SUBNORMAL), 2.0f32.powi(-24));
        assert_eq!(f32_from_half(LARGEST_FINITE), 65504.0);
        assert_eq!(half_from_f32(65504.0), LARGEST_FINITE);
        // Just past the largest finite half overflows to Inf.
        assert_eq!(half_from_f32(65520.0), 0x7c00);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(f32_from_half(0x3c00), 1.0);
        assert_eq!(f32_from_half(0xbc00), -1.0);
        assert_eq!(f32_from_half(0x3555), 0.333251953125);
        assert_eq!(half_from_f32(1.0), 0x3c00);
        assert_eq!(half_from_f32(-2.0), 0xc000);
    }

    #[test]
    fn test_round_trip_all_finite() {
        // Every finite half, both signs, survives half -> f32 -> half
        // bit-identically.
        for bits in 0..=LARGEST_FINITE {
            for h in [bits, bits | 0x8000] {
                let f = f32_from_half(h);
                assert_eq!(half_from_f32(f), h, "bits {:#06x}", h);
            }
        }
    }

    #[test]
    fn test_underflow_to_zero() {
        assert_eq!(half_from_f32(1.0e-10), 0x0000);
        assert_eq!(half_from_f32(-1.0e-10), 0x8000);
    }
}
