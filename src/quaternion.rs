//! Quaternion storage.
//!
//! Four independent components with no unit-length invariant and no
//! rotation algebra: this type carries quaternion-shaped data (construction,
//! equality, the componentwise operator overlay, conversion to and from
//! [`Vector4`]) and nothing more.

use core::fmt;

use crate::ops::{impl_approx_fields, impl_componentwise_ops, impl_components, impl_scalar_lhs_ops};
use crate::scalar::FloatScalar;
use crate::vector::Vector4;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: FloatScalar> Quaternion<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// All components set to `v`.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn cast<U: FloatScalar>(self) -> Option<Quaternion<U>> {
        Some(Quaternion {
            x: num_traits::cast(self.x)?,
            y: num_traits::cast(self.y)?,
            z: num_traits::cast(self.z)?,
            w: num_traits::cast(self.w)?,
        })
    }
}

impl<T: FloatScalar> From<Vector4<T>> for Quaternion<T> {
    #[inline]
    fn from(v: Vector4<T>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl<T: FloatScalar> From<Quaternion<T>> for Vector4<T> {
    #[inline]
    fn from(q: Quaternion<T>) -> Self {
        Vector4::new(q.x, q.y, q.z, q.w)
    }
}

impl<T: FloatScalar> From<[T; 4]> for Quaternion<T> {
    #[inline]
    fn from(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl<T: FloatScalar> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl_components!(Quaternion, FloatScalar, 4, x, y, z, w);
impl_componentwise_ops!(Quaternion, FloatScalar);
impl_scalar_lhs_ops!(Quaternion, f32, f64);
impl_approx_fields!(Quaternion, FloatScalar, x, y, z, w);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_equality() {
        let q = Quaternion::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(q, Quaternion::from([1.0, 2.0, 3.0, 4.0]));
        assert_ne!(q, Quaternion::zero());
        assert_eq!(q.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_vector4_round_trip() {
        let v = Vector4::new(0.1f64, 0.2, 0.3, 0.4);
        let q = Quaternion::from(v);
        assert_eq!(Vector4::from(q), v);
    }

    #[test]
    fn test_componentwise_overlay() {
        let a = Quaternion::new(1.0f64, 2.0, 3.0, 4.0);
        let b = Quaternion::new(4.0f64, 3.0, 2.0, 1.0);
        assert_eq!(a + b, Quaternion::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(a * 2.0, a + a);
        assert_eq!(-a + a, Quaternion::zero());
        assert_eq!(2.0 * a, a + a);
    }

    #[test]
    fn test_cast() {
        let q = Quaternion::new(1.5f64, -2.0, 0.25, 3.0);
        assert_eq!(q.cast::<f32>(), Some(Quaternion::new(1.5f32, -2.0, 0.25, 3.0)));
    }
}
