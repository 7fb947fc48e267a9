//! Fixed-size vectors generic over the component scalar.

use core::fmt;

use crate::ops::{
    impl_approx_fields, impl_componentwise_ops, impl_components, impl_integer_ops,
    impl_scalar_lhs_div, impl_scalar_lhs_ops, impl_vector_mul_div,
};
use crate::scalar::{FloatScalar, Scalar};

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

/// 3D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// 4D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// 2-component boolean mask, the result of a componentwise comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BVector2 {
    pub x: bool,
    pub y: bool,
}

/// 3-component boolean mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BVector3 {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

/// 4-component boolean mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BVector4 {
    pub x: bool,
    pub y: bool,
    pub z: bool,
    pub w: bool,
}

macro_rules! impl_bvector {
    ($BVec:ident, $($field:ident),+) => {
        impl $BVec {
            #[inline]
            pub const fn new($($field: bool),+) -> Self {
                Self { $($field),+ }
            }

            /// True when at least one component is true.
            #[inline]
            pub fn any(self) -> bool {
                $(self.$field)||+
            }

            /// True when every component is true.
            #[inline]
            pub fn all(self) -> bool {
                $(self.$field)&&+
            }
        }

        impl core::ops::Not for $BVec {
            type Output = Self;
            #[inline]
            fn not(self) -> Self {
                Self { $($field: !self.$field),+ }
            }
        }
    };
}

impl_bvector!(BVector2, x, y);
impl_bvector!(BVector3, x, y, z);
impl_bvector!(BVector4, x, y, z, w);

macro_rules! impl_vector {
    ($Vec:ident, $BVec:ident, $n:expr, ($($tv:ident),+), $($field:ident => $idx:expr),+) => {
        impl<T: Scalar> $Vec<T> {
            /// Number of components.
            pub const LEN: usize = $n;

            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// All components set to `v`.
            #[inline]
            pub fn splat(v: T) -> Self {
                Self { $($field: v),+ }
            }

            #[inline]
            pub fn zero() -> Self {
                Self::splat(T::zero())
            }

            #[inline]
            pub fn one() -> Self {
                Self::splat(T::one())
            }

            #[inline]
            pub fn dot(self, other: Self) -> T {
                crate::ops::Components::fold(self * other, T::zero(), |acc, c| acc + c)
            }

            /// Squared Euclidean length, exact in the component type.
            #[inline]
            pub fn length_squared(self) -> T {
                self.dot(self)
            }

            #[inline]
            pub fn to_array(self) -> [T; $n] {
                [$(self.$field),+]
            }

            /// Converts every component to `U`, or `None` when any component
            /// does not fit.
            #[inline]
            pub fn cast<U: Scalar>(self) -> Option<$Vec<U>> {
                Some($Vec { $($field: num_traits::cast(self.$field)?),+ })
            }

            /// Column `c` of a matrix under construction: component `r` is
            /// `f(r, c)`.
            #[inline]
            pub(crate) fn from_fn_col(c: usize, f: &mut impl FnMut(usize, usize) -> T) -> Self {
                Self { $($field: f($idx, c)),+ }
            }

            #[inline]
            pub fn equal(self, other: Self) -> $BVec {
                $BVec { $($field: self.$field == other.$field),+ }
            }

            #[inline]
            pub fn not_equal(self, other: Self) -> $BVec {
                $BVec { $($field: self.$field != other.$field),+ }
            }

            #[inline]
            pub fn less_than(self, other: Self) -> $BVec {
                $BVec { $($field: self.$field < other.$field),+ }
            }

            #[inline]
            pub fn less_than_equal(self, other: Self) -> $BVec {
                $BVec { $($field: self.$field <= other.$field),+ }
            }

            #[inline]
            pub fn greater_than(self, other: Self) -> $BVec {
                $BVec { $($field: self.$field > other.$field),+ }
            }

            #[inline]
            pub fn greater_than_equal(self, other: Self) -> $BVec {
                $BVec { $($field: self.$field >= other.$field),+ }
            }
        }

        impl<T: FloatScalar> $Vec<T> {
            #[inline]
            pub fn length(self) -> T {
                self.length_squared().sqrt()
            }

            #[inline]
            pub fn distance(self, other: Self) -> T {
                (other - self).length()
            }

            /// Unit vector in the direction of `self`.
            ///
            /// Divides by the length unconditionally: a zero-length input
            /// yields NaN components, which then surface in any downstream
            /// arithmetic instead of being masked.
            #[inline]
            pub fn normalized(self) -> Self {
                self / self.length()
            }

            /// Like [`normalized`](Self::normalized), but a zero-length
            /// input yields the zero vector.
            #[inline]
            pub fn normalize_or_zero(self) -> Self {
                let len = self.length();
                if len > T::zero() {
                    self / len
                } else {
                    Self::zero()
                }
            }

            #[inline]
            pub fn lerp(self, other: Self, t: T) -> Self {
                self + (other - self) * t
            }

            /// Angle to `other` in radians, in `[0, π]`. The cosine is
            /// clamped so rounding never pushes it outside acos's domain.
            #[inline]
            pub fn angle(self, other: Self) -> T {
                let cos = self.dot(other) / (self.length() * other.length());
                cos.min(T::one()).max(-T::one()).acos()
            }
        }

        impl<T> core::ops::Index<usize> for $Vec<T> {
            type Output = T;

            #[inline]
            fn index(&self, i: usize) -> &T {
                match i {
                    $($idx => &self.$field,)+
                    _ => panic!("component index {} out of range for {}", i, stringify!($Vec)),
                }
            }
        }

        impl<T> core::ops::IndexMut<usize> for $Vec<T> {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut T {
                match i {
                    $($idx => &mut self.$field,)+
                    _ => panic!("component index {} out of range for {}", i, stringify!($Vec)),
                }
            }
        }

        impl<T: Scalar> From<[T; $n]> for $Vec<T> {
            #[inline]
            fn from(a: [T; $n]) -> Self {
                Self { $($field: a[$idx]),+ }
            }
        }

        impl<T: Scalar> From<$Vec<T>> for [T; $n] {
            #[inline]
            fn from(v: $Vec<T>) -> Self {
                v.to_array()
            }
        }

        impl<T: Scalar> From<($($tv,)+)> for $Vec<T> {
            #[inline]
            fn from(($($field,)+): ($($tv,)+)) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T: Scalar> fmt::Display for $Vec<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "(")?;
                let mut first = true;
                $(
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{}", self.$field)?;
                )+
                let _ = first;
                write!(f, ")")
            }
        }

        impl IntVectorExt for $Vec<i8> {
            type Promoted = $Vec<f64>;
            impl_int_vector_body!($Vec, $($field),+);
        }
        impl IntVectorExt for $Vec<i16> {
            type Promoted = $Vec<f64>;
            impl_int_vector_body!($Vec, $($field),+);
        }
        impl IntVectorExt for $Vec<i32> {
            type Promoted = $Vec<f64>;
            impl_int_vector_body!($Vec, $($field),+);
        }
        impl IntVectorExt for $Vec<i64> {
            type Promoted = $Vec<f64>;
            impl_int_vector_body!($Vec, $($field),+);
        }
        impl IntVectorExt for $Vec<isize> {
            type Promoted = $Vec<f64>;
            impl_int_vector_body!($Vec, $($field),+);
        }
        impl IntVectorExt for $Vec<u8> {
            type Promoted = $Vec<f64>;
            impl_int_vector_body!($Vec, $($field),+);
        }
        impl IntVectorExt for $Vec<u16> {
            type Promoted = $Vec<f64>;
            impl_int_vector_body!($Vec, $($field),+);
        }
        impl IntVectorExt for $Vec<u32> {
            type Promoted = $Vec<f64>;
            impl_int_vector_body!($Vec, $($field),+);
        }
        impl IntVectorExt for $Vec<u64> {
            type Promoted = $Vec<f64>;
            impl_int_vector_body!($Vec, $($field),+);
        }
        impl IntVectorExt for $Vec<usize> {
            type Promoted = $Vec<f64>;
            impl_int_vector_body!($Vec, $($field),+);
        }
    };
}

/// Float-promoting measurements for integer vectors.
///
/// Integer components keep `length_squared` exact in `T`; the operations
/// that need real division or a square root widen to `f64` first.
pub trait IntVectorExt: Copy {
    /// The same shape with `f64` components.
    type Promoted;

    fn length(self) -> f64;
    fn angle(self, other: Self) -> f64;
    fn normalized(self) -> Self::Promoted;
}

macro_rules! impl_int_vector_body {
    ($Vec:ident, $($field:ident),+) => {
        #[inline]
        fn length(self) -> f64 {
            self.promote().length()
        }

        #[inline]
        fn angle(self, other: Self) -> f64 {
            self.promote().angle(other.promote())
        }

        #[inline]
        fn normalized(self) -> $Vec<f64> {
            self.promote().normalized()
        }
    };
}

macro_rules! impl_promote {
    ($Vec:ident, $($s:ty),+) => {
        $(
            impl $Vec<$s> {
                #[inline]
                fn promote(self) -> $Vec<f64> {
                    // Widening the primitive integers to f64 cannot fail.
                    self.cast().unwrap_or_else(|| $Vec::splat(f64::NAN))
                }
            }
        )+
    };
}

impl_vector!(Vector2, BVector2, 2, (T, T), x => 0, y => 1);
impl_vector!(Vector3, BVector3, 3, (T, T, T), x => 0, y => 1, z => 2);
impl_vector!(Vector4, BVector4, 4, (T, T, T, T), x => 0, y => 1, z => 2, w => 3);

impl_promote!(Vector2, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_promote!(Vector3, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_promote!(Vector4, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Scalar> Vector2<T> {
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Counter-clockwise perpendicular.
    #[inline]
    pub fn perpendicular(self) -> Self
    where
        T: num_traits::Signed,
    {
        Self::new(-self.y, self.x)
    }

    /// 2D cross product magnitude, the z of the 3D cross of the embeddings.
    #[inline]
    pub fn cross(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn extend(self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }
}

impl<T: Scalar> Vector3<T> {
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Drops the z component.
    #[inline]
    pub fn truncate(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn xy(self) -> Vector2<T> {
        self.truncate()
    }
}

impl<T: Scalar> Vector4<T> {
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn unit_w() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Drops the w component.
    #[inline]
    pub fn truncate(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn xyz(self) -> Vector3<T> {
        self.truncate()
    }

    #[inline]
    pub fn xy(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }
}

impl_components!(Vector2, Scalar, 2, x, y);
impl_components!(Vector3, Scalar, 3, x, y, z);
impl_components!(Vector4, Scalar, 4, x, y, z, w);

impl_componentwise_ops!(Vector2, Scalar);
impl_componentwise_ops!(Vector3, Scalar);
impl_componentwise_ops!(Vector4, Scalar);

impl_vector_mul_div!(Vector2);
impl_vector_mul_div!(Vector3);
impl_vector_mul_div!(Vector4);

impl_integer_ops!(Vector2);
impl_integer_ops!(Vector3);
impl_integer_ops!(Vector4);

impl_scalar_lhs_ops!(Vector2, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_ops!(Vector3, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_ops!(Vector4, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl_scalar_lhs_div!(Vector2, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_div!(Vector3, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_div!(Vector4, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl_approx_fields!(Vector2, Scalar, x, y);
impl_approx_fields!(Vector3, Scalar, x, y, z);
impl_approx_fields!(Vector4, Scalar, x, y, z, w);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_construction() {
        let v = Vector3::new(1.0f32, 2.0, 3.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(Vector3::splat(4.0f64), Vector3::new(4.0, 4.0, 4.0));
        assert_eq!(Vector2::<i32>::zero(), Vector2::new(0, 0));
        assert_eq!(Vector4::from([1, 2, 3, 4]), Vector4::new(1, 2, 3, 4));
        assert_eq!(Vector2::from((5.0f32, 6.0)), Vector2::new(5.0, 6.0));
    }

    #[test]
    fn test_indexing() {
        let mut v = Vector4::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[3], 4.0);
        v[2] = 9.0;
        assert_eq!(v.z, 9.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range() {
        let v = Vector2::new(1.0f32, 2.0);
        let _ = v[2];
    }

    #[test]
    fn test_dot_cross() {
        let a = Vector3::new(1.0f64, 0.0, 0.0);
        let b = Vector3::new(0.0f64, 1.0, 0.0);
        assert_eq!(a.dot(b), 0.0);
        assert_eq!(a.cross(b), Vector3::new(0.0, 0.0, 1.0));
        // Anti-commutative.
        assert_eq!(b.cross(a), Vector3::new(0.0, 0.0, -1.0));

        let v = Vector2::new(3.0f32, 4.0);
        assert_eq!(v.cross(v.perpendicular()), v.length_squared());
        assert_eq!(Vector2::new(1.0f64, 0.0).cross(Vector2::new(0.0, 1.0)), 1.0);
    }

    #[test]
    fn test_length_normalize() {
        let v = Vector3::new(3.0f32, 0.0, 4.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_relative_eq!(v.normalized().length(), 1.0);
        assert_eq!(v.normalize_or_zero(), v / 5.0);
    }

    #[test]
    fn test_normalized_zero_is_nan() {
        let v = Vector2::<f64>::zero().normalized();
        assert!(v.x.is_nan() && v.y.is_nan());
        assert_eq!(Vector2::<f64>::zero().normalize_or_zero(), Vector2::zero());
    }

    #[test]
    fn test_lerp_distance_angle() {
        let a = Vector3::new(0.0f64, 0.0, 0.0);
        let b = Vector3::new(2.0f64, 4.0, 6.0);
        assert_eq!(a.lerp(b, 0.5), Vector3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(
            Vector2::new(1.0f64, 1.0).distance(Vector2::new(4.0, 5.0)),
            5.0
        );
        let angle = Vector2::new(1.0f64, 0.0).angle(Vector2::new(0.0, 1.0));
        assert_relative_eq!(angle, core::f64::consts::FRAC_PI_2);
        // Parallel vectors survive the clamp.
        let p = Vector3::new(0.1f64, 0.2, 0.3);
        assert_eq!(p.angle(p * 3.0), 0.0);
    }

    #[test]
    fn test_integer_promotions() {
        let v = Vector2::new(3i32, 4);
        assert_eq!(v.length_squared(), 25);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.normalized(), Vector2::new(0.6, 0.8));
        let angle = Vector2::new(1u8, 0).angle(Vector2::new(0u8, 1));
        assert_relative_eq!(angle, core::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_cast() {
        let v = Vector3::new(1.9f64, -2.9, 3.0);
        assert_eq!(v.cast::<i32>(), Some(Vector3::new(1, -2, 3)));
        assert_eq!(Vector2::new(-1i32, 0).cast::<u8>(), None);
        assert_eq!(Vector2::new(300i32, 0).cast::<u8>(), None);
    }

    #[test]
    fn test_extend_truncate() {
        let v2 = Vector2::new(1.0f32, 2.0);
        let v3 = v2.extend(3.0);
        let v4 = v3.extend(4.0);
        assert_eq!(v4, Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v4.truncate(), v3);
        assert_eq!(v3.truncate(), v2);
    }

    #[test]
    fn test_comparisons() {
        let a = Vector3::new(1, 5, 3);
        let b = Vector3::new(2, 5, 1);
        assert_eq!(a.less_than(b), BVector3::new(true, false, false));
        assert_eq!(a.less_than_equal(b), BVector3::new(true, true, false));
        assert_eq!(a.greater_than(b), BVector3::new(false, false, true));
        assert_eq!(a.equal(b), BVector3::new(false, true, false));
        assert_eq!(a.not_equal(b), !a.equal(b));
        assert!(a.less_than_equal(b).any());
        assert!(!a.less_than(b).all());
        assert!(a.equal(a).all());
    }

    #[test]
    fn test_display() {
        let v = Vector3::new(1.5f32, -2.0, 0.25);
        assert_eq!(format!("{}", v), "(1.5, -2, 0.25)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let v = Vector4::new(1.0f32, -2.5, 3.25, 0.0);
        let bytes = bincode::serialize(&v).unwrap();
        let back: Vector4<f32> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(back, v);
    }
}
