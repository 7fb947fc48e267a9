//! Componentwise operator overlay.
//!
//! Every value type in the crate is a fixed-size numeric container. The
//! [`Components`] capability expresses that once, and the macros below
//! generate the shared operator family from it: each operator is written a
//! single time, against `map`/`zip`, and stamped out per container. The
//! integer-only and signed-only subsets are gated by trait bounds, so e.g.
//! `Vector3<f32> << 1` simply does not compile.

use crate::scalar::Scalar;

/// A fixed-size container of numeric components.
pub trait Components: Copy {
    /// Component scalar type.
    type Elem: Scalar;
    /// Number of components.
    const LEN: usize;

    /// Applies `f` to every component.
    fn map(self, f: impl FnMut(Self::Elem) -> Self::Elem) -> Self;

    /// Combines same-position components of `self` and `other` with `f`.
    fn zip(self, other: Self, f: impl FnMut(Self::Elem, Self::Elem) -> Self::Elem) -> Self;

    /// Folds over the components in storage order.
    fn fold<A>(self, init: A, f: impl FnMut(A, Self::Elem) -> A) -> A;
}

/// Implements [`Components`] for a struct with named scalar fields.
macro_rules! impl_components {
    ($Type:ident, $Bound:ident, $len:expr, $($field:ident),+) => {
        impl<T: crate::scalar::$Bound> crate::ops::Components for $Type<T> {
            type Elem = T;
            const LEN: usize = $len;

            #[inline]
            fn map(self, mut f: impl FnMut(T) -> T) -> Self {
                Self { $($field: f(self.$field)),+ }
            }

            #[inline]
            fn zip(self, other: Self, mut f: impl FnMut(T, T) -> T) -> Self {
                Self { $($field: f(self.$field, other.$field)),+ }
            }

            #[inline]
            fn fold<A>(self, init: A, mut f: impl FnMut(A, T) -> A) -> A {
                let acc = init;
                $(let acc = f(acc, self.$field);)+
                acc
            }
        }
    };
}

/// Implements [`Components`] for a column-matrix over its column vectors.
macro_rules! impl_components_matrix {
    ($Mat:ident, $rows:expr, [$($c:expr),+]) => {
        impl<T: crate::scalar::Scalar> crate::ops::Components for $Mat<T> {
            type Elem = T;
            const LEN: usize = $rows * [$($c),+].len();

            #[inline]
            fn map(self, mut f: impl FnMut(T) -> T) -> Self {
                Self { cols: [$(crate::ops::Components::map(self.cols[$c], &mut f)),+] }
            }

            #[inline]
            fn zip(self, other: Self, mut f: impl FnMut(T, T) -> T) -> Self {
                Self {
                    cols: [$(crate::ops::Components::zip(
                        self.cols[$c],
                        other.cols[$c],
                        &mut f,
                    )),+],
                }
            }

            #[inline]
            fn fold<A>(self, init: A, mut f: impl FnMut(A, T) -> A) -> A {
                let acc = init;
                $(let acc = crate::ops::Components::fold(self.cols[$c], acc, &mut f);)+
                acc
            }
        }
    };
}

/// The componentwise `+ - * / %` family plus compound assignment, generated
/// once per container. Container⊕container for `+ - %`, container⊕scalar
/// for all five.
macro_rules! impl_componentwise_ops {
    ($Type:ident, $Bound:ident) => {
        impl<T: crate::scalar::$Bound> core::ops::Add for $Type<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                crate::ops::Components::zip(self, rhs, |a, b| a + b)
            }
        }

        impl<T: crate::scalar::$Bound> core::ops::Sub for $Type<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                crate::ops::Components::zip(self, rhs, |a, b| a - b)
            }
        }

        impl<T: crate::scalar::$Bound> core::ops::Rem for $Type<T> {
            type Output = Self;
            #[inline]
            fn rem(self, rhs: Self) -> Self {
                crate::ops::Components::zip(self, rhs, |a, b| a % b)
            }
        }

        impl<T: crate::scalar::$Bound> core::ops::Add<T> for $Type<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: T) -> Self {
                crate::ops::Components::map(self, |a| a + rhs)
            }
        }

        impl<T: crate::scalar::$Bound> core::ops::Sub<T> for $Type<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: T) -> Self {
                crate::ops::Components::map(self, |a| a - rhs)
            }
        }

        impl<T: crate::scalar::$Bound> core::ops::Mul<T> for $Type<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: T) -> Self {
                crate::ops::Components::map(self, |a| a * rhs)
            }
        }

        impl<T: crate::scalar::$Bound> core::ops::Div<T> for $Type<T> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: T) -> Self {
                crate::ops::Components::map(self, |a| a / rhs)
            }
        }

        impl<T: crate::scalar::$Bound> core::ops::Rem<T> for $Type<T> {
            type Output = Self;
            #[inline]
            fn rem(self, rhs: T) -> Self {
                crate::ops::Components::map(self, |a| a % rhs)
            }
        }

        impl<T: crate::scalar::$Bound> core::ops::AddAssign for $Type<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: crate::scalar::$Bound> core::ops::SubAssign for $Type<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: crate::scalar::$Bound> core::ops::RemAssign for $Type<T> {
            #[inline]
            fn rem_assign(&mut self, rhs: Self) {
                *self = *self % rhs;
            }
        }

        impl<T: crate::scalar::$Bound> core::ops::AddAssign<T> for $Type<T> {
            #[inline]
            fn add_assign(&mut self, rhs: T) {
                *self = *self + rhs;
            }
        }

        impl<T: crate::scalar::$Bound> core::ops::SubAssign<T> for $Type<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: T) {
                *self = *self - rhs;
            }
        }

        impl<T: crate::scalar::$Bound> core::ops::MulAssign<T> for $Type<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: crate::scalar::$Bound> core::ops::DivAssign<T> for $Type<T> {
            #[inline]
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl<T: crate::scalar::$Bound> core::ops::RemAssign<T> for $Type<T> {
            #[inline]
            fn rem_assign(&mut self, rhs: T) {
                *self = *self % rhs;
            }
        }

        impl<T: crate::scalar::$Bound + num_traits::Signed> core::ops::Neg for $Type<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                crate::ops::Components::map(self, |a| -a)
            }
        }
    };
}

/// The integer-only operator family: bitwise `& | ^ !`, scalar shifts, and
/// the wrapping arithmetic methods. Available only when the component scalar
/// is a fixed-width integer.
macro_rules! impl_integer_ops {
    ($Type:ident) => {
        impl<T: crate::scalar::IntScalar> core::ops::BitAnd for $Type<T> {
            type Output = Self;
            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                crate::ops::Components::zip(self, rhs, |a, b| a & b)
            }
        }

        impl<T: crate::scalar::IntScalar> core::ops::BitOr for $Type<T> {
            type Output = Self;
            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                crate::ops::Components::zip(self, rhs, |a, b| a | b)
            }
        }

        impl<T: crate::scalar::IntScalar> core::ops::BitXor for $Type<T> {
            type Output = Self;
            #[inline]
            fn bitxor(self, rhs: Self) -> Self {
                crate::ops::Components::zip(self, rhs, |a, b| a ^ b)
            }
        }

        impl<T: crate::scalar::IntScalar> core::ops::BitAnd<T> for $Type<T> {
            type Output = Self;
            #[inline]
            fn bitand(self, rhs: T) -> Self {
                crate::ops::Components::map(self, |a| a & rhs)
            }
        }

        impl<T: crate::scalar::IntScalar> core::ops::BitOr<T> for $Type<T> {
            type Output = Self;
            #[inline]
            fn bitor(self, rhs: T) -> Self {
                crate::ops::Components::map(self, |a| a | rhs)
            }
        }

        impl<T: crate::scalar::IntScalar> core::ops::BitXor<T> for $Type<T> {
            type Output = Self;
            #[inline]
            fn bitxor(self, rhs: T) -> Self {
                crate::ops::Components::map(self, |a| a ^ rhs)
            }
        }

        impl<T: crate::scalar::IntScalar> core::ops::Not for $Type<T> {
            type Output = Self;
            #[inline]
            fn not(self) -> Self {
                crate::ops::Components::map(self, |a| !a)
            }
        }

        impl<T: crate::scalar::IntScalar> core::ops::Shl<usize> for $Type<T> {
            type Output = Self;
            #[inline]
            fn shl(self, rhs: usize) -> Self {
                crate::ops::Components::map(self, |a| a << rhs)
            }
        }

        impl<T: crate::scalar::IntScalar> core::ops::Shr<usize> for $Type<T> {
            type Output = Self;
            #[inline]
            fn shr(self, rhs: usize) -> Self {
                crate::ops::Components::map(self, |a| a >> rhs)
            }
        }

        impl<T: crate::scalar::IntScalar> core::ops::BitAndAssign for $Type<T> {
            #[inline]
            fn bitand_assign(&mut self, rhs: Self) {
                *self = *self & rhs;
            }
        }

        impl<T: crate::scalar::IntScalar> core::ops::BitOrAssign for $Type<T> {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                *self = *self | rhs;
            }
        }

        impl<T: crate::scalar::IntScalar> core::ops::BitXorAssign for $Type<T> {
            #[inline]
            fn bitxor_assign(&mut self, rhs: Self) {
                *self = *self ^ rhs;
            }
        }

        impl<T: crate::scalar::IntScalar> core::ops::ShlAssign<usize> for $Type<T> {
            #[inline]
            fn shl_assign(&mut self, rhs: usize) {
                *self = *self << rhs;
            }
        }

        impl<T: crate::scalar::IntScalar> core::ops::ShrAssign<usize> for $Type<T> {
            #[inline]
            fn shr_assign(&mut self, rhs: usize) {
                *self = *self >> rhs;
            }
        }

        impl<T> $Type<T>
        where
            T: crate::scalar::IntScalar
                + num_traits::WrappingAdd
                + num_traits::WrappingSub
                + num_traits::WrappingMul,
        {
            /// Componentwise wrapping addition.
            #[inline]
            pub fn wrapping_add(self, rhs: Self) -> Self {
                crate::ops::Components::zip(self, rhs, |a, b| a.wrapping_add(&b))
            }

            /// Componentwise wrapping subtraction.
            #[inline]
            pub fn wrapping_sub(self, rhs: Self) -> Self {
                crate::ops::Components::zip(self, rhs, |a, b| a.wrapping_sub(&b))
            }

            /// Componentwise wrapping multiplication.
            #[inline]
            pub fn wrapping_mul(self, rhs: Self) -> Self {
                crate::ops::Components::zip(self, rhs, |a, b| a.wrapping_mul(&b))
            }
        }
    };
}

/// Scalar-on-the-left `+ - *` for the primitive scalars (orphan rules keep
/// these from being generic over the scalar).
macro_rules! impl_scalar_lhs_ops {
    ($Type:ident, $($s:ty),+) => {
        $(
            impl core::ops::Add<$Type<$s>> for $s {
                type Output = $Type<$s>;
                #[inline]
                fn add(self, rhs: $Type<$s>) -> $Type<$s> {
                    crate::ops::Components::map(rhs, |a| self + a)
                }
            }

            impl core::ops::Sub<$Type<$s>> for $s {
                type Output = $Type<$s>;
                #[inline]
                fn sub(self, rhs: $Type<$s>) -> $Type<$s> {
                    crate::ops::Components::map(rhs, |a| self - a)
                }
            }

            impl core::ops::Mul<$Type<$s>> for $s {
                type Output = $Type<$s>;
                #[inline]
                fn mul(self, rhs: $Type<$s>) -> $Type<$s> {
                    crate::ops::Components::map(rhs, |a| self * a)
                }
            }
        )+
    };
}

/// Scalar-on-the-left componentwise `/` — separate from
/// `impl_scalar_lhs_ops` because `Complex` overrides division with its own
/// algebra.
macro_rules! impl_scalar_lhs_div {
    ($Type:ident, $($s:ty),+) => {
        $(
            impl core::ops::Div<$Type<$s>> for $s {
                type Output = $Type<$s>;
                #[inline]
                fn div(self, rhs: $Type<$s>) -> $Type<$s> {
                    crate::ops::Components::map(rhs, |a| self / a)
                }
            }
        )+
    };
}

/// Vector×vector componentwise multiply and divide (GLM semantics; vectors
/// only — matrix×matrix means composition and complex×complex has its own
/// algebra).
macro_rules! impl_vector_mul_div {
    ($Type:ident) => {
        impl<T: crate::scalar::Scalar> core::ops::Mul for $Type<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                crate::ops::Components::zip(self, rhs, |a, b| a * b)
            }
        }

        impl<T: crate::scalar::Scalar> core::ops::Div for $Type<T> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: Self) -> Self {
                crate::ops::Components::zip(self, rhs, |a, b| a / b)
            }
        }

        impl<T: crate::scalar::Scalar> core::ops::MulAssign for $Type<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<T: crate::scalar::Scalar> core::ops::DivAssign for $Type<T> {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }
    };
}

/// Tolerance comparison (`approx`) over named scalar fields.
macro_rules! impl_approx_fields {
    ($Type:ident, $Bound:ident, $($field:ident),+) => {
        impl<T> approx::AbsDiffEq for $Type<T>
        where
            T: crate::scalar::$Bound + approx::AbsDiffEq,
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(T::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        impl<T> approx::RelativeEq for $Type<T>
        where
            T: crate::scalar::$Bound + approx::RelativeEq,
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(T::relative_eq(&self.$field, &other.$field, epsilon, max_relative))&&+
            }
        }
    };
}

/// Tolerance comparison (`approx`) over matrix columns.
macro_rules! impl_approx_matrix {
    ($Mat:ident) => {
        impl<T> approx::AbsDiffEq for $Mat<T>
        where
            T: crate::scalar::Scalar + approx::AbsDiffEq,
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                for c in 0..Self::COLS {
                    for r in 0..Self::ROWS {
                        if !T::abs_diff_eq(&self.cols[c][r], &other.cols[c][r], epsilon) {
                            return false;
                        }
                    }
                }
                true
            }
        }

        impl<T> approx::RelativeEq for $Mat<T>
        where
            T: crate::scalar::Scalar + approx::RelativeEq,
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                for c in 0..Self::COLS {
                    for r in 0..Self::ROWS {
                        if !T::relative_eq(
                            &self.cols[c][r],
                            &other.cols[c][r],
                            epsilon,
                            max_relative,
                        ) {
                            return false;
                        }
                    }
                }
                true
            }
        }
    };
}

pub(crate) use {
    impl_approx_fields, impl_approx_matrix, impl_componentwise_ops, impl_components,
    impl_components_matrix, impl_integer_ops, impl_scalar_lhs_div, impl_scalar_lhs_ops,
    impl_vector_mul_div,
};

#[cfg(test)]
mod tests {
    use crate::vector::{Vector2, Vector3};

    #[test]
    fn test_componentwise_scalar_forms() {
        let v = Vector3::new(1.0f32, 2.0, 3.0);
        assert_eq!(v + 1.0, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(1.0 - v, Vector3::new(0.0, -1.0, -2.0));
        assert_eq!(v * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(6.0 / Vector3::new(1.0, 2.0, 3.0), Vector3::new(6.0, 3.0, 2.0));
    }

    #[test]
    fn test_vector_componentwise_mul_div() {
        let a = Vector3::new(2.0f64, 6.0, 8.0);
        let b = Vector3::new(2.0, 3.0, 4.0);
        assert_eq!(a * b, Vector3::new(4.0, 18.0, 32.0));
        assert_eq!(a / b, Vector3::new(1.0, 2.0, 2.0));
    }

    #[test]
    fn test_integer_bit_family() {
        let a = Vector2::new(0b1100u32, 0b1010);
        let b = Vector2::new(0b1010u32, 0b0110);
        assert_eq!(a & b, Vector2::new(0b1000, 0b0010));
        assert_eq!(a | b, Vector2::new(0b1110, 0b1110));
        assert_eq!(a ^ b, Vector2::new(0b0110, 0b1100));
        assert_eq!(a << 1, Vector2::new(0b11000, 0b10100));
        assert_eq!(a >> 2, Vector2::new(0b11, 0b10));
        assert_eq!(!Vector2::new(0u8, 0xff), Vector2::new(0xff, 0));
    }

    #[test]
    fn test_wrapping_family() {
        let a = Vector2::new(u8::MAX, 1);
        let b = Vector2::new(1u8, 2);
        assert_eq!(a.wrapping_add(b), Vector2::new(0, 3));
        assert_eq!(Vector2::new(0u8, 0).wrapping_sub(b), Vector2::new(255, 254));
        assert_eq!(Vector2::new(128u8, 3).wrapping_mul(b), Vector2::new(128, 6));
    }

    #[test]
    fn test_rem() {
        let v = Vector2::new(7i32, 9);
        assert_eq!(v % 4, Vector2::new(3, 1));
        assert_eq!(v % Vector2::new(2, 5), Vector2::new(1, 4));
    }

    #[test]
    fn test_neg_requires_signed() {
        let v = Vector2::new(1i32, -2);
        assert_eq!(-v, Vector2::new(-1, 2));
    }
}
