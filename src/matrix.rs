//! Column-major matrices in every shape from 2x2 to 4x4.
//!
//! `MatrixRxC` has R rows and C columns, stored as C column vectors of R
//! components. The flat element order (`from_slice`, `to_array`) is
//! column-major, so a matrix round-trips through GPU uniform buffers
//! unchanged. Element access `m[(row, col)]` is zero-based.

use core::fmt;

use crate::ops::{
    impl_approx_matrix, impl_componentwise_ops, impl_components_matrix, impl_integer_ops,
    impl_scalar_lhs_div, impl_scalar_lhs_ops,
};
use crate::scalar::{FloatScalar, Scalar};
use crate::vector::{Vector2, Vector3, Vector4};

/// 2x2 matrix (column-major)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix2x2<T> {
    pub cols: [Vector2<T>; 2],
}

/// 2x3 matrix: 2 rows, 3 columns (column-major)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix2x3<T> {
    pub cols: [Vector2<T>; 3],
}

/// 2x4 matrix: 2 rows, 4 columns (column-major)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix2x4<T> {
    pub cols: [Vector2<T>; 4],
}

/// 3x2 matrix: 3 rows, 2 columns (column-major)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix3x2<T> {
    pub cols: [Vector3<T>; 2],
}

/// 3x3 matrix (column-major)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix3x3<T> {
    pub cols: [Vector3<T>; 3],
}

/// 3x4 matrix: 3 rows, 4 columns (column-major)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix3x4<T> {
    pub cols: [Vector3<T>; 4],
}

/// 4x2 matrix: 4 rows, 2 columns (column-major)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix4x2<T> {
    pub cols: [Vector4<T>; 2],
}

/// 4x3 matrix: 4 rows, 3 columns (column-major)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix4x3<T> {
    pub cols: [Vector4<T>; 3],
}

/// 4x4 matrix (column-major) - the main transformation matrix
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix4x4<T> {
    pub cols: [Vector4<T>; 4],
}

macro_rules! impl_matrix {
    (
        $Mat:ident, $ColVec:ident, $RowVec:ident, $Transposed:ident,
        $R:expr, $C:expr, [$($c:expr),+], ($($cn:ident),+),
        [$(($($e:ident),+)),+]
    ) => {
        impl<T: Scalar> $Mat<T> {
            pub const ROWS: usize = $R;
            pub const COLS: usize = $C;

            /// All elements in column-major order; `mRC` is row R, column C.
            #[inline]
            pub const fn new($($($e: T,)+)+) -> Self {
                Self { cols: [$($ColVec::new($($e),+)),+] }
            }

            #[inline]
            pub const fn from_cols($($cn: $ColVec<T>),+) -> Self {
                Self { cols: [$($cn),+] }
            }

            /// Ones on the main diagonal, zero elsewhere. For non-square
            /// shapes this is the identity-padded rectangle.
            #[inline]
            pub fn identity() -> Self {
                Self::from_fn(|r, c| if r == c { T::one() } else { T::zero() })
            }

            /// Element `(r, c)` is `f(r, c)`.
            #[inline]
            pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
                Self { cols: [$($ColVec::from_fn_col($c, &mut f)),+] }
            }

            #[inline]
            pub fn zero() -> Self {
                Self::from_fn(|_, _| T::zero())
            }

            /// Builds from column-major flat storage.
            ///
            /// # Panics
            ///
            /// Panics when `s` does not hold exactly `ROWS * COLS` elements.
            #[inline]
            pub fn from_slice(s: &[T]) -> Self {
                assert_eq!(
                    s.len(),
                    $R * $C,
                    "{} needs {} elements, got {}",
                    stringify!($Mat),
                    $R * $C,
                    s.len(),
                );
                Self::from_fn(|r, c| s[c * $R + r])
            }

            /// Builds from column-major flat storage.
            #[inline]
            pub fn from_array(a: [T; $R * $C]) -> Self {
                Self::from_fn(|r, c| a[c * $R + r])
            }

            /// Column-major flat storage.
            pub fn to_array(&self) -> [T; $R * $C] {
                let mut out = [T::zero(); $R * $C];
                for c in 0..$C {
                    for r in 0..$R {
                        out[c * $R + r] = self.cols[c][r];
                    }
                }
                out
            }

            #[inline]
            pub fn col(&self, c: usize) -> $ColVec<T> {
                self.cols[c]
            }

            #[inline]
            pub fn row(&self, r: usize) -> $RowVec<T> {
                $RowVec::from([$(self.cols[$c][r]),+])
            }

            #[inline]
            pub fn transpose(&self) -> $Transposed<T> {
                let m = *self;
                $Transposed::from_fn(|r, c| m.cols[r][c])
            }

            /// Converts every element to `U`, or `None` when any element
            /// does not fit.
            #[inline]
            pub fn cast<U: Scalar>(&self) -> Option<$Mat<U>> {
                Some($Mat { cols: [$(self.cols[$c].cast()?),+] })
            }
        }

        impl<T: Scalar> Default for $Mat<T> {
            fn default() -> Self {
                Self::identity()
            }
        }

        impl<T> core::ops::Index<usize> for $Mat<T> {
            type Output = $ColVec<T>;

            #[inline]
            fn index(&self, c: usize) -> &$ColVec<T> {
                &self.cols[c]
            }
        }

        impl<T> core::ops::IndexMut<usize> for $Mat<T> {
            #[inline]
            fn index_mut(&mut self, c: usize) -> &mut $ColVec<T> {
                &mut self.cols[c]
            }
        }

        impl<T> core::ops::Index<(usize, usize)> for $Mat<T> {
            type Output = T;

            #[inline]
            fn index(&self, (r, c): (usize, usize)) -> &T {
                &self.cols[c][r]
            }
        }

        impl<T> core::ops::IndexMut<(usize, usize)> for $Mat<T> {
            #[inline]
            fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
                &mut self.cols[c][r]
            }
        }

        impl<T: Scalar> fmt::Display for $Mat<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, col) in self.cols.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", col)?;
                }
                write!(f, "]")
            }
        }
    };
}

impl_matrix!(Matrix2x2, Vector2, Vector2, Matrix2x2, 2, 2, [0, 1], (c0, c1),
    [(m00, m10), (m01, m11)]);
impl_matrix!(Matrix2x3, Vector2, Vector3, Matrix3x2, 2, 3, [0, 1, 2], (c0, c1, c2),
    [(m00, m10), (m01, m11), (m02, m12)]);
impl_matrix!(Matrix2x4, Vector2, Vector4, Matrix4x2, 2, 4, [0, 1, 2, 3], (c0, c1, c2, c3),
    [(m00, m10), (m01, m11), (m02, m12), (m03, m13)]);
impl_matrix!(Matrix3x2, Vector3, Vector2, Matrix2x3, 3, 2, [0, 1], (c0, c1),
    [(m00, m10, m20), (m01, m11, m21)]);
impl_matrix!(Matrix3x3, Vector3, Vector3, Matrix3x3, 3, 3, [0, 1, 2], (c0, c1, c2),
    [(m00, m10, m20), (m01, m11, m21), (m02, m12, m22)]);
impl_matrix!(Matrix3x4, Vector3, Vector4, Matrix4x3, 3, 4, [0, 1, 2, 3], (c0, c1, c2, c3),
    [(m00, m10, m20), (m01, m11, m21), (m02, m12, m22), (m03, m13, m23)]);
impl_matrix!(Matrix4x2, Vector4, Vector2, Matrix2x4, 4, 2, [0, 1], (c0, c1),
    [(m00, m10, m20, m30), (m01, m11, m21, m31)]);
impl_matrix!(Matrix4x3, Vector4, Vector3, Matrix3x4, 4, 3, [0, 1, 2], (c0, c1, c2),
    [(m00, m10, m20, m30), (m01, m11, m21, m31), (m02, m12, m22, m32)]);
impl_matrix!(Matrix4x4, Vector4, Vector4, Matrix4x4, 4, 4, [0, 1, 2, 3], (c0, c1, c2, c3),
    [(m00, m10, m20, m30), (m01, m11, m21, m31), (m02, m12, m22, m32), (m03, m13, m23, m33)]);

macro_rules! impl_square_matrix {
    ($Mat:ident, $Vec:ident) => {
        impl<T: Scalar> $Mat<T> {
            #[inline]
            pub fn from_diagonal(d: $Vec<T>) -> Self {
                Self::from_fn(|r, c| if r == c { d[r] } else { T::zero() })
            }
        }

        impl<T: Scalar> core::ops::MulAssign for $Mat<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        /// `a / b` is `a * b.inverse()`. A singular divisor yields Inf/NaN
        /// elements rather than a panic.
        impl<T: FloatScalar> core::ops::Div for $Mat<T> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                self * rhs.inverse()
            }
        }

        impl<T: FloatScalar> core::ops::DivAssign for $Mat<T> {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }
    };
}

impl_square_matrix!(Matrix2x2, Vector2);
impl_square_matrix!(Matrix3x3, Vector3);
impl_square_matrix!(Matrix4x4, Vector4);

impl<T: Scalar> Matrix2x2<T> {
    #[inline]
    pub fn determinant(&self) -> T {
        let a = self.cols[0];
        let b = self.cols[1];
        a.x * b.y - b.x * a.y
    }
}

impl<T: FloatScalar> Matrix2x2<T> {
    /// Inverse by the adjugate. A singular matrix divides by a zero
    /// determinant and yields Inf/NaN elements.
    pub fn inverse(&self) -> Self {
        let a = self.cols[0];
        let b = self.cols[1];
        let inv_det = T::one() / self.determinant();

        Self::from_cols(
            Vector2::new(b.y, -a.y) * inv_det,
            Vector2::new(-b.x, a.x) * inv_det,
        )
    }
}

impl<T: Scalar> Matrix3x3<T> {
    #[inline]
    pub fn determinant(&self) -> T {
        let a = self.cols[0];
        let b = self.cols[1];
        let c = self.cols[2];
        a.dot(b.cross(c))
    }
}

impl<T: FloatScalar> Matrix3x3<T> {
    /// Inverse by the adjugate: the rows of the inverse are the scaled
    /// cross products of the column pairs. Singular input yields Inf/NaN.
    pub fn inverse(&self) -> Self {
        let a = self.cols[0];
        let b = self.cols[1];
        let c = self.cols[2];

        let r0 = b.cross(c);
        let r1 = c.cross(a);
        let r2 = a.cross(b);
        let inv_det = T::one() / a.dot(r0);

        Self::from_cols(
            Vector3::new(r0.x, r1.x, r2.x) * inv_det,
            Vector3::new(r0.y, r1.y, r2.y) * inv_det,
            Vector3::new(r0.z, r1.z, r2.z) * inv_det,
        )
    }
}

impl<T: Scalar> Matrix4x4<T> {
    #[inline]
    pub fn determinant(&self) -> T {
        let a = self.cols[0];
        let b = self.cols[1];
        let c = self.cols[2];
        let d = self.cols[3];

        let s0 = a.x * b.y - b.x * a.y;
        let s1 = a.x * b.z - b.x * a.z;
        let s2 = a.x * b.w - b.x * a.w;
        let s3 = a.y * b.z - b.y * a.z;
        let s4 = a.y * b.w - b.y * a.w;
        let s5 = a.z * b.w - b.z * a.w;

        let c5 = c.z * d.w - d.z * c.w;
        let c4 = c.y * d.w - d.y * c.w;
        let c3 = c.y * d.z - d.y * c.z;
        let c2 = c.x * d.w - d.x * c.w;
        let c1 = c.x * d.z - d.x * c.z;
        let c0 = c.x * d.y - d.x * c.y;

        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }
}

impl<T: FloatScalar> Matrix4x4<T> {
    /// Inverse by 2x2 block minors: `s0..s5` from the top two rows,
    /// `c0..c5` from the bottom two. Singular input divides by a zero
    /// determinant and yields Inf/NaN elements.
    pub fn inverse(&self) -> Self {
        let a = self.cols[0];
        let b = self.cols[1];
        let c = self.cols[2];
        let d = self.cols[3];

        let s0 = a.x * b.y - b.x * a.y;
        let s1 = a.x * b.z - b.x * a.z;
        let s2 = a.x * b.w - b.x * a.w;
        let s3 = a.y * b.z - b.y * a.z;
        let s4 = a.y * b.w - b.y * a.w;
        let s5 = a.z * b.w - b.z * a.w;

        let c5 = c.z * d.w - d.z * c.w;
        let c4 = c.y * d.w - d.y * c.w;
        let c3 = c.y * d.z - d.y * c.z;
        let c2 = c.x * d.w - d.x * c.w;
        let c1 = c.x * d.z - d.x * c.z;
        let c0 = c.x * d.y - d.x * c.y;

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        let inv_det = T::one() / det;

        Self::from_cols(
            Vector4::new(
                (b.y * c5 - b.z * c4 + b.w * c3) * inv_det,
                (-a.y * c5 + a.z * c4 - a.w * c3) * inv_det,
                (d.y * s5 - d.z * s4 + d.w * s3) * inv_det,
                (-c.y * s5 + c.z * s4 - c.w * s3) * inv_det,
            ),
            Vector4::new(
                (-b.x * c5 + b.z * c2 - b.w * c1) * inv_det,
                (a.x * c5 - a.z * c2 + a.w * c1) * inv_det,
                (-d.x * s5 + d.z * s2 - d.w * s1) * inv_det,
                (c.x * s5 - c.z * s2 + c.w * s1) * inv_det,
            ),
            Vector4::new(
                (b.x * c4 - b.y * c2 + b.w * c0) * inv_det,
                (-a.x * c4 + a.y * c2 - a.w * c0) * inv_det,
                (d.x * s4 - d.y * s2 + d.w * s0) * inv_det,
                (-c.x * s4 + c.y * s2 - c.w * s0) * inv_det,
            ),
            Vector4::new(
                (-b.x * c3 + b.y * c1 - b.z * c0) * inv_det,
                (a.x * c3 - a.y * c1 + a.z * c0) * inv_det,
                (-d.x * s3 + d.y * s1 - d.z * s0) * inv_det,
                (c.x * s3 - c.y * s1 + c.z * s0) * inv_det,
            ),
        )
    }
}

/// Matrix * column vector: the linear combination of the columns.
macro_rules! impl_mat_vec_mul {
    ($Mat:ident, $VecC:ident, $VecR:ident, [$first:expr $(, $rest:expr)*]) => {
        impl<T: Scalar> core::ops::Mul<$VecC<T>> for $Mat<T> {
            type Output = $VecR<T>;

            #[inline]
            fn mul(self, v: $VecC<T>) -> $VecR<T> {
                let acc = self.cols[$first] * v[$first];
                $(let acc = acc + self.cols[$rest] * v[$rest];)*
                acc
            }
        }
    };
}

impl_mat_vec_mul!(Matrix2x2, Vector2, Vector2, [0, 1]);
impl_mat_vec_mul!(Matrix2x3, Vector3, Vector2, [0, 1, 2]);
impl_mat_vec_mul!(Matrix2x4, Vector4, Vector2, [0, 1, 2, 3]);
impl_mat_vec_mul!(Matrix3x2, Vector2, Vector3, [0, 1]);
impl_mat_vec_mul!(Matrix3x3, Vector3, Vector3, [0, 1, 2]);
impl_mat_vec_mul!(Matrix3x4, Vector4, Vector3, [0, 1, 2, 3]);
impl_mat_vec_mul!(Matrix4x2, Vector2, Vector4, [0, 1]);
impl_mat_vec_mul!(Matrix4x3, Vector3, Vector4, [0, 1, 2]);
impl_mat_vec_mul!(Matrix4x4, Vector4, Vector4, [0, 1, 2, 3]);

/// Matrix composition: each result column is the left matrix applied to the
/// corresponding right column. Inner dimensions must agree, which the type
/// pairs below encode.
macro_rules! impl_mat_mat_mul {
    ($Lhs:ident, $Rhs:ident, $Out:ident, [$($j:expr),+]) => {
        impl<T: Scalar> core::ops::Mul<$Rhs<T>> for $Lhs<T> {
            type Output = $Out<T>;

            #[inline]
            fn mul(self, rhs: $Rhs<T>) -> $Out<T> {
                $Out { cols: [$(self * rhs.cols[$j]),+] }
            }
        }
    };
}

impl_mat_mat_mul!(Matrix2x2, Matrix2x2, Matrix2x2, [0, 1]);
impl_mat_mat_mul!(Matrix2x2, Matrix2x3, Matrix2x3, [0, 1, 2]);
impl_mat_mat_mul!(Matrix2x2, Matrix2x4, Matrix2x4, [0, 1, 2, 3]);
impl_mat_mat_mul!(Matrix2x3, Matrix3x2, Matrix2x2, [0, 1]);
impl_mat_mat_mul!(Matrix2x3, Matrix3x3, Matrix2x3, [0, 1, 2]);
impl_mat_mat_mul!(Matrix2x3, Matrix3x4, Matrix2x4, [0, 1, 2, 3]);
impl_mat_mat_mul!(Matrix2x4, Matrix4x2, Matrix2x2, [0, 1]);
impl_mat_mat_mul!(Matrix2x4, Matrix4x3, Matrix2x3, [0, 1, 2]);
impl_mat_mat_mul!(Matrix2x4, Matrix4x4, Matrix2x4, [0, 1, 2, 3]);
impl_mat_mat_mul!(Matrix3x2, Matrix2x2, Matrix3x2, [0, 1]);
impl_mat_mat_mul!(Matrix3x2, Matrix2x3, Matrix3x3, [0, 1, 2]);
impl_mat_mat_mul!(Matrix3x2, Matrix2x4, Matrix3x4, [0, 1, 2, 3]);
impl_mat_mat_mul!(Matrix3x3, Matrix3x2, Matrix3x2, [0, 1]);
impl_mat_mat_mul!(Matrix3x3, Matrix3x3, Matrix3x3, [0, 1, 2]);
impl_mat_mat_mul!(Matrix3x3, Matrix3x4, Matrix3x4, [0, 1, 2, 3]);
impl_mat_mat_mul!(Matrix3x4, Matrix4x2, Matrix3x2, [0, 1]);
impl_mat_mat_mul!(Matrix3x4, Matrix4x3, Matrix3x3, [0, 1, 2]);
impl_mat_mat_mul!(Matrix3x4, Matrix4x4, Matrix3x4, [0, 1, 2, 3]);
impl_mat_mat_mul!(Matrix4x2, Matrix2x2, Matrix4x2, [0, 1]);
impl_mat_mat_mul!(Matrix4x2, Matrix2x3, Matrix4x3, [0, 1, 2]);
impl_mat_mat_mul!(Matrix4x2, Matrix2x4, Matrix4x4, [0, 1, 2, 3]);
impl_mat_mat_mul!(Matrix4x3, Matrix3x2, Matrix4x2, [0, 1]);
impl_mat_mat_mul!(Matrix4x3, Matrix3x3, Matrix4x3, [0, 1, 2]);
impl_mat_mat_mul!(Matrix4x3, Matrix3x4, Matrix4x4, [0, 1, 2, 3]);
impl_mat_mat_mul!(Matrix4x4, Matrix4x2, Matrix4x2, [0, 1]);
impl_mat_mat_mul!(Matrix4x4, Matrix4x3, Matrix4x3, [0, 1, 2]);
impl_mat_mat_mul!(Matrix4x4, Matrix4x4, Matrix4x4, [0, 1, 2, 3]);

/// Shape conversion: shared positions copy over, everything else takes the
/// identity pattern (one on the diagonal, zero off it).
macro_rules! impl_shape_conversions {
    ($Dst:ident: $($Src:ident),+) => {
        $(
            impl<T: Scalar> From<$Src<T>> for $Dst<T> {
                fn from(m: $Src<T>) -> Self {
                    Self::from_fn(|r, c| {
                        if r < $Src::<T>::ROWS && c < $Src::<T>::COLS {
                            m[(r, c)]
                        } else if r == c {
                            T::one()
                        } else {
                            T::zero()
                        }
                    })
                }
            }
        )+
    };
}

impl_shape_conversions!(Matrix2x2: Matrix2x3, Matrix2x4, Matrix3x2, Matrix3x3, Matrix3x4, Matrix4x2, Matrix4x3, Matrix4x4);
impl_shape_conversions!(Matrix2x3: Matrix2x2, Matrix2x4, Matrix3x2, Matrix3x3, Matrix3x4, Matrix4x2, Matrix4x3, Matrix4x4);
impl_shape_conversions!(Matrix2x4: Matrix2x2, Matrix2x3, Matrix3x2, Matrix3x3, Matrix3x4, Matrix4x2, Matrix4x3, Matrix4x4);
impl_shape_conversions!(Matrix3x2: Matrix2x2, Matrix2x3, Matrix2x4, Matrix3x3, Matrix3x4, Matrix4x2, Matrix4x3, Matrix4x4);
impl_shape_conversions!(Matrix3x3: Matrix2x2, Matrix2x3, Matrix2x4, Matrix3x2, Matrix3x4, Matrix4x2, Matrix4x3, Matrix4x4);
impl_shape_conversions!(Matrix3x4: Matrix2x2, Matrix2x3, Matrix2x4, Matrix3x2, Matrix3x3, Matrix4x2, Matrix4x3, Matrix4x4);
impl_shape_conversions!(Matrix4x2: Matrix2x2, Matrix2x3, Matrix2x4, Matrix3x2, Matrix3x3, Matrix3x4, Matrix4x3, Matrix4x4);
impl_shape_conversions!(Matrix4x3: Matrix2x2, Matrix2x3, Matrix2x4, Matrix3x2, Matrix3x3, Matrix3x4, Matrix4x2, Matrix4x4);
impl_shape_conversions!(Matrix4x4: Matrix2x2, Matrix2x3, Matrix2x4, Matrix3x2, Matrix3x3, Matrix3x4, Matrix4x2, Matrix4x3);

impl_components_matrix!(Matrix2x2, 2, [0, 1]);
impl_components_matrix!(Matrix2x3, 2, [0, 1, 2]);
impl_components_matrix!(Matrix2x4, 2, [0, 1, 2, 3]);
impl_components_matrix!(Matrix3x2, 3, [0, 1]);
impl_components_matrix!(Matrix3x3, 3, [0, 1, 2]);
impl_components_matrix!(Matrix3x4, 3, [0, 1, 2, 3]);
impl_components_matrix!(Matrix4x2, 4, [0, 1]);
impl_components_matrix!(Matrix4x3, 4, [0, 1, 2]);
impl_components_matrix!(Matrix4x4, 4, [0, 1, 2, 3]);

impl_componentwise_ops!(Matrix2x2, Scalar);
impl_componentwise_ops!(Matrix2x3, Scalar);
impl_componentwise_ops!(Matrix2x4, Scalar);
impl_componentwise_ops!(Matrix3x2, Scalar);
impl_componentwise_ops!(Matrix3x3, Scalar);
impl_componentwise_ops!(Matrix3x4, Scalar);
impl_componentwise_ops!(Matrix4x2, Scalar);
impl_componentwise_ops!(Matrix4x3, Scalar);
impl_componentwise_ops!(Matrix4x4, Scalar);

impl_integer_ops!(Matrix2x2);
impl_integer_ops!(Matrix2x3);
impl_integer_ops!(Matrix2x4);
impl_integer_ops!(Matrix3x2);
impl_integer_ops!(Matrix3x3);
impl_integer_ops!(Matrix3x4);
impl_integer_ops!(Matrix4x2);
impl_integer_ops!(Matrix4x3);
impl_integer_ops!(Matrix4x4);

impl_scalar_lhs_ops!(Matrix2x2, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_ops!(Matrix2x3, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_ops!(Matrix2x4, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_ops!(Matrix3x2, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_ops!(Matrix3x3, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_ops!(Matrix3x4, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_ops!(Matrix4x2, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_ops!(Matrix4x3, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_ops!(Matrix4x4, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl_scalar_lhs_div!(Matrix2x2, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_div!(Matrix2x3, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_div!(Matrix2x4, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_div!(Matrix3x2, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_div!(Matrix3x3, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_div!(Matrix3x4, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_div!(Matrix4x2, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_div!(Matrix4x3, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs_div!(Matrix4x4, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl_approx_matrix!(Matrix2x2);
impl_approx_matrix!(Matrix2x3);
impl_approx_matrix!(Matrix2x4);
impl_approx_matrix!(Matrix3x2);
impl_approx_matrix!(Matrix3x3);
impl_approx_matrix!(Matrix3x4);
impl_approx_matrix!(Matrix4x2);
impl_approx_matrix!(Matrix4x3);
impl_approx_matrix!(Matrix4x4);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_relative_eq, relative_eq};

    fn m4() -> Matrix4x4<f64> {
        // Invertible, no special structure.
        Matrix4x4::from_cols(
            Vector4::new(2.0, 0.0, 1.0, 0.0),
            Vector4::new(1.0, 3.0, 0.0, 1.0),
            Vector4::new(0.0, 1.0, 4.0, 0.0),
            Vector4::new(1.0, 0.0, 0.0, 2.0),
        )
    }

    #[test]
    fn test_identity_and_diagonal() {
        let id = Matrix3x3::<f32>::identity();
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(id * v, v);
        assert_eq!(Matrix2x2::from_diagonal(Vector2::new(2.0f32, 3.0)) * Vector2::one(),
            Vector2::new(2.0, 3.0));
        // Non-square default also carries ones on the diagonal.
        let m = Matrix3x2::<f32>::default();
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 1)], 1.0);
        assert_eq!(m[(2, 0)], 0.0);
    }

    #[test]
    fn test_element_access() {
        let mut m = Matrix2x3::from_cols(
            Vector2::new(1.0f32, 2.0),
            Vector2::new(3.0, 4.0),
            Vector2::new(5.0, 6.0),
        );
        assert_eq!(m[(0, 1)], 3.0);
        assert_eq!(m[(1, 2)], 6.0);
        assert_eq!(m[2], Vector2::new(5.0, 6.0));
        m[(1, 0)] = 9.0;
        assert_eq!(m.cols[0].y, 9.0);
        assert_eq!(m.row(1), Vector3::new(9.0, 4.0, 6.0));
        assert_eq!(m.col(1), Vector2::new(3.0, 4.0));
    }

    #[test]
    fn test_scalar_constructor_is_column_major() {
        let m = Matrix2x2::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(m, Matrix2x2::from_cols(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)));
        assert_eq!(m, Matrix2x2::from_array([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(m[(0, 1)], 3.0);

        let m = Matrix4x3::new(
            0.0f64, 1.0, 2.0, 3.0,
            4.0, 5.0, 6.0, 7.0,
            8.0, 9.0, 10.0, 11.0,
        );
        assert_eq!(m.col(1), Vector4::new(4.0, 5.0, 6.0, 7.0));
    }

    #[test]
    fn test_slice_round_trip() {
        let data = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let m = Matrix3x2::from_slice(&data);
        // Column-major: first column is the first three elements.
        assert_eq!(m.cols[0], Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(m.cols[1], Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(m.to_array(), data);
    }

    #[test]
    #[should_panic(expected = "needs 6 elements")]
    fn test_slice_wrong_length() {
        let _ = Matrix3x2::from_slice(&[1.0f64; 5]);
    }

    #[test]
    fn test_transpose_shapes() {
        let m = Matrix2x3::from_cols(
            Vector2::new(1, 4),
            Vector2::new(2, 5),
            Vector2::new(3, 6),
        );
        let t: Matrix3x2<i32> = m.transpose();
        assert_eq!(t.cols[0], Vector3::new(1, 2, 3));
        assert_eq!(t.cols[1], Vector3::new(4, 5, 6));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_mat_vec_convention() {
        let m0 = Matrix4x4::from_cols(
            Vector4::new(0.0f64, 1.0, 2.0, 3.0),
            Vector4::new(4.0, 5.0, 6.0, 7.0),
            Vector4::new(8.0, 9.0, 10.0, 11.0),
            Vector4::new(12.0, 13.0, 14.0, 15.0),
        );
        let v0 = Vector4::new(0.3, 0.5, 0.7, 0.2);
        assert_relative_eq!(m0 * v0, Vector4::new(10.0, 11.7, 13.4, 15.1), max_relative = 1e-12);
    }

    #[test]
    fn test_mixed_shape_mul() {
        // (2x3) * (3x4) = 2x4, checked against the row/column dot products.
        let a = Matrix2x3::from_fn(|r, c| (r * 3 + c) as f64);
        let b = Matrix3x4::from_fn(|r, c| (r * 4 + c) as f64);
        let p: Matrix2x4<f64> = a * b;
        for r in 0..2 {
            for c in 0..4 {
                assert_eq!(p[(r, c)], a.row(r).dot(b.col(c)));
            }
        }
    }

    #[test]
    fn test_determinant() {
        assert_eq!(Matrix2x2::from_cols(Vector2::new(3.0, 1.0), Vector2::new(2.0, 4.0)).determinant(), 10.0);
        assert_eq!(Matrix3x3::<f64>::identity().determinant(), 1.0);
        assert_eq!((Matrix3x3::<f64>::identity() * 2.0).determinant(), 8.0);
        assert_relative_eq!(m4().determinant(), m4().transpose().determinant());
    }

    #[test]
    fn test_integer_determinant() {
        let m2 = Matrix2x2::from_cols(Vector2::new(3i32, 1), Vector2::new(2, 4));
        assert_eq!(m2.determinant(), 10);

        let m3 = Matrix3x3::from_cols(
            Vector3::new(2i64, 0, 1),
            Vector3::new(1, 3, 0),
            Vector3::new(0, 1, 4),
        );
        assert_eq!(m3.determinant(), 25);

        let m4 = Matrix4x4::<i32>::from_diagonal(Vector4::new(1, 2, 3, -4));
        assert_eq!(m4.determinant(), -24);
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = m4();
        assert_relative_eq!(m * m.inverse(), Matrix4x4::identity(), epsilon = 1e-12);
        assert_relative_eq!(m.inverse() * m, Matrix4x4::identity(), epsilon = 1e-12);

        let m3 = Matrix3x3::from_cols(
            Vector3::new(2.0f64, 0.0, 1.0),
            Vector3::new(1.0, 3.0, 0.0),
            Vector3::new(0.0, 1.0, 4.0),
        );
        assert_relative_eq!(m3 * m3.inverse(), Matrix3x3::identity(), epsilon = 1e-12);

        let m2 = Matrix2x2::from_cols(Vector2::new(3.0f64, 1.0), Vector2::new(2.0, 4.0));
        assert_relative_eq!(m2 * m2.inverse(), Matrix2x2::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_singular_inverse_is_not_finite() {
        let m = Matrix2x2::from_cols(Vector2::new(1.0f64, 2.0), Vector2::new(2.0, 4.0));
        let inv = m.inverse();
        assert!(!inv[(0, 0)].is_finite());
    }

    #[test]
    fn test_matrix_division() {
        let a = m4();
        let b = Matrix4x4::from_diagonal(Vector4::new(1.0, 2.0, 4.0, 8.0));
        assert_relative_eq!((a / b) * b, a, epsilon = 1e-12);
        assert_relative_eq!(a / a, Matrix4x4::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_shape_conversion_padding() {
        let m2 = Matrix2x2::from_cols(Vector2::new(1.0f32, 2.0), Vector2::new(3.0, 4.0));
        let m4 = Matrix4x4::from(m2);
        assert_eq!(m4[(0, 0)], 1.0);
        assert_eq!(m4[(1, 1)], 4.0);
        assert_eq!(m4[(2, 2)], 1.0);
        assert_eq!(m4[(3, 3)], 1.0);
        assert_eq!(m4[(0, 2)], 0.0);
        assert_eq!(m4[(3, 0)], 0.0);

        // Shrinking keeps the overlapping block.
        let back = Matrix2x2::from(m4);
        assert_eq!(back, m2);

        // Mixed shapes pad with the identity pattern too.
        let m23 = Matrix2x3::from(m2);
        assert_eq!(m23[(0, 2)], 0.0);
        let m32 = Matrix3x2::from(m2);
        assert_eq!(m32[(2, 0)], 0.0);
        assert_eq!(m32[(2, 1)], 0.0);
    }

    #[test]
    fn test_componentwise_and_scalar_ops() {
        let a = Matrix2x2::from_cols(Vector2::new(1.0f32, 2.0), Vector2::new(3.0, 4.0));
        let b = Matrix2x2::from_cols(Vector2::new(4.0f32, 3.0), Vector2::new(2.0, 1.0));
        assert_eq!(a + b, Matrix2x2::from_cols(Vector2::new(5.0, 5.0), Vector2::new(5.0, 5.0)));
        assert_eq!(a * 2.0, a + a);
        assert_eq!(2.0 * a, a + a);
        assert_eq!(-a + a, Matrix2x2::zero());
    }

    #[test]
    fn test_integer_matrix_ops() {
        let m = Matrix2x2::from_cols(Vector2::new(0b1100u32, 0b1010), Vector2::new(1, 2));
        assert_eq!((m << 1)[(0, 0)], 0b11000);
        assert_eq!((m & m), m);
        let w = Matrix2x2::from_cols(Vector2::new(u8::MAX, 0), Vector2::new(1, 2));
        assert_eq!(w.wrapping_add(w)[(0, 0)], 254);
    }

    #[test]
    fn test_cast() {
        let m = Matrix2x2::from_cols(Vector2::new(1.5f64, 2.0), Vector2::new(-3.0, 4.0));
        assert_eq!(
            m.cast::<f32>(),
            Some(Matrix2x2::from_cols(Vector2::new(1.5f32, 2.0), Vector2::new(-3.0, 4.0)))
        );
        assert_eq!(m.cast::<u32>(), None);
    }

    #[test]
    fn test_approx_tolerance() {
        let id = Matrix3x3::<f64>::identity();
        let nudged = id + 1e-14;
        assert!(relative_eq!(id, nudged, epsilon = 1e-12));
        assert!(!relative_eq!(id, id + 1.0));
    }
}
