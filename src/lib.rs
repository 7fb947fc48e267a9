//! Generic fixed-size linear algebra for graphics work: vectors, matrices
//! in every shape from 2x2 to 4x4, complex numbers, quaternion storage, and
//! the camera/projection transforms built on top of them.
//!
//! All containers are generic over the component scalar and column-major
//! where shape matters. Projection constructors take an explicit [`Clip`]
//! (handedness plus depth range) instead of global toggles.
//!
//! ```
//! use glmath::*;
//!
//! let view = look_at_rh(
//!     Vector3::new(0.0f32, 1.5, 4.0),
//!     Vector3::zero(),
//!     Vector3::unit_y(),
//! );
//! let proj = perspective(Clip::default(), radians(60.0f32), 16.0 / 9.0, 0.1, 100.0);
//! let mvp = proj * view;
//! let clip = mvp * Vector4::new(0.0, 0.0, 0.0, 1.0);
//! assert!(clip.w > 0.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod complex;
pub mod half;
pub mod matrix;
pub mod ops;
pub mod projection;
pub mod quaternion;
pub mod scalar;
pub mod vector;

pub use complex::Complex;
pub use half::{f32_from_half, half_from_f32};
pub use matrix::{
    Matrix2x2, Matrix2x3, Matrix2x4, Matrix3x2, Matrix3x3, Matrix3x4, Matrix4x2, Matrix4x3,
    Matrix4x4,
};
pub use ops::Components;
pub use projection::{
    frustum, frustum_lh, frustum_rh, infinite_perspective, infinite_perspective_lh,
    infinite_perspective_rh, look_at, look_at_lh, look_at_rh, ortho, ortho2d, ortho_lh, ortho_rh,
    perspective, perspective_fov, perspective_fov_lh, perspective_fov_rh, perspective_lh,
    perspective_rh, pick_matrix, project, rotate, rotation, scale, translate, unproject, Clip,
    DepthRange, Handedness,
};
pub use quaternion::Quaternion;
pub use scalar::{FloatScalar, IntScalar, Scalar};
pub use vector::{
    BVector2, BVector3, BVector4, IntVectorExt, Vector2, Vector3, Vector4,
};

/// Degrees to radians.
#[inline]
pub fn radians<T: FloatScalar>(degrees: T) -> T {
    degrees.to_radians()
}

/// Radians to degrees.
#[inline]
pub fn degrees<T: FloatScalar>(radians: T) -> T {
    radians.to_degrees()
}

// GLSL-flavored shorthand for the common instantiations.
#[allow(non_camel_case_types)]
mod aliases {
    use super::*;

    pub type vec2 = Vector2<f32>;
    pub type vec3 = Vector3<f32>;
    pub type vec4 = Vector4<f32>;
    pub type dvec2 = Vector2<f64>;
    pub type dvec3 = Vector3<f64>;
    pub type dvec4 = Vector4<f64>;
    pub type ivec2 = Vector2<i32>;
    pub type ivec3 = Vector3<i32>;
    pub type ivec4 = Vector4<i32>;
    pub type uvec2 = Vector2<u32>;
    pub type uvec3 = Vector3<u32>;
    pub type uvec4 = Vector4<u32>;
    pub type bvec2 = BVector2;
    pub type bvec3 = BVector3;
    pub type bvec4 = BVector4;

    pub type mat2 = Matrix2x2<f32>;
    pub type mat3 = Matrix3x3<f32>;
    pub type mat4 = Matrix4x4<f32>;
    pub type mat2x2 = Matrix2x2<f32>;
    pub type mat2x3 = Matrix2x3<f32>;
    pub type mat2x4 = Matrix2x4<f32>;
    pub type mat3x2 = Matrix3x2<f32>;
    pub type mat3x3 = Matrix3x3<f32>;
    pub type mat3x4 = Matrix3x4<f32>;
    pub type mat4x2 = Matrix4x2<f32>;
    pub type mat4x3 = Matrix4x3<f32>;
    pub type mat4x4 = Matrix4x4<f32>;

    pub type dmat2 = Matrix2x2<f64>;
    pub type dmat3 = Matrix3x3<f64>;
    pub type dmat4 = Matrix4x4<f64>;
    pub type dmat2x2 = Matrix2x2<f64>;
    pub type dmat2x3 = Matrix2x3<f64>;
    pub type dmat2x4 = Matrix2x4<f64>;
    pub type dmat3x2 = Matrix3x2<f64>;
    pub type dmat3x3 = Matrix3x3<f64>;
    pub type dmat3x4 = Matrix3x4<f64>;
    pub type dmat4x2 = Matrix4x2<f64>;
    pub type dmat4x3 = Matrix4x3<f64>;
    pub type dmat4x4 = Matrix4x4<f64>;

    pub type imat2 = Matrix2x2<i32>;
    pub type imat3 = Matrix3x3<i32>;
    pub type imat4 = Matrix4x4<i32>;
    pub type imat2x2 = Matrix2x2<i32>;
    pub type imat2x3 = Matrix2x3<i32>;
    pub type imat2x4 = Matrix2x4<i32>;
    pub type imat3x2 = Matrix3x2<i32>;
    pub type imat3x3 = Matrix3x3<i32>;
    pub type imat3x4 = Matrix3x4<i32>;
    pub type imat4x2 = Matrix4x2<i32>;
    pub type imat4x3 = Matrix4x3<i32>;
    pub type imat4x4 = Matrix4x4<i32>;

    pub type umat2 = Matrix2x2<u32>;
    pub type umat3 = Matrix3x3<u32>;
    pub type umat4 = Matrix4x4<u32>;
    pub type umat2x2 = Matrix2x2<u32>;
    pub type umat2x3 = Matrix2x3<u32>;
    pub type umat2x4 = Matrix2x4<u32>;
    pub type umat3x2 = Matrix3x2<u32>;
    pub type umat3x3 = Matrix3x3<u32>;
    pub type umat3x4 = Matrix3x4<u32>;
    pub type umat4x2 = Matrix4x2<u32>;
    pub type umat4x3 = Matrix4x3<u32>;
    pub type umat4x4 = Matrix4x4<u32>;

    pub type quat = Quaternion<f32>;
    pub type dquat = Quaternion<f64>;
}

pub use aliases::*;
