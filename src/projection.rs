//! Model, camera, and projection transforms.
//!
//! Every projection constructor exists in three forms: a dispatching form
//! taking a [`Clip`] describing the target clip space, and explicit `_lh`
//! and `_rh` forms taking the [`DepthRange`] alone. There is no global
//! state; callers say which clip convention they want at every call site.
//!
//! Matrices are column-major and compose on the left: `proj * view * model`
//! applied to a column vector.

use crate::matrix::Matrix4x4;
use crate::scalar::{FloatScalar, Scalar};
use crate::vector::{Vector2, Vector3, Vector4};

/// Which way the camera's z axis points in view space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Handedness {
    Left,
    #[default]
    Right,
}

/// NDC depth interval the projection maps the near..far range onto.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DepthRange {
    /// OpenGL-style `[-1, 1]`.
    #[default]
    NegativeOneToOne,
    /// Vulkan/D3D-style `[0, 1]`.
    ZeroToOne,
}

/// Target clip-space convention for the dispatching projection functions.
///
/// The default is right-handed with `[-1, 1]` depth (classic OpenGL).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clip {
    pub handedness: Handedness,
    pub depth: DepthRange,
}

impl Clip {
    #[inline]
    pub const fn new(handedness: Handedness, depth: DepthRange) -> Self {
        Self { handedness, depth }
    }
}

/// Appends a translation by `v` to `m`: the first three columns pass
/// through, the fourth becomes `m * (v, 1)`.
pub fn translate<T: Scalar>(m: Matrix4x4<T>, v: Vector3<T>) -> Matrix4x4<T> {
    let t = m.cols[0] * v.x + m.cols[1] * v.y + m.cols[2] * v.z + m.cols[3];
    Matrix4x4::from_cols(m.cols[0], m.cols[1], m.cols[2], t)
}

/// Appends a scale by `v` to `m`.
pub fn scale<T: Scalar>(m: Matrix4x4<T>, v: Vector3<T>) -> Matrix4x4<T> {
    Matrix4x4::from_cols(m.cols[0] * v.x, m.cols[1] * v.y, m.cols[2] * v.z, m.cols[3])
}

/// Appends a rotation of `angle` radians around `axis` to `m`.
///
/// The rotation terms come from Rodrigues' formula,
/// `R = cos θ · I + (1 - cos θ) · axis⊗axis + sin θ · [axis]ₓ`,
/// expanded per component and folded into `m`'s upper 3x3 block without
/// materializing `R`.
pub fn rotate<T: FloatScalar>(m: Matrix4x4<T>, angle: T, axis: Vector3<T>) -> Matrix4x4<T> {
    let c = angle.cos();
    let s = angle.sin();
    let axis = axis.normalized();
    let temp = axis * (T::one() - c);

    let r00 = c + temp.x * axis.x;
    let r01 = temp.x * axis.y + s * axis.z;
    let r02 = temp.x * axis.z - s * axis.y;

    let r10 = temp.y * axis.x - s * axis.z;
    let r11 = c + temp.y * axis.y;
    let r12 = temp.y * axis.z + s * axis.x;

    let r20 = temp.z * axis.x + s * axis.y;
    let r21 = temp.z * axis.y - s * axis.x;
    let r22 = c + temp.z * axis.z;

    Matrix4x4::from_cols(
        m.cols[0] * r00 + m.cols[1] * r01 + m.cols[2] * r02,
        m.cols[0] * r10 + m.cols[1] * r11 + m.cols[2] * r12,
        m.cols[0] * r20 + m.cols[1] * r21 + m.cols[2] * r22,
        m.cols[3],
    )
}

/// The bare rotation matrix of `angle` radians around `axis`, with the same
/// per-component expansion as [`rotate`].
pub fn rotation<T: FloatScalar>(angle: T, axis: Vector3<T>) -> Matrix4x4<T> {
    let zero = T::zero();
    let one = T::one();
    let c = angle.cos();
    let s = angle.sin();
    let axis = axis.normalized();
    let t = one - c;

    Matrix4x4::from_cols(
        Vector4::new(
            c + t * axis.x * axis.x,
            t * axis.x * axis.y + s * axis.z,
            t * axis.x * axis.z - s * axis.y,
            zero,
        ),
        Vector4::new(
            t * axis.y * axis.x - s * axis.z,
            c + t * axis.y * axis.y,
            t * axis.y * axis.z + s * axis.x,
            zero,
        ),
        Vector4::new(
            t * axis.z * axis.x + s * axis.y,
            t * axis.z * axis.y - s * axis.x,
            c + t * axis.z * axis.z,
            zero,
        ),
        Vector4::new(zero, zero, zero, one),
    )
}

pub fn ortho<T: FloatScalar>(
    clip: Clip,
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Matrix4x4<T> {
    match clip.handedness {
        Handedness::Left => ortho_lh(clip.depth, left, right, bottom, top, near, far),
        Handedness::Right => ortho_rh(clip.depth, left, right, bottom, top, near, far),
    }
}

/// 2D orthographic projection: z passes through negated, depth range fixed
/// at `[-1, 1]`.
pub fn ortho2d<T: FloatScalar>(left: T, right: T, bottom: T, top: T) -> Matrix4x4<T> {
    let zero = T::zero();
    let one = T::one();

    let r00 = T::TWO / (right - left);
    let r11 = T::TWO / (top - bottom);
    let r30 = -(right + left) / (right - left);
    let r31 = -(top + bottom) / (top - bottom);

    Matrix4x4::from_cols(
        Vector4::new(r00, zero, zero, zero),
        Vector4::new(zero, r11, zero, zero),
        Vector4::new(zero, zero, -one, zero),
        Vector4::new(r30, r31, zero, one),
    )
}

pub fn ortho_lh<T: FloatScalar>(
    depth: DepthRange,
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Matrix4x4<T> {
    let zero = T::zero();
    let one = T::one();

    let r00 = T::TWO / (right - left);
    let r11 = T::TWO / (top - bottom);
    let r30 = -(right + left) / (right - left);
    let r31 = -(top + bottom) / (top - bottom);

    let (r22, r32) = match depth {
        DepthRange::ZeroToOne => (one / (far - near), -near / (far - near)),
        DepthRange::NegativeOneToOne => (T::TWO / (far - near), -(far + near) / (far - near)),
    };

    Matrix4x4::from_cols(
        Vector4::new(r00, zero, zero, zero),
        Vector4::new(zero, r11, zero, zero),
        Vector4::new(zero, zero, r22, zero),
        Vector4::new(r30, r31, r32, one),
    )
}

pub fn ortho_rh<T: FloatScalar>(
    depth: DepthRange,
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Matrix4x4<T> {
    let zero = T::zero();
    let one = T::one();

    let r00 = T::TWO / (right - left);
    let r11 = T::TWO / (top - bottom);
    let r30 = -(right + left) / (right - left);
    let r31 = -(top + bottom) / (top - bottom);

    let (r22, r32) = match depth {
        DepthRange::ZeroToOne => (-one / (far - near), -near / (far - near)),
        DepthRange::NegativeOneToOne => (-T::TWO / (far - near), -(far + near) / (far - near)),
    };

    Matrix4x4::from_cols(
        Vector4::new(r00, zero, zero, zero),
        Vector4::new(zero, r11, zero, zero),
        Vector4::new(zero, zero, r22, zero),
        Vector4::new(r30, r31, r32, one),
    )
}

pub fn frustum<T: FloatScalar>(
    clip: Clip,
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Matrix4x4<T> {
    match clip.handedness {
        Handedness::Left => frustum_lh(clip.depth, left, right, bottom, top, near, far),
        Handedness::Right => frustum_rh(clip.depth, left, right, bottom, top, near, far),
    }
}

pub fn frustum_lh<T: FloatScalar>(
    depth: DepthRange,
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Matrix4x4<T> {
    let zero = T::zero();
    let one = T::one();

    let r00 = (T::TWO * near) / (right - left);
    let r11 = (T::TWO * near) / (top - bottom);
    let r20 = (right + left) / (right - left);
    let r21 = (top + bottom) / (top - bottom);

    let (r22, r32) = match depth {
        DepthRange::ZeroToOne => (far / (far - near), -(far * near) / (far - near)),
        DepthRange::NegativeOneToOne => (
            (far + near) / (far - near),
            -(T::TWO * far * near) / (far - near),
        ),
    };

    Matrix4x4::from_cols(
        Vector4::new(r00, zero, zero, zero),
        Vector4::new(zero, r11, zero, zero),
        Vector4::new(r20, r21, r22, one),
        Vector4::new(zero, zero, r32, zero),
    )
}

pub fn frustum_rh<T: FloatScalar>(
    depth: DepthRange,
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Matrix4x4<T> {
    let zero = T::zero();
    let one = T::one();

    let r00 = (T::TWO * near) / (right - left);
    let r11 = (T::TWO * near) / (top - bottom);
    let r20 = (right + left) / (right - left);
    let r21 = (top + bottom) / (top - bottom);

    let (r22, r32) = match depth {
        DepthRange::ZeroToOne => (far / (near - far), -(far * near) / (far - near)),
        DepthRange::NegativeOneToOne => (
            -(far + near) / (far - near),
            -(T::TWO * far * near) / (far - near),
        ),
    };

    Matrix4x4::from_cols(
        Vector4::new(r00, zero, zero, zero),
        Vector4::new(zero, r11, zero, zero),
        Vector4::new(r20, r21, r22, -one),
        Vector4::new(zero, zero, r32, zero),
    )
}

/// Symmetric perspective projection from a vertical field of view.
///
/// # Panics
///
/// Panics when `aspect` is not strictly positive.
pub fn perspective<T: FloatScalar>(
    clip: Clip,
    fovy: T,
    aspect: T,
    near: T,
    far: T,
) -> Matrix4x4<T> {
    match clip.handedness {
        Handedness::Left => perspective_lh(clip.depth, fovy, aspect, near, far),
        Handedness::Right => perspective_rh(clip.depth, fovy, aspect, near, far),
    }
}

pub fn perspective_lh<T: FloatScalar>(
    depth: DepthRange,
    fovy: T,
    aspect: T,
    near: T,
    far: T,
) -> Matrix4x4<T> {
    assert!(aspect > T::zero(), "aspect ratio must be positive");

    let zero = T::zero();
    let one = T::one();
    let tan_half_fovy = (fovy / T::TWO).tan();

    let r00 = one / (aspect * tan_half_fovy);
    let r11 = one / tan_half_fovy;

    let (r22, r32) = match depth {
        DepthRange::ZeroToOne => (far / (far - near), -(far * near) / (far - near)),
        DepthRange::NegativeOneToOne => (
            (far + near) / (far - near),
            -(T::TWO * far * near) / (far - near),
        ),
    };

    Matrix4x4::from_cols(
        Vector4::new(r00, zero, zero, zero),
        Vector4::new(zero, r11, zero, zero),
        Vector4::new(zero, zero, r22, one),
        Vector4::new(zero, zero, r32, zero),
    )
}

pub fn perspective_rh<T: FloatScalar>(
    depth: DepthRange,
    fovy: T,
    aspect: T,
    near: T,
    far: T,
) -> Matrix4x4<T> {
    assert!(aspect > T::zero(), "aspect ratio must be positive");

    let zero = T::zero();
    let one = T::one();
    let tan_half_fovy = (fovy / T::TWO).tan();

    let r00 = one / (aspect * tan_half_fovy);
    let r11 = one / tan_half_fovy;

    let (r22, r32) = match depth {
        DepthRange::ZeroToOne => (far / (near - far), -(far * near) / (far - near)),
        DepthRange::NegativeOneToOne => (
            -(far + near) / (far - near),
            -(T::TWO * far * near) / (far - near),
        ),
    };

    Matrix4x4::from_cols(
        Vector4::new(r00, zero, zero, zero),
        Vector4::new(zero, r11, zero, zero),
        Vector4::new(zero, zero, r22, -one),
        Vector4::new(zero, zero, r32, zero),
    )
}

/// Perspective projection from a field of view and a viewport size in
/// pixels.
///
/// # Panics
///
/// Panics when `fov`, `width`, or `height` is not strictly positive.
pub fn perspective_fov<T: FloatScalar>(
    clip: Clip,
    fov: T,
    width: T,
    height: T,
    near: T,
    far: T,
) -> Matrix4x4<T> {
    match clip.handedness {
        Handedness::Left => perspective_fov_lh(clip.depth, fov, width, height, near, far),
        Handedness::Right => perspective_fov_rh(clip.depth, fov, width, height, near, far),
    }
}

pub fn perspective_fov_lh<T: FloatScalar>(
    depth: DepthRange,
    fov: T,
    width: T,
    height: T,
    near: T,
    far: T,
) -> Matrix4x4<T> {
    assert!(fov > T::zero(), "field of view must be positive");
    assert!(width > T::zero(), "viewport width must be positive");
    assert!(height > T::zero(), "viewport height must be positive");

    let zero = T::zero();
    let one = T::one();

    let r00 = (fov / T::TWO).cos() / (fov / T::TWO).sin();
    let r11 = r00 * height / width;

    let (r22, r32) = match depth {
        DepthRange::ZeroToOne => (far / (far - near), -(far * near) / (far - near)),
        DepthRange::NegativeOneToOne => (
            (far + near) / (far - near),
            -(T::TWO * far * near) / (far - near),
        ),
    };

    Matrix4x4::from_cols(
        Vector4::new(r00, zero, zero, zero),
        Vector4::new(zero, r11, zero, zero),
        Vector4::new(zero, zero, r22, one),
        Vector4::new(zero, zero, r32, zero),
    )
}

pub fn perspective_fov_rh<T: FloatScalar>(
    depth: DepthRange,
    fov: T,
    width: T,
    height: T,
    near: T,
    far: T,
) -> Matrix4x4<T> {
    assert!(fov > T::zero(), "field of view must be positive");
    assert!(width > T::zero(), "viewport width must be positive");
    assert!(height > T::zero(), "viewport height must be positive");

    let zero = T::zero();
    let one = T::one();

    let r00 = (fov / T::TWO).cos() / (fov / T::TWO).sin();
    let r11 = r00 * height / width;

    let (r22, r32) = match depth {
        DepthRange::ZeroToOne => (far / (near - far), -(far * near) / (far - near)),
        DepthRange::NegativeOneToOne => (
            -(far + near) / (far - near),
            -(T::TWO * far * near) / (far - near),
        ),
    };

    Matrix4x4::from_cols(
        Vector4::new(r00, zero, zero, zero),
        Vector4::new(zero, r11, zero, zero),
        Vector4::new(zero, zero, r22, -one),
        Vector4::new(zero, zero, r32, zero),
    )
}

/// Perspective projection with the far plane at infinity.
///
/// `ep` nudges the depth mapping away from the limit to leave headroom for
/// depth-test precision tricks; `ep == 0` selects the largest representable
/// value strictly below the limit instead. The depth range of `clip` does
/// not apply here; only its handedness is used.
pub fn infinite_perspective<T: FloatScalar>(
    clip: Clip,
    fovy: T,
    aspect: T,
    near: T,
    ep: T,
) -> Matrix4x4<T> {
    match clip.handedness {
        Handedness::Left => infinite_perspective_lh(fovy, aspect, near, ep),
        Handedness::Right => infinite_perspective_rh(fovy, aspect, near, ep),
    }
}

pub fn infinite_perspective_lh<T: FloatScalar>(
    fovy: T,
    aspect: T,
    near: T,
    ep: T,
) -> Matrix4x4<T> {
    let zero = T::zero();
    let one = T::one();

    let range = (fovy / T::TWO).tan() * near;
    let left = -range * aspect;
    let right = range * aspect;
    let bottom = -range;
    let top = range;

    let r00 = (T::TWO * near) / (right - left);
    let r11 = (T::TWO * near) / (top - bottom);
    let r32 = ep - T::TWO * near;

    // 1 - epsilon/2 is the largest float strictly below one.
    let r22 = if ep == zero {
        one - T::epsilon() / T::TWO
    } else {
        one - ep
    };

    Matrix4x4::from_cols(
        Vector4::new(r00, zero, zero, zero),
        Vector4::new(zero, r11, zero, zero),
        Vector4::new(zero, zero, r22, one),
        Vector4::new(zero, zero, r32, zero),
    )
}

pub fn infinite_perspective_rh<T: FloatScalar>(
    fovy: T,
    aspect: T,
    near: T,
    ep: T,
) -> Matrix4x4<T> {
    let zero = T::zero();
    let one = T::one();

    let range = (fovy / T::TWO).tan() * near;
    let left = -range * aspect;
    let right = range * aspect;
    let bottom = -range;
    let top = range;

    let r00 = (T::TWO * near) / (right - left);
    let r11 = (T::TWO * near) / (top - bottom);
    let r32 = ep - T::TWO * near;

    let r22 = if ep == zero {
        -(one - T::epsilon() / T::TWO)
    } else {
        ep - one
    };

    Matrix4x4::from_cols(
        Vector4::new(r00, zero, zero, zero),
        Vector4::new(zero, r11, zero, zero),
        Vector4::new(zero, zero, r22, -one),
        Vector4::new(zero, zero, r32, zero),
    )
}

/// View matrix looking from `eye` toward `center`.
pub fn look_at<T: FloatScalar>(
    clip: Clip,
    eye: Vector3<T>,
    center: Vector3<T>,
    up: Vector3<T>,
) -> Matrix4x4<T> {
    match clip.handedness {
        Handedness::Left => look_at_lh(eye, center, up),
        Handedness::Right => look_at_rh(eye, center, up),
    }
}

pub fn look_at_lh<T: FloatScalar>(
    eye: Vector3<T>,
    center: Vector3<T>,
    up: Vector3<T>,
) -> Matrix4x4<T> {
    let zero = T::zero();
    let one = T::one();

    let f = (center - eye).normalized();
    let s = up.cross(f).normalized();
    let u = f.cross(s);

    Matrix4x4::from_cols(
        Vector4::new(s.x, u.x, f.x, zero),
        Vector4::new(s.y, u.y, f.y, zero),
        Vector4::new(s.z, u.z, f.z, zero),
        Vector4::new(-s.dot(eye), -u.dot(eye), -f.dot(eye), one),
    )
}

pub fn look_at_rh<T: FloatScalar>(
    eye: Vector3<T>,
    center: Vector3<T>,
    up: Vector3<T>,
) -> Matrix4x4<T> {
    let zero = T::zero();
    let one = T::one();

    let f = (center - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    Matrix4x4::from_cols(
        Vector4::new(s.x, u.x, -f.x, zero),
        Vector4::new(s.y, u.y, -f.y, zero),
        Vector4::new(s.z, u.z, -f.z, zero),
        Vector4::new(-s.dot(eye), -u.dot(eye), f.dot(eye), one),
    )
}

/// Maps object coordinates to window coordinates through `proj * model` and
/// the viewport rectangle `(x, y, width, height)`.
pub fn project<T: FloatScalar>(
    obj: Vector3<T>,
    model: Matrix4x4<T>,
    proj: Matrix4x4<T>,
    viewport: Vector4<T>,
) -> Vector3<T> {
    let mut tmp = obj.extend(T::one());
    tmp = model * tmp;
    tmp = proj * tmp;
    tmp = tmp / tmp.w;
    tmp = tmp * T::HALF + T::HALF;
    tmp.x = tmp.x * viewport.z + viewport.x;
    tmp.y = tmp.y * viewport.w + viewport.y;
    tmp.truncate()
}

/// The inverse of [`project`]: window coordinates (with the window depth in
/// z) back to object coordinates.
pub fn unproject<T: FloatScalar>(
    win: Vector3<T>,
    model: Matrix4x4<T>,
    proj: Matrix4x4<T>,
    viewport: Vector4<T>,
) -> Vector3<T> {
    let mut tmp = win.extend(T::one());
    tmp.x = (tmp.x - viewport.x) / viewport.z;
    tmp.y = (tmp.y - viewport.y) / viewport.w;
    tmp = tmp * T::TWO - T::one();

    let inv = (proj * model).inverse();
    let obj = inv * tmp;
    let obj = obj / obj.w;
    obj.truncate()
}

/// Restricts a projection to the `delta`-sized region around `center`, in
/// window coordinates, for picking.
///
/// # Panics
///
/// Panics when either component of `delta` is not strictly positive.
pub fn pick_matrix<T: FloatScalar>(
    center: Vector2<T>,
    delta: Vector2<T>,
    viewport: Vector4<T>,
) -> Matrix4x4<T> {
    assert!(
        delta.x > T::zero() && delta.y > T::zero(),
        "pick region must have positive extent"
    );

    let tmpx = (viewport.z - T::TWO * (center.x - viewport.x)) / delta.x;
    let tmpy = (viewport.w - T::TWO * (center.y - viewport.y)) / delta.y;

    let trans = Vector3::new(tmpx, tmpy, T::zero());
    let scal = Vector3::new(viewport.z / delta.x, viewport.w / delta.y, T::one());
    scale(translate(Matrix4x4::identity(), trans), scal)
}
