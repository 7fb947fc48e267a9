//! Cross-module scenarios exercised through the public API.

use approx::assert_relative_eq;
use glmath::*;

#[test]
fn matrix_vector_product_is_column_combination() {
    let m0 = dmat4::from_cols(
        Vector4::new(0.0, 1.0, 2.0, 3.0),
        Vector4::new(4.0, 5.0, 6.0, 7.0),
        Vector4::new(8.0, 9.0, 10.0, 11.0),
        Vector4::new(12.0, 13.0, 14.0, 15.0),
    );
    let v0 = Vector4::new(0.3, 0.5, 0.7, 0.2);
    assert_relative_eq!(
        m0 * v0,
        Vector4::new(10.0, 11.7, 13.4, 15.1),
        max_relative = 1e-12
    );
}

#[test]
fn inverse_round_trips_through_identity() {
    let m = rotate(
        translate(dmat4::identity(), Vector3::new(1.0, -2.0, 0.5)),
        0.8,
        Vector3::new(0.2, 1.0, -0.4),
    );
    assert_relative_eq!(m * m.inverse(), dmat4::identity(), epsilon = 1e-12);
    assert_relative_eq!(m / m, dmat4::identity(), epsilon = 1e-12);
}

#[test]
fn normalized_vectors_have_unit_length() {
    for v in [
        Vector3::new(3.0f64, 4.0, 12.0),
        Vector3::new(-0.001, 0.002, 0.003),
        Vector3::new(1e8, -2e8, 3e8),
    ] {
        assert_relative_eq!(v.normalized().length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn cross_product_is_anti_commutative() {
    let a = Vector3::new(0.3f64, -1.2, 2.5);
    let b = Vector3::new(1.7f64, 0.4, -0.9);
    assert_eq!(a.cross(b), -(b.cross(a)));
    // And orthogonal to both operands.
    assert_relative_eq!(a.cross(b).dot(a), 0.0, epsilon = 1e-12);
    assert_relative_eq!(a.cross(b).dot(b), 0.0, epsilon = 1e-12);
}

#[test]
fn complex_basics() {
    assert_eq!(Complex::new(3.0f64, 4.0).abs(), 5.0);
    // Multiplying by i rotates the real axis onto the imaginary axis.
    assert_eq!(
        Complex::new(1.0f64, 0.0) * Complex::new(0.0, 1.0),
        Complex::new(0.0, 1.0)
    );
}

#[test]
fn transpose_round_trips_across_shapes() {
    let m = mat3x4::from_fn(|r, c| (r * 4 + c) as f32);
    let t: mat4x3 = m.transpose();
    assert_eq!(t.transpose(), m);
    assert_eq!(t[(3, 2)], m[(2, 3)]);
}

#[test]
fn widening_a_matrix_embeds_it_in_the_identity() {
    let m = mat2::from_cols(Vector2::new(0.0, 2.0), Vector2::new(-1.0, 3.0));
    let wide = mat4::from(m);
    let v = Vector4::new(1.0, 1.0, 5.0, 7.0);
    let out = wide * v;
    // The trailing components pass straight through.
    assert_eq!(out.z, 5.0);
    assert_eq!(out.w, 7.0);
    assert_eq!(out.truncate().truncate(), m * Vector2::new(1.0, 1.0));
}

#[test]
fn half_precision_survives_representable_values() {
    for f in [0.0f32, 1.0, -1.0, 0.5, 65504.0, 2.0f32.powi(-24)] {
        assert_eq!(f32_from_half(half_from_f32(f)), f);
    }
    // Conversion rounds to the nearest half.
    assert_eq!(half_from_f32(f32_from_half(0x3c01) - 1e-5), 0x3c01);
}

#[cfg(feature = "serde")]
mod serde_round_trips {
    use super::*;

    #[test]
    fn containers_round_trip_through_bincode() {
        let v = Vector3::new(1.0f32, -2.5, 3.25);
        let bytes = bincode::serialize(&v).unwrap();
        assert_eq!(bincode::deserialize::<vec3>(&bytes).unwrap(), v);

        let m = dmat4::identity() * 2.0;
        let bytes = bincode::serialize(&m).unwrap();
        assert_eq!(bincode::deserialize::<dmat4>(&bytes).unwrap(), m);

        let q = Quaternion::new(0.1f64, 0.2, 0.3, 0.4);
        let bytes = bincode::serialize(&q).unwrap();
        assert_eq!(bincode::deserialize::<dquat>(&bytes).unwrap(), q);

        let z = Complex::new(1.5f32, -0.5);
        let bytes = bincode::serialize(&z).unwrap();
        assert_eq!(bincode::deserialize::<Complex<f32>>(&bytes).unwrap(), z);
    }
}
