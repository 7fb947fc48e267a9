//! Camera and projection scenarios exercised through the public API.

use approx::assert_relative_eq;
use glmath::*;

fn ndc(m: dmat4, p: Vector3<f64>) -> Vector3<f64> {
    let clip = m * p.extend(1.0);
    (clip / clip.w).truncate()
}

#[test]
fn view_matrix_centers_the_scene() {
    let eye = Vector3::new(4.0, 2.0, 4.0);
    let center = Vector3::new(1.0, 2.0, 0.0);
    let view = look_at(Clip::default(), eye, center, Vector3::unit_y());

    assert_relative_eq!(
        (view * eye.extend(1.0)).truncate(),
        Vector3::zero(),
        epsilon = 1e-12
    );
    let d = eye.distance(center);
    assert_relative_eq!(
        (view * center.extend(1.0)).truncate(),
        Vector3::new(0.0, 0.0, -d),
        epsilon = 1e-12
    );
}

#[test]
fn clip_conventions_agree_on_near_and_far() {
    let fovy = radians(70.0f64);
    let cases = [
        (Handedness::Right, DepthRange::NegativeOneToOne, -1.0, -1.0),
        (Handedness::Right, DepthRange::ZeroToOne, -1.0, 0.0),
        (Handedness::Left, DepthRange::NegativeOneToOne, 1.0, -1.0),
        (Handedness::Left, DepthRange::ZeroToOne, 1.0, 0.0),
    ];
    for (hand, depth, z_sign, near_ndc) in cases {
        let m = perspective(Clip::new(hand, depth), fovy, 1.5, 0.25, 80.0);
        assert_relative_eq!(
            ndc(m, Vector3::new(0.0, 0.0, z_sign * 0.25)).z,
            near_ndc,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            ndc(m, Vector3::new(0.0, 0.0, z_sign * 80.0)).z,
            1.0,
            epsilon = 1e-9
        );
    }
}

#[test]
fn ortho_project_unproject_round_trip() {
    let proj = ortho(Clip::default(), -10.0, 10.0, -5.0, 5.0, 0.1, 50.0);
    let model = translate(dmat4::identity(), Vector3::new(0.5, -1.0, -3.0));
    let viewport = Vector4::new(0.0, 0.0, 1024.0, 768.0);

    for obj in [
        Vector3::new(0.0, 0.0, -1.0),
        Vector3::new(3.0, -2.0, -20.0),
        Vector3::new(-7.5, 4.0, -0.5),
    ] {
        let win = project(obj, model, proj, viewport);
        assert_relative_eq!(unproject(win, model, proj, viewport), obj, epsilon = 1e-9);
    }
}

#[test]
fn perspective_keeps_straight_lines_through_center() {
    let proj = perspective(Clip::default(), radians(90.0f64), 1.0, 0.1, 100.0);
    // Points along the view axis all land on the NDC z axis.
    for z in [-0.2, -1.0, -10.0, -90.0] {
        let p = ndc(proj, Vector3::new(0.0, 0.0, z));
        assert_relative_eq!(p.truncate(), Vector2::zero(), epsilon = 1e-12);
    }
}

#[test]
fn pick_matrix_composes_with_projection() {
    let viewport = Vector4::new(0.0, 0.0, 800.0, 600.0);
    let proj = perspective(Clip::default(), radians(60.0f64), 800.0 / 600.0, 0.1, 100.0);
    let target = Vector3::new(0.4, 0.3, -5.0);

    let win = project(target, dmat4::identity(), proj, viewport);
    let picked = pick_matrix(win.truncate(), Vector2::new(4.0, 4.0), viewport) * proj;
    assert_relative_eq!(
        ndc(picked, target).truncate(),
        Vector2::zero(),
        epsilon = 1e-9
    );
}

#[test]
fn rotation_matches_composed_rotate() {
    let axis = Vector3::new(1.0, 1.0, 0.0);
    let angle = radians(30.0f64);
    let m = rotate(dmat4::identity(), angle, axis);
    assert_relative_eq!(m, rotation(angle, axis), epsilon = 1e-15);
    // A rotation matrix is orthonormal: transpose is inverse.
    assert_relative_eq!(m * m.transpose(), dmat4::identity(), epsilon = 1e-12);
}
