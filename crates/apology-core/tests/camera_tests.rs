// Host-side tests for the orbit camera, projection and pixel/NDC mapping.

use apology_core::{ndc_to_pixel, pixel_to_ndc, OrbitCamera};
use glam::{Vec2, Vec3};

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-3
}

#[test]
fn default_orbit_sits_eight_units_down_z() {
    let orbit = OrbitCamera::default();
    assert!(approx(orbit.eye(), Vec3::new(0.0, 0.0, 8.0)), "{:?}", orbit.eye());
    assert!((orbit.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
}

#[test]
fn origin_projects_to_screen_center() {
    let cam = OrbitCamera::default().camera(16.0 / 9.0);
    let ndc = cam.project(Vec3::ZERO).expect("origin is in front of the camera");
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn points_behind_the_eye_do_not_project() {
    let cam = OrbitCamera::default().camera(1.0);
    assert!(cam.project(Vec3::new(0.0, 0.0, 20.0)).is_none());
}

#[test]
fn center_ray_looks_at_the_target() {
    let cam = OrbitCamera::default().camera(1.5);
    let ray = cam.ray_through_ndc(Vec2::ZERO);
    assert!(approx(ray.origin, Vec3::new(0.0, 0.0, 8.0)));
    assert!(approx(ray.dir, Vec3::new(0.0, 0.0, -1.0)), "{:?}", ray.dir);
    assert!(approx(ray.at(8.0), Vec3::ZERO));
}

#[test]
fn ray_and_projection_agree() {
    let cam = OrbitCamera::default().camera(1.25);
    let p = Vec3::new(-3.0, 1.0, 0.0);
    let ndc = cam.project(p).unwrap();
    let ray = cam.ray_through_ndc(ndc.truncate());
    assert!(approx(ray.dir, (p - ray.origin).normalize()), "{:?}", ray.dir);
}

#[test]
fn drag_rotates_but_keeps_radius() {
    let mut orbit = OrbitCamera::default();
    orbit.rotate_by_pixels(120.0, -40.0, 800.0);
    orbit.settle();
    assert!((orbit.eye().length() - 8.0).abs() < 1e-3);
    assert!(!approx(orbit.eye(), Vec3::new(0.0, 0.0, 8.0)));
}

#[test]
fn full_height_horizontal_drag_is_one_turn() {
    let mut orbit = OrbitCamera::default();
    let before = orbit.eye();
    orbit.rotate_by_pixels(600.0, 0.0, 600.0);
    orbit.settle();
    assert!(approx(orbit.eye(), before), "{:?} vs {:?}", orbit.eye(), before);
}

#[test]
fn vertical_drag_never_flips_over_the_pole() {
    let mut orbit = OrbitCamera::default();
    orbit.rotate_by_pixels(0.0, 10_000.0, 500.0);
    orbit.settle();
    let eye = orbit.eye();
    assert!(eye.is_finite());
    assert!(orbit.polar > 0.0 && orbit.polar < std::f32::consts::PI);
    let cam = orbit.camera(1.0);
    let (right, up, forward) = cam.basis();
    assert!(right.is_finite() && up.is_finite() && forward.is_finite());
}

#[test]
fn drag_eases_in_over_frames() {
    let mut orbit = OrbitCamera::default();
    let start = orbit.azimuth;
    orbit.rotate_by_pixels(-100.0, 0.0, 1000.0);
    // Nothing moves until the frame loop runs
    assert_eq!(orbit.azimuth, start);
    assert!(!orbit.is_settled());

    let total = std::f32::consts::TAU * 0.1;
    orbit.update(1.0 / 60.0);
    let first = orbit.azimuth - start;
    assert!((first - total * 0.05).abs() < 1e-4, "first step {}", first);

    // Keeps gliding after the pointer stops, converging on the full drag
    let mut prev = first;
    for _ in 0..10 {
        orbit.update(1.0 / 60.0);
        let moved = orbit.azimuth - start;
        assert!(moved > prev);
        prev = moved;
    }
    for _ in 0..1000 {
        orbit.update(1.0 / 60.0);
    }
    assert!(orbit.is_settled());
    assert!((orbit.azimuth - start - total).abs() < 1e-3);
}

#[test]
fn damping_is_frame_rate_independent() {
    let mut a = OrbitCamera::default();
    let mut b = OrbitCamera::default();
    a.rotate_by_pixels(50.0, 20.0, 600.0);
    b.rotate_by_pixels(50.0, 20.0, 600.0);
    for _ in 0..30 {
        a.update(1.0 / 30.0);
    }
    for _ in 0..120 {
        b.update(1.0 / 120.0);
    }
    assert!((a.azimuth - b.azimuth).abs() < 1e-4);
    assert!((a.polar - b.polar).abs() < 1e-4);
}

#[test]
fn pixel_and_ndc_mapping_round_trip() {
    let (w, h) = (1280.0, 720.0);
    assert_eq!(pixel_to_ndc(Vec2::new(640.0, 360.0), w, h), Vec2::ZERO);
    assert_eq!(pixel_to_ndc(Vec2::new(0.0, 0.0), w, h), Vec2::new(-1.0, 1.0));
    let px = Vec2::new(100.0, 500.0);
    let back = ndc_to_pixel(pixel_to_ndc(px, w, h), w, h);
    assert!((back - px).length() < 1e-3);
}

#[test]
fn text_shrinks_with_distance() {
    let cam = OrbitCamera::default().camera(1.0);
    let near = cam.pixels_per_unit(Vec3::new(0.0, 0.0, 4.0), 800.0);
    let mid = cam.pixels_per_unit(Vec3::ZERO, 800.0);
    let far = cam.pixels_per_unit(Vec3::new(0.0, 0.0, -4.0), 800.0);
    assert!(near > mid && mid > far);
    let expected = 800.0 / (2.0 * (75f32.to_radians() * 0.5).tan() * 8.0);
    assert!((mid - expected).abs() < 1e-2);
}
