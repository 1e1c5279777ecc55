//! Camera math shared by the renderer, the label layer and picking.
//!
//! These types avoid platform-specific APIs. The web frontend builds a
//! [`Camera`] from the [`OrbitCamera`] every frame and uses it both for the
//! GPU uniforms and to map pointer positions back into the scene.

use crate::constants::{
    CAMERA_EYE, CAMERA_FOV_Y_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_DAMPING_FACTOR,
    ORBIT_POLAR_EPSILON, ORBIT_SETTLE_EPSILON,
};
use glam::{Mat4, Vec2, Vec3, Vec4};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unit vectors `(right, up, forward)` of the view.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward);
        (right, up, forward)
    }

    /// World-space ray through a point in normalized device coordinates.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (p1 - self.eye).normalize(),
        }
    }

    /// Project `world` to NDC (x, y) plus depth in \[0, 1\].
    ///
    /// Returns `None` for points behind the eye or outside the depth range.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        (0.0..=1.0).contains(&ndc.z).then_some(ndc)
    }

    /// Screen pixels covered by one world unit at `world`'s depth.
    pub fn pixels_per_unit(&self, world: Vec3, viewport_height_px: f32) -> f32 {
        let (_, _, forward) = self.basis();
        let depth = (world - self.eye).dot(forward).max(self.znear);
        viewport_height_px / (2.0 * (self.fovy_radians * 0.5).tan() * depth)
    }
}

/// Map a pixel position inside a `width` x `height` viewport to NDC.
#[inline]
pub fn pixel_to_ndc(px: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (2.0 * px.x / width.max(1.0)) - 1.0,
        1.0 - (2.0 * px.y / height.max(1.0)),
    )
}

/// Map NDC back to a pixel position inside the viewport.
#[inline]
pub fn ndc_to_pixel(ndc: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new((ndc.x + 1.0) * 0.5 * width, (1.0 - ndc.y) * 0.5 * height)
}

/// Turntable camera around a fixed target. Rotation only; the radius and
/// target never change.
///
/// Drags are damped: [`rotate_by_pixels`](Self::rotate_by_pixels) queues an
/// angular delta and [`update`](Self::update) eases it in over the following
/// frames, so the view keeps gliding briefly after the pointer stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    /// Angle around +Y, zero looking down -Z.
    pub azimuth: f32,
    /// Angle from +Y, in (0, π).
    pub polar: f32,
    pub fovy_radians: f32,
    /// Queued (azimuth, polar) rotation not yet applied.
    spin: Vec2,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(Vec3::from(CAMERA_EYE), Vec3::ZERO)
    }
}

impl OrbitCamera {
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(CAMERA_ZNEAR);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);
        Self {
            target,
            radius,
            azimuth,
            polar: clamp_polar(polar),
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            spin: Vec2::ZERO,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        self.target + self.radius * Vec3::new(sp * sa, cp, sp * ca)
    }

    /// Queue a pointer drag of `(dx, dy)` pixels. A drag across the full
    /// viewport height is one full turn once it has settled.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height_px: f32) {
        let h = viewport_height_px.max(1.0);
        self.spin -= Vec2::new(TAU * dx / h, TAU * dy / h);
    }

    /// Ease queued rotation in over `dt_sec`. The decay is normalized to
    /// 60 Hz so the glide looks the same at any frame rate.
    pub fn update(&mut self, dt_sec: f32) {
        if self.is_settled() {
            return;
        }
        let keep = (1.0 - ORBIT_DAMPING_FACTOR).powf(dt_sec.max(0.0) * 60.0);
        let mut step = self.spin * (1.0 - keep);
        self.spin -= step;
        if self.spin.length() < ORBIT_SETTLE_EPSILON {
            step += self.spin;
            self.spin = Vec2::ZERO;
        }
        self.apply(step);
    }

    /// Apply all queued rotation at once.
    pub fn settle(&mut self) {
        let rest = std::mem::take(&mut self.spin);
        self.apply(rest);
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.spin == Vec2::ZERO
    }

    fn apply(&mut self, delta: Vec2) {
        self.azimuth = (self.azimuth + delta.x).rem_euclid(TAU);
        self.polar = clamp_polar(self.polar + delta.y);
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: self.fovy_radians,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

#[inline]
fn clamp_polar(polar: f32) -> f32 {
    polar.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON)
}
