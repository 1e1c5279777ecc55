//! Gentle bobbing motion applied to every scene object.
//!
//! The motion is a slow sinusoid over a per-object random phase, so objects
//! never move in lockstep. The resulting transform rotates about the world
//! origin and then lifts along +Y.

use crate::constants::FLOAT_PHASE_RANGE;
use crate::scene::FloatParams;
use glam::{EulerRot, Quat, Vec3};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatPose {
    pub rotation: Quat,
    pub lift: f32,
}

impl FloatPose {
    pub const IDENTITY: Self = Self {
        rotation: Quat::IDENTITY,
        lift: 0.0,
    };

    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.rotation * p + Vec3::new(0.0, self.lift, 0.0)
    }
}

/// Pose of a floating object at session time `t_sec` with phase `phase`.
pub fn float_pose(params: &FloatParams, phase: f32, t_sec: f32) -> FloatPose {
    let tau = (phase + t_sec) / 4.0 * params.speed;
    let (s, c) = tau.sin_cos();
    let rx = c / 8.0 * params.rotation_intensity;
    let ry = s / 8.0 * params.rotation_intensity;
    let rz = s / 20.0 * params.rotation_intensity;
    FloatPose {
        rotation: Quat::from_euler(EulerRot::XYZ, rx, ry, rz),
        lift: s / 10.0 * params.float_intensity,
    }
}

/// Fresh random phases, one per object.
pub fn random_phases<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<f32> {
    (0..count)
        .map(|_| rng.gen_range(0.0..FLOAT_PHASE_RANGE))
        .collect()
}
