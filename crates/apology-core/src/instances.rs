//! GPU instance packing for the impostor renderer.
//!
//! Each sphere or cylinder part becomes one camera-facing quad. The layout of
//! [`InstanceRaw`] matches the vertex attributes in `shaders/scene.wgsl`.

use crate::layout::ObjectPose;
use crate::scene::{parts, Shape};
use crate::view::ViewStates;
use glam::Vec3;
use std::time::Duration;

pub const SHAPE_SPHERE: f32 = 0.0;
pub const SHAPE_CYLINDER: f32 = 1.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub center: [f32; 3],
    pub radius: f32,
    /// Cylinder axis scaled by its half length; zero for spheres.
    pub axis: [f32; 3],
    pub shape: f32,
    /// Linear RGB plus opacity.
    pub color: [f32; 4],
}

/// Append one instance per primitive part of every posed object.
pub fn build_instances(
    poses: &[ObjectPose],
    views: &ViewStates,
    now: Duration,
    out: &mut Vec<InstanceRaw>,
) {
    out.clear();
    for pose in poses {
        for part in parts(pose.kind) {
            let s = if part.scaled { pose.scale } else { 1.0 };
            let center = pose.local_to_world(part.offset, part.scaled);
            let color = views.paint_color(pose.id, part.paint, now);
            let (axis, shape) = match part.shape {
                Shape::Sphere => (Vec3::ZERO, SHAPE_SPHERE),
                Shape::Cylinder => (
                    pose.float.rotation * Vec3::Y * (part.half_length * s),
                    SHAPE_CYLINDER,
                ),
            };
            out.push(InstanceRaw {
                center: center.to_array(),
                radius: part.radius * s,
                axis: axis.to_array(),
                shape,
                color: color.to_array(),
            });
        }
    }
}

/// Opaque parts first, then translucent ones far-to-near, so alpha blending
/// composes correctly over the depth buffer.
pub fn sort_for_blending(instances: &mut [InstanceRaw], eye: Vec3) {
    instances.sort_by(|a, b| {
        let a_opaque = a.color[3] >= 1.0;
        let b_opaque = b.color[3] >= 1.0;
        b_opaque.cmp(&a_opaque).then_with(|| {
            if a_opaque {
                std::cmp::Ordering::Equal
            } else {
                let da = Vec3::from(a.center).distance_squared(eye);
                let db = Vec3::from(b.center).distance_squared(eye);
                db.total_cmp(&da)
            }
        })
    });
}
