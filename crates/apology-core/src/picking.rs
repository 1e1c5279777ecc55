use crate::camera::Ray;
use crate::layout::ObjectPose;
use crate::scene::ObjectId;
use glam::Vec3;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Nearest interactive object hit by `ray`, with its hit distance.
pub fn pick(ray: &Ray, poses: &[ObjectPose]) -> Option<(ObjectId, f32)> {
    let mut best = None::<(ObjectId, f32)>;
    for pose in poses {
        let Some(radius) = pose.kind.pick_radius() else {
            continue;
        };
        if let Some(t) = ray_sphere(ray.origin, ray.dir, pose.center(), radius * pose.scale) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((pose.id, t)),
            }
        }
    }
    best
}
