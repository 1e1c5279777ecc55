//! Per-frame placement of catalogue objects.
//!
//! Combines the static anchor, the float motion and the view-state scale into
//! one pose per object. The renderer, the label layer and picking all read the
//! same poses so what is clicked is what is drawn.

use crate::float::{float_pose, FloatPose};
use crate::scene::{ObjectId, ObjectKind, SceneCatalogue};
use crate::view::ViewStates;
use glam::Vec3;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectPose {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub anchor: Vec3,
    pub float: FloatPose,
    pub scale: f32,
}

impl ObjectPose {
    /// World position of the object's anchor.
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.float.transform_point(self.anchor)
    }

    /// World position of a point given in the object's local frame.
    #[inline]
    pub fn local_to_world(&self, local: Vec3, scaled: bool) -> Vec3 {
        let s = if scaled { self.scale } else { 1.0 };
        self.float.transform_point(self.anchor + local * s)
    }
}

/// Poses of every catalogue object at session time `now`.
///
/// `phases` holds one float phase per object; missing entries float from
/// phase zero.
pub fn object_poses(
    catalogue: &SceneCatalogue,
    phases: &[f32],
    views: &ViewStates,
    now: Duration,
    out: &mut Vec<ObjectPose>,
) {
    out.clear();
    let t = now.as_secs_f32();
    out.extend(catalogue.iter().map(|spec| {
        let phase = phases.get(spec.id.0 as usize).copied().unwrap_or(0.0);
        ObjectPose {
            id: spec.id,
            kind: spec.kind,
            anchor: spec.position,
            float: float_pose(&spec.float, phase, t),
            scale: views.scale(spec.id, spec.kind, now),
        }
    }));
}
