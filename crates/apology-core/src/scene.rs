//! Static catalogue of decorative objects and their primitive parts.
//!
//! Every object is an anchor position plus a kind; the kind decides the float
//! motion and which spheres/cylinders make up its body. Nothing here changes
//! at runtime. Hover and click feedback is view state (see [`crate::view`]).

use crate::constants::{
    BLOOM_COLOR, BUTTERFLY_BODY_COLOR, BUTTERFLY_PICK_RADIUS, HEART_PICK_RADIUS, PETAL_COLOR,
    STEM_COLOR,
};
use glam::Vec3;
use smallvec::SmallVec;
use std::f32::consts::TAU;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u16);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Heart,
    Tulip,
    Butterfly,
    TitleText,
}

impl ObjectKind {
    pub const fn is_interactive(self) -> bool {
        matches!(self, ObjectKind::Heart | ObjectKind::Butterfly)
    }

    /// Bobbing parameters, same meaning as the classic `Float` helper.
    pub const fn float_params(self) -> FloatParams {
        match self {
            ObjectKind::Heart => FloatParams::new(2.0, 0.5, 0.5),
            ObjectKind::Tulip => FloatParams::new(1.5, 0.3, 0.8),
            ObjectKind::Butterfly => FloatParams::new(4.0, 0.8, 1.5),
            ObjectKind::TitleText => FloatParams::new(1.0, 0.2, 0.5),
        }
    }

    /// Radius of the sphere used for ray picking, centered on the anchor.
    pub const fn pick_radius(self) -> Option<f32> {
        match self {
            ObjectKind::Heart => Some(HEART_PICK_RADIUS),
            ObjectKind::Butterfly => Some(BUTTERFLY_PICK_RADIUS),
            ObjectKind::Tulip | ObjectKind::TitleText => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatParams {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl FloatParams {
    pub const fn new(speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneObjectSpec {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub position: Vec3,
    pub float: FloatParams,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Sphere,
    /// Y-aligned cylinder extending `half_length` above and below its center.
    Cylinder,
}

/// How a part picks its color each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    Fixed(u32),
    /// Heart pink, deeper while hovered.
    Heart,
    /// Butterfly wing: gold while excited, pink while hovered, violet otherwise.
    Wing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Part {
    pub offset: Vec3,
    pub radius: f32,
    pub half_length: f32,
    pub shape: Shape,
    pub paint: Paint,
    /// Whether the object's hover/excited scale applies to this part.
    pub scaled: bool,
}

impl Part {
    fn sphere(offset: Vec3, radius: f32, paint: Paint, scaled: bool) -> Self {
        Self {
            offset,
            radius,
            half_length: 0.0,
            shape: Shape::Sphere,
            paint,
            scaled,
        }
    }

    fn cylinder(offset: Vec3, radius: f32, length: f32, paint: Paint, scaled: bool) -> Self {
        Self {
            offset,
            radius,
            half_length: length * 0.5,
            shape: Shape::Cylinder,
            paint,
            scaled,
        }
    }
}

pub type Parts = SmallVec<[Part; 8]>;

/// Primitive parts of `kind`, in the object's local frame.
pub fn parts(kind: ObjectKind) -> Parts {
    let mut out = Parts::new();
    match kind {
        ObjectKind::Heart => {
            // Only the main sphere grows on hover; the two lobes stay put.
            out.push(Part::sphere(Vec3::ZERO, 0.5, Paint::Heart, true));
            out.push(Part::sphere(Vec3::new(-0.3, 0.3, 0.0), 0.3, Paint::Heart, false));
            out.push(Part::sphere(Vec3::new(0.3, 0.3, 0.0), 0.3, Paint::Heart, false));
        }
        ObjectKind::Tulip => {
            out.push(Part::cylinder(
                Vec3::new(0.0, -1.0, 0.0),
                0.05,
                2.0,
                Paint::Fixed(STEM_COLOR),
                false,
            ));
            out.push(Part::sphere(
                Vec3::new(0.0, 0.5, 0.0),
                0.4,
                Paint::Fixed(BLOOM_COLOR),
                false,
            ));
            for i in 0..5 {
                let a = i as f32 * TAU / 5.0;
                out.push(Part::sphere(
                    Vec3::new(a.cos() * 0.3, 0.5, a.sin() * 0.3),
                    0.2,
                    Paint::Fixed(PETAL_COLOR),
                    false,
                ));
            }
        }
        ObjectKind::Butterfly => {
            let body = Paint::Fixed(BUTTERFLY_BODY_COLOR);
            out.push(Part::cylinder(Vec3::ZERO, 0.02, 0.8, body, true));
            for side in [-1.0_f32, 1.0] {
                out.push(Part::sphere(Vec3::new(0.3 * side, 0.1, 0.0), 0.25, Paint::Wing, true));
                out.push(Part::sphere(Vec3::new(0.25 * side, -0.2, 0.0), 0.15, Paint::Wing, true));
            }
            for side in [-1.0_f32, 1.0] {
                out.push(Part::cylinder(
                    Vec3::new(0.05 * side, 0.4, 0.0),
                    0.01,
                    0.2,
                    body,
                    true,
                ));
            }
        }
        // Drawn as a DOM label, not geometry.
        ObjectKind::TitleText => {}
    }
    out
}

// Anchor positions of the standard scene.
const TITLE_POSITION: Vec3 = Vec3::new(0.0, 3.0, 0.0);
const HEART_POSITIONS: [Vec3; 5] = [
    Vec3::new(-3.0, 1.0, 0.0),
    Vec3::new(3.0, 1.0, 0.0),
    Vec3::new(0.0, -1.0, 2.0),
    Vec3::new(-2.0, -2.0, -1.0),
    Vec3::new(2.0, -2.0, -1.0),
];
const TULIP_POSITIONS: [Vec3; 4] = [
    Vec3::new(-4.0, -1.0, -2.0),
    Vec3::new(4.0, -1.0, -2.0),
    Vec3::new(-1.0, -2.0, 3.0),
    Vec3::new(1.0, -2.0, 3.0),
];
const BUTTERFLY_POSITIONS: [Vec3; 5] = [
    Vec3::new(-2.0, 2.0, 1.0),
    Vec3::new(2.0, 2.0, 1.0),
    Vec3::new(0.0, 1.0, -2.0),
    Vec3::new(-3.0, 0.0, 2.0),
    Vec3::new(3.0, 0.0, 2.0),
];

#[derive(Clone, Debug)]
pub struct SceneCatalogue {
    objects: Vec<SceneObjectSpec>,
}

impl Default for SceneCatalogue {
    fn default() -> Self {
        Self::standard()
    }
}

impl SceneCatalogue {
    /// The apology scene: title, five hearts, four tulips, five butterflies.
    pub fn standard() -> Self {
        let placements = std::iter::once((ObjectKind::TitleText, TITLE_POSITION))
            .chain(HEART_POSITIONS.iter().map(|p| (ObjectKind::Heart, *p)))
            .chain(TULIP_POSITIONS.iter().map(|p| (ObjectKind::Tulip, *p)))
            .chain(BUTTERFLY_POSITIONS.iter().map(|p| (ObjectKind::Butterfly, *p)));
        Self::from_placements(placements)
    }

    pub fn from_placements(placements: impl IntoIterator<Item = (ObjectKind, Vec3)>) -> Self {
        let objects = placements
            .into_iter()
            .enumerate()
            .map(|(i, (kind, position))| SceneObjectSpec {
                id: ObjectId(i as u16),
                kind,
                position,
                float: kind.float_params(),
            })
            .collect();
        Self { objects }
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObjectSpec> {
        self.objects.get(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObjectSpec> {
        self.objects.iter()
    }

    pub fn of_kind(&self, kind: ObjectKind) -> impl Iterator<Item = &SceneObjectSpec> {
        self.objects.iter().filter(move |o| o.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
