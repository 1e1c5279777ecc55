//! Floating "sorry" captions.
//!
//! One caption per sorry, capped at [`SORRY_TEXT_CAP`]. Positions are purely
//! cosmetic and are re-rolled every time the count changes.

use crate::constants::{FLOAT_PHASE_RANGE, SORRY_TEXT_CAP, SORRY_TEXT_SPREAD};
use crate::float::float_pose;
use crate::scene::FloatParams;
use crate::state::sorry_text_count;
use glam::Vec3;
use rand::Rng;

pub const SORRY_CAPTIONS: [&str; 12] = [
    "I'M SORRY",
    "FORGIVE ME",
    "I LOVE YOU",
    "PLEASE COME BACK",
    "MY HEART ACHES",
    "I MISS YOU",
    "YOU'RE MY WORLD",
    "I'M SORRY BABY",
    "BE MINE AGAIN",
    "YOU'RE PERFECT",
    "I NEED YOU",
    "COME HOME TO ME",
];

/// Bobbing shared by every caption; each caption keeps its own phase.
pub const SORRY_TEXT_FLOAT: FloatParams = FloatParams::new(3.0, 1.0, 2.0);

#[inline]
pub fn caption_for(index: usize) -> &'static str {
    SORRY_CAPTIONS[index % SORRY_CAPTIONS.len()]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SorryText {
    pub caption: &'static str,
    pub position: Vec3,
    pub phase: f32,
}

impl SorryText {
    /// Where the caption is drawn at session time `t_sec`.
    pub fn world_position(&self, t_sec: f32) -> Vec3 {
        float_pose(&SORRY_TEXT_FLOAT, self.phase, t_sec).transform_point(self.position)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SorryTextLayer {
    synced_count: Option<u32>,
    texts: Vec<SorryText>,
}

impl SorryTextLayer {
    pub fn new() -> Self {
        Self {
            synced_count: None,
            texts: Vec::with_capacity(SORRY_TEXT_CAP),
        }
    }

    /// Rebuild the captions if `sorry_count` differs from the last sync.
    /// Returns true when the layer was regenerated.
    pub fn sync<R: Rng + ?Sized>(&mut self, sorry_count: u32, rng: &mut R) -> bool {
        if self.synced_count == Some(sorry_count) {
            return false;
        }
        self.synced_count = Some(sorry_count);
        let n = sorry_text_count(sorry_count);
        self.texts.clear();
        self.texts.extend((0..n).map(|i| SorryText {
            caption: caption_for(i),
            position: random_position(rng),
            phase: rng.gen_range(0.0..FLOAT_PHASE_RANGE),
        }));
        true
    }

    pub fn texts(&self) -> &[SorryText] {
        &self.texts
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

fn random_position<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let [sx, sy, sz] = SORRY_TEXT_SPREAD;
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * sx,
        (rng.gen::<f32>() - 0.5) * sy,
        (rng.gen::<f32>() - 0.5) * sz,
    )
}
