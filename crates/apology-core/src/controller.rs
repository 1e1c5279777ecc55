//! The Apology Scene Controller.
//!
//! Owns the [`InteractionState`] and the dismissal schedule for the message
//! panel. All operations take the session clock (`now`, elapsed since the
//! scene started) so the behavior is deterministic under test.

use crate::error::SceneError;
use crate::scene::{ObjectId, ObjectKind, SceneCatalogue};
use crate::state::{Activation, InteractionState};
use crate::timer::{Generation, GenerationTimer, ScheduledTask};
use crate::view::ViewStates;
use std::time::Duration;

/// Emitted when the message panel was hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dismissed {
    pub generation: Generation,
    pub at: Duration,
}

#[derive(Clone, Debug, Default)]
pub struct SceneController {
    state: InteractionState,
    dismissal: GenerationTimer,
}

impl SceneController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn sorry_count(&self) -> u32 {
        self.state.sorry_count
    }

    pub fn message_visible(&self) -> bool {
        self.state.message_visible
    }

    pub fn pending_dismissal(&self) -> Option<ScheduledTask> {
        self.dismissal.pending()
    }

    pub fn on_heart_activate(&mut self, now: Duration) -> ScheduledTask {
        self.activate(Activation::Heart, now)
    }

    pub fn on_big_button_activate(&mut self, now: Duration) -> ScheduledTask {
        self.activate(Activation::BigButton, now)
    }

    /// The butterfly's own excited scale is view state; see
    /// [`activate_object`] for the path that also excites the butterfly.
    pub fn on_butterfly_activate(&mut self, now: Duration) -> ScheduledTask {
        self.activate(Activation::Butterfly, now)
    }

    /// Apply `activation` and schedule the panel to hide after its delay.
    ///
    /// Any earlier pending dismissal is superseded.
    pub fn activate(&mut self, activation: Activation, now: Duration) -> ScheduledTask {
        self.state = self.state.activated(activation);
        let task = self.dismissal.schedule(now, activation.message_delay());
        log::debug!(
            "[scene] {} -> sorries={} hide at {}ms (gen {})",
            activation.label(),
            self.state.sorry_count,
            task.deadline.as_millis(),
            task.generation.0
        );
        task
    }

    /// Hide the panel if the latest scheduled dismissal is due.
    pub fn advance(&mut self, now: Duration) -> Option<Dismissed> {
        let task = self.dismissal.poll(now)?;
        Some(self.dismiss(task, now))
    }

    /// Hide the panel on behalf of an external timer, if `generation` is
    /// still the current dismissal and its deadline has passed. Stale
    /// generations and early calls are ignored.
    pub fn expire(&mut self, generation: Generation, now: Duration) -> Option<Dismissed> {
        let task = self.dismissal.fire(generation, now)?;
        Some(self.dismiss(task, now))
    }

    fn dismiss(&mut self, task: ScheduledTask, now: Duration) -> Dismissed {
        self.state = self.state.dismissed();
        log::debug!(
            "[scene] message hidden at {}ms (gen {})",
            now.as_millis(),
            task.generation.0
        );
        Dismissed {
            generation: task.generation,
            at: now,
        }
    }
}

/// Route a click on catalogue object `id` to its activation.
///
/// Butterflies additionally enter their excited view state.
pub fn activate_object(
    controller: &mut SceneController,
    views: &mut ViewStates,
    catalogue: &SceneCatalogue,
    id: ObjectId,
    now: Duration,
) -> Result<(Activation, ScheduledTask), SceneError> {
    let spec = catalogue.get(id).ok_or(SceneError::UnknownObject(id))?;
    let activation = match spec.kind {
        ObjectKind::Heart => Activation::Heart,
        ObjectKind::Butterfly => {
            views.excite(id, now);
            Activation::Butterfly
        }
        kind @ (ObjectKind::Tulip | ObjectKind::TitleText) => {
            return Err(SceneError::NotInteractive { id, kind })
        }
    };
    let task = controller.activate(activation, now);
    Ok((activation, task))
}
