use std::time::Duration;

/// Identifies one scheduled dismissal. Later schedules get larger generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    pub generation: Generation,
    pub deadline: Duration,
}

/// Single-slot deferred task keyed by a generation counter.
///
/// Scheduling replaces whatever was pending, so only the most recently
/// scheduled task can ever fire. Time is the caller's session clock.
#[derive(Clone, Debug, Default)]
pub struct GenerationTimer {
    next_generation: u64,
    pending: Option<ScheduledTask>,
}

impl GenerationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Duration, delay: Duration) -> ScheduledTask {
        self.next_generation += 1;
        let task = ScheduledTask {
            generation: Generation(self.next_generation),
            deadline: now.saturating_add(delay),
        };
        if let Some(prev) = self.pending.replace(task) {
            log::debug!(
                "[timer] generation {} superseded by {}",
                prev.generation.0,
                task.generation.0
            );
        }
        task
    }

    pub fn pending(&self) -> Option<ScheduledTask> {
        self.pending
    }

    /// Fire the pending task once `now` has reached its deadline.
    pub fn poll(&mut self, now: Duration) -> Option<ScheduledTask> {
        match self.pending {
            Some(task) if now >= task.deadline => self.pending.take(),
            _ => None,
        }
    }

    /// Fire the task with `generation` if it is still the current one and
    /// `now` has reached its deadline.
    ///
    /// Used when the deadline is tracked by an external timer: stale
    /// generations are ignored, and an early call leaves the task pending.
    pub fn fire(&mut self, generation: Generation, now: Duration) -> Option<ScheduledTask> {
        match self.pending {
            Some(task) if task.generation == generation && now >= task.deadline => {
                self.pending.take()
            }
            _ => None,
        }
    }
}
