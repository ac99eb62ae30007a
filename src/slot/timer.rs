//! Expiry Timer
//!
//! At most one scheduled wake-up exists per slot. Scheduling a new
//! wake-up replaces the outstanding one; each schedule carries a
//! generation token so a superseded or canceled wake-up that already
//! slept through its deadline can never apply a stale delete.

use tokio::task::JoinHandle;

/// Handle on the slot's single outstanding wake-up.
#[derive(Debug, Default)]
pub struct ExpiryTimer {
    /// Task sleeping until the scheduled deadline
    task: Option<JoinHandle<()>>,
    /// Bumped on every replace/cancel; stale tokens no longer match
    generation: u64,
}

impl ExpiryTimer {
    /// Creates a timer with no schedule outstanding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any outstanding schedule and returns the generation token
    /// the replacement wake-up must present when it fires.
    pub fn replace(&mut self) -> u64 {
        self.cancel();
        self.generation
    }

    /// Attaches the spawned wake-up task for the current generation.
    pub fn arm(&mut self, task: JoinHandle<()>) {
        self.task = Some(task);
    }

    /// Cancels the outstanding schedule; no-op if none exists.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Drops the task handle once the schedule has fired.
    ///
    /// Called from the wake-up task itself, so the task is not aborted.
    pub fn disarm(&mut self) {
        self.generation += 1;
        self.task = None;
    }

    /// True if `generation` still names the live schedule.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// True while a wake-up is scheduled.
    pub fn is_armed(&self) -> bool {
        self.task.is_some()
    }
}
