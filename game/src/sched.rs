//! Tick scheduler for session callbacks
//!
//! Matchmaking delays and log playback run on an abstract tick clock the
//! host advances. Tasks are keyed to a session generation; resetting the
//! session bumps the generation, so callbacks scheduled for an abandoned
//! session are dropped instead of firing against stale state.

use alloc::vec::Vec;

/// One abstract time-unit; the browser host maps it to a wall-clock interval
pub type Tick = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TaskKind {
    MatchFound,
    PlayLogStep,
    RevealResult,
}

#[derive(Debug, Clone)]
struct ScheduledTask {
    at: Tick,
    generation: u32,
    kind: TaskKind,
}

#[derive(Debug, Default)]
pub(crate) struct Scheduler {
    now: Tick,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub(crate) fn advance(&mut self) {
        self.now += 1;
    }

    pub(crate) fn schedule_in(&mut self, delay: Tick, generation: u32, kind: TaskKind) {
        self.tasks.push(ScheduledTask {
            at: self.now + delay,
            generation,
            kind,
        });
    }

    /// Remove and return due tasks for the live generation, in schedule order.
    /// Due tasks from older generations are dropped silently.
    pub(crate) fn take_due(&mut self, generation: u32) -> Vec<TaskKind> {
        let mut due = Vec::new();
        let mut stale = 0usize;
        let now = self.now;
        self.tasks.retain(|task| {
            if task.at > now {
                return true;
            }
            if task.generation == generation {
                due.push(task.kind);
            } else {
                stale += 1;
            }
            false
        });
        if stale > 0 {
            log::debug!("dropped {} stale scheduled task(s)", stale);
        }
        due
    }

    /// Drop every task belonging to a cancelled generation
    pub(crate) fn cancel_generation(&mut self, generation: u32) {
        self.tasks.retain(|task| task.generation != generation);
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.tasks.len()
    }
}
