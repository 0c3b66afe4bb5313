//! Virtual-clock task scheduler.
//!
//! One-shot and repeating tasks are queued against a clock that only moves
//! when the owner pops due tasks, so transitions and the auto-advance
//! interval can be stepped frame by frame or driven by tests.

use std::time::Duration;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a scheduled task, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Entry<T> {
    id: TaskId,
    due: Duration,
    period: Option<Duration>,
    task: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Run `task` once, `delay` after the current clock.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskId {
        self.push(delay, None, task)
    }

    /// Run `task` every `period`, first firing one full period from now.
    pub fn every(&mut self, period: Duration, task: T) -> TaskId {
        let period = period.max(MIN_PERIOD);
        self.push(period, Some(period), task)
    }

    /// Returns false when the task already fired or was never scheduled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due: self.now + delay,
            period,
            task,
        });
        id
    }

    /// Move the clock forward to `until`.
    ///
    /// Call after draining [`Scheduler::pop_due`] for the same `until`.
    pub fn settle(&mut self, until: Duration) {
        if until > self.now {
            self.now = until;
        }
    }
}

impl<T: Clone> Scheduler<T> {
    /// Pops the earliest task due at or before `until`.
    ///
    /// The clock jumps to that task's due time, so anything scheduled while
    /// handling it is timed from the moment it fired. Ties fire in insertion
    /// order. Repeating tasks are re-armed one period later.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let pos = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(_, e)| (e.due, e.id.0))
            .map(|(pos, _)| pos)?;

        let due = self.entries[pos].due;
        if due > self.now {
            self.now = due;
        }

        let period = self.entries[pos].period;
        match period {
            Some(period) => {
                let entry = &mut self.entries[pos];
                entry.due += period;
                Some(entry.task.clone())
            }
            None => Some(self.entries.remove(pos).task),
        }
    }

    /// Fires everything due within `dt` and returns the tasks in firing order.
    pub fn advance(&mut self, dt: Duration) -> Vec<T> {
        let until = self.now + dt;
        let mut fired = Vec::new();
        while let Some(task) = self.pop_due(until) {
            fired.push(task);
        }
        self.settle(until);
        fired
    }
}
