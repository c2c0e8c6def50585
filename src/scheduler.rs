//! Cooperative virtual clock standing in for the host's timing facility.
//!
//! Nothing runs on its own: the owner advances the clock by the frame time and
//! drains due tasks one by one, the same way a frame loop accumulates `dt`
//! against its display timer.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

use crate::host::ElementId;

/// Work a scheduler entry hands back when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Task {
    /// Autonomous advance of the slideshow bound to `container`.
    Tick { container: ElementId },
    /// Tail of an enter or exit transition on one slide.
    Settle {
        container: ElementId,
        slide: usize,
        generation: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntervalId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Repeat {
    Once,
    Every(IntervalId, u64),
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    due: u64,
    seq: u64,
    repeat: Repeat,
    task: Task,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now: u64,
    horizon: u64,
    seq: u64,
    next_interval: u64,
    queue: BinaryHeap<Reverse<Entry>>,
    active: HashSet<IntervalId>,
}

// Kept in microseconds so frame times that are not whole milliseconds do not drift
fn micros(duration: Duration) -> u64 {
    duration.as_micros().try_into().unwrap_or(u64::MAX)
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now / 1000
    }

    pub fn set_interval(&mut self, period: Duration, task: Task) -> IntervalId {
        let id = IntervalId(self.next_interval);
        self.next_interval += 1;
        self.active.insert(id);
        let period = micros(period).max(1);
        self.push(self.now + period, Repeat::Every(id, period), task);
        id
    }

    /// Cancels an interval. Entries already queued for it are dropped when they surface.
    pub fn clear_interval(&mut self, id: IntervalId) {
        self.active.remove(&id);
    }

    pub fn set_timeout(&mut self, duration: Duration, task: Task) {
        self.push(self.now + micros(duration), Repeat::Once, task);
    }

    /// Moves the horizon forward; due tasks are then drained with [`Scheduler::pop_due`].
    pub fn advance(&mut self, elapsed: Duration) {
        self.horizon = self.horizon.max(self.now) + micros(elapsed);
    }

    /// Next task due at or before the horizon. Returns `None` once the clock has
    /// caught up, leaving `now` at the horizon.
    pub fn pop_due(&mut self) -> Option<Task> {
        loop {
            let due = match self.queue.peek() {
                Some(Reverse(entry)) if entry.due <= self.horizon => entry.due,
                _ => {
                    self.now = self.horizon.max(self.now);
                    return None;
                }
            };
            let Some(Reverse(entry)) = self.queue.pop() else {
                return None;
            };
            self.now = due;
            match entry.repeat {
                Repeat::Once => return Some(entry.task),
                Repeat::Every(id, period) => {
                    if !self.active.contains(&id) {
                        continue;
                    }
                    self.push(due + period, entry.repeat, entry.task);
                    return Some(entry.task);
                }
            }
        }
    }

    fn push(&mut self, due: u64, repeat: Repeat, task: Task) {
        let seq = self.seq;
        self.seq += 1;
        self.queue.push(Reverse(Entry {
            due,
            seq,
            repeat,
            task,
        }));
    }
}
