/*
 * Scheduler Module
 *
 * Delayed activation scheduling.
 *
 * Particles entering a staggered mode are frozen and re-activated after a
 * delay. The scene does not rely on wall-clock timers: it owns a
 * Scheduler that the host advances by the frame delta, and tests advance
 * by hand.
 */

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

// Identifies one scheduled activation. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

// A scheduled activation whose deadline has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expired {
    pub handle: TaskHandle,
    // Index of the particle to activate.
    pub target: usize,
}

// Cancellable delayed-callback source driven by the host.
pub trait Scheduler {
    // Schedule an activation of `target` once `delay` has elapsed.
    fn schedule(&mut self, delay: Duration, target: usize) -> TaskHandle;

    // Cancel a scheduled activation. No-op if it already fired.
    fn cancel(&mut self, handle: TaskHandle);

    // Advance the clock and return every expired task in deadline order.
    fn advance(&mut self, elapsed: Duration) -> Vec<Expired>;

    // Absolute deadline of a task that is still pending.
    fn deadline(&self, handle: TaskHandle) -> Option<Duration>;

    // Drop every pending task.
    fn clear(&mut self);

    // Number of tasks still waiting.
    fn pending(&self) -> usize;
}

// Virtual-clock scheduler.
//
// Deadlines are measured from the queue's creation. Ties are broken by
// scheduling order, so tasks with equal delays fire in the order they were
// scheduled.
#[derive(Debug, Default)]
pub struct TimerQueue {
    // Current virtual time.
    now: Duration,
    next_id: u64,
    // Pending tasks keyed by (deadline, id).
    queue: BTreeMap<(Duration, u64), usize>,
    // Deadline of every pending id, for cancellation.
    deadlines: HashMap<u64, Duration>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    // Current virtual time.
    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration, target: usize) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;

        let deadline = self.now + delay;
        self.queue.insert((deadline, id), target);
        self.deadlines.insert(id, deadline);

        TaskHandle(id)
    }

    fn cancel(&mut self, handle: TaskHandle) {
        if let Some(deadline) = self.deadlines.remove(&handle.0) {
            self.queue.remove(&(deadline, handle.0));
        }
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<Expired> {
        self.now += elapsed;

        let mut expired = Vec::new();
        while let Some((&(deadline, id), &target)) = self.queue.first_key_value() {
            if deadline > self.now {
                break;
            }
            self.queue.remove(&(deadline, id));
            self.deadlines.remove(&id);
            expired.push(Expired {
                handle: TaskHandle(id),
                target,
            });
        }

        expired
    }

    fn deadline(&self, handle: TaskHandle) -> Option<Duration> {
        self.deadlines.get(&handle.0).copied()
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.deadlines.clear();
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
