use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

/// Identifies one scheduled callback, so that it can be cancelled later.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// A "call me back after a while" primitive, in whatever form the host offers it.
///
/// Callbacks aren't closures: the timer just hands back the handle once it's
/// due, and the owner of the handle decides what that means.
pub trait Timer {
    fn schedule(&mut self, delay: Duration) -> TimerHandle;
    /// Cancelling a handle that already fired (or was never issued) does nothing.
    fn cancel(&mut self, handle: TimerHandle);
    /// Moves the clock forward to `now` without firing anything. Delays passed
    /// to `schedule` afterwards count from there.
    fn advance_to(&mut self, now: Duration);
    /// Moves the clock forward to `now` and pops the earliest callback that is
    /// due by then, if there is one.
    fn pop_due(&mut self, now: Duration) -> Option<TimerHandle>;
}

/// Single-threaded queue of pending callbacks, ordered by due time and then by
/// the order they were scheduled in.
#[derive(Debug, Default)]
pub struct TaskQueue {
    // Invariant: every handle in `cancelled` is also somewhere in `pending`
    pending: BinaryHeap<Reverse<(Duration, TimerHandle)>>,
    cancelled: HashSet<TimerHandle>,
    now: Duration,
    next_handle: u64,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of callbacks that are still going to fire.
    pub fn len(&self) -> usize {
        self.pending.len() - self.cancelled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// When the next live callback is due.
    pub fn next_due(&mut self) -> Option<Duration> {
        self.drop_cancelled_head();
        self.pending.peek().map(|Reverse((due, _))| *due)
    }

    fn drop_cancelled_head(&mut self) {
        while let Some(Reverse((_, handle))) = self.pending.peek() {
            if !self.cancelled.remove(handle) {
                break;
            }
            self.pending.pop();
        }
    }
}

impl Timer for TaskQueue {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Reverse((self.now + delay, handle)));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let is_pending = self.pending.iter().any(|Reverse((_, h))| *h == handle);
        if is_pending {
            self.cancelled.insert(handle);
        }
    }

    fn advance_to(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    fn pop_due(&mut self, now: Duration) -> Option<TimerHandle> {
        self.advance_to(now);
        self.drop_cancelled_head();

        let now = self.now;
        let is_due = matches!(self.pending.peek(), Some(Reverse((due, _))) if *due <= now);
        if is_due {
            self.pending.pop().map(|Reverse((_, handle))| handle)
        } else {
            None
        }
    }
}
