//! Cancelable interval timers.
//!
//! Timers never call back into the carousel directly. The owner arms a timer,
//! keeps the returned [`TimerHandle`], and drains fired handles with
//! [`Scheduler::take_due`] from its event loop. This keeps every state change on
//! a single thread and makes "cancel before arm" a plain method call.
//!
//! Two clocks are provided:
//! - [`SystemScheduler`] follows the wall clock and is polled by the UI runtime.
//! - [`ManualScheduler`] only moves when told to, for tests and replays.

use std::time::{Duration, Instant};

/// Opaque reference to one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Source of repeating timers.
pub trait Scheduler {
    /// Arm a repeating timer that first fires after `interval`.
    fn arm(&mut self, interval: Duration) -> TimerHandle;

    /// Cancel a timer. Returns false if the handle was not live.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Pop one timer whose deadline has passed, rescheduling it one interval later.
    fn take_due(&mut self) -> Option<TimerHandle>;

    /// Time left until the earliest live deadline.
    fn until_next(&self) -> Option<Duration>;

    /// Number of timers currently armed.
    fn live_timers(&self) -> usize;
}

/// Arm/cancel counters, mostly useful to assert timer hygiene in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerStats {
    pub armed: u64,
    pub canceled: u64,
    pub fired: u64,
}

#[derive(Debug, Clone)]
struct TimerEntry {
    handle: TimerHandle,
    interval: Duration,
    due: Duration,
}

/// Deadlines stored as offsets from the owning scheduler's origin.
#[derive(Debug, Default)]
struct TimerTable {
    next_id: u64,
    entries: Vec<TimerEntry>,
    stats: TimerStats,
}

impl TimerTable {
    fn arm(&mut self, now: Duration, interval: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.entries.push(TimerEntry {
            handle,
            interval,
            due: now + interval,
        });
        self.stats.armed += 1;
        tracing::trace!(timer = handle.id(), ?interval, "timer armed");
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        let removed = self.entries.len() != before;
        if removed {
            self.stats.canceled += 1;
            tracing::trace!(timer = handle.id(), "timer canceled");
        }
        removed
    }

    fn earliest(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    fn take_due(&mut self, now: Duration) -> Option<TimerHandle> {
        let entry = self
            .entries
            .iter_mut()
            .filter(|entry| entry.due <= now)
            .min_by_key(|entry| entry.due)?;
        entry.due += entry.interval;
        self.stats.fired += 1;
        Some(entry.handle)
    }
}

/// Wall-clock scheduler driven by [`Instant`].
#[derive(Debug)]
pub struct SystemScheduler {
    origin: Instant,
    table: TimerTable,
}

impl Default for SystemScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemScheduler {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            table: TimerTable::default(),
        }
    }

    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    pub fn stats(&self) -> TimerStats {
        self.table.stats
    }
}

impl Scheduler for SystemScheduler {
    fn arm(&mut self, interval: Duration) -> TimerHandle {
        let now = self.now();
        self.table.arm(now, interval)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.table.cancel(handle)
    }

    fn take_due(&mut self) -> Option<TimerHandle> {
        let now = self.now();
        self.table.take_due(now)
    }

    fn until_next(&self) -> Option<Duration> {
        let now = self.now();
        self.table.earliest().map(|due| due.saturating_sub(now))
    }

    fn live_timers(&self) -> usize {
        self.table.entries.len()
    }
}

/// Virtual-time scheduler. Time only moves through [`ManualScheduler::step_toward`]
/// or [`ManualScheduler::set_now`].
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    table: TimerTable,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn stats(&self) -> TimerStats {
        self.table.stats
    }

    /// Jump the clock without firing anything. Never moves backwards.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Move the clock to the next deadline if it is no later than `target`.
    ///
    /// Returns true when a deadline was reached, so the caller can drain
    /// [`Scheduler::take_due`] before stepping again. Otherwise the clock ends
    /// at `target`.
    pub fn step_toward(&mut self, target: Duration) -> bool {
        match self.table.earliest() {
            Some(due) if due <= target => {
                self.set_now(due);
                true
            }
            _ => {
                self.set_now(target);
                false
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&mut self, interval: Duration) -> TimerHandle {
        self.table.arm(self.now, interval)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.table.cancel(handle)
    }

    fn take_due(&mut self) -> Option<TimerHandle> {
        self.table.take_due(self.now)
    }

    fn until_next(&self) -> Option<Duration> {
        self.table
            .earliest()
            .map(|due| due.saturating_sub(self.now))
    }

    fn live_timers(&self) -> usize {
        self.table.entries.len()
    }
}
