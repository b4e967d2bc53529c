use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use web_time::Instant;

/// Monotonic time source for the game timer.
pub trait Clock: fmt::Debug {
    fn now(&self) -> Instant;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug)]
pub struct ManualClock {
    base: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Rc::default(),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
}

/// Pausable elapsed-time counter.
#[derive(Clone, Debug)]
pub struct Stopwatch<C: Clock = SystemClock> {
    clock: C,
    running_since: Option<Instant>,
    banked: Duration,
}

impl<C: Clock> Stopwatch<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            running_since: None,
            banked: Duration::ZERO,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Zeroes and starts counting.
    pub fn start(&mut self) {
        self.banked = Duration::ZERO;
        self.running_since = Some(self.clock.now());
    }

    /// Freezes the elapsed time.
    pub fn stop(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.banked += self.clock.now().saturating_duration_since(since);
        }
    }

    /// Continues from the frozen elapsed time, skipping the stopped interval.
    pub fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(self.clock.now());
        }
    }

    /// Stopped and zeroed.
    pub fn reset(&mut self) {
        self.running_since = None;
        self.banked = Duration::ZERO;
    }

    pub fn elapsed(&self) -> Duration {
        let running = self
            .running_since
            .map(|since| self.clock.now().saturating_duration_since(since))
            .unwrap_or_default();
        self.banked + running
    }
}
