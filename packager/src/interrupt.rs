use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Cooperative cancellation signal of a packing call.
/// Trips once the deadline (if any) has passed or the caller-supplied predicate (if any) returns true.
#[derive(Clone, Default)]
pub struct Interrupt {
    deadline: Option<Instant>,
    predicate: Option<Arc<dyn Fn() -> bool + Send + Sync>>,
}

impl Interrupt {
    /// Never trips
    pub fn none() -> Self {
        Interrupt::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Interrupt {
            deadline: Some(deadline),
            predicate: None,
        }
    }

    pub fn with_time_limit(limit: Duration) -> Self {
        Interrupt::with_deadline(Instant::now() + limit)
    }

    /// Adds a caller-supplied predicate. The deadline and every predicate added so far
    /// keep applying: any one of them tripping interrupts the call.
    pub fn or(self, predicate: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        let composed: Arc<dyn Fn() -> bool + Send + Sync> = match self.predicate {
            None => Arc::new(predicate),
            Some(previous) => Arc::new(move || previous() || predicate()),
        };
        Interrupt {
            deadline: self.deadline,
            predicate: Some(composed),
        }
    }

    /// Adds a flag which interrupts the call once it is raised
    pub fn or_flag(self, flag: Arc<AtomicBool>) -> Self {
        self.or(move || flag.load(Ordering::Relaxed))
    }

    pub fn is_interrupted(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
            || self.predicate.as_ref().is_some_and(|p| p())
    }
}

impl Debug for Interrupt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interrupt")
            .field("deadline", &self.deadline)
            .field("predicate", &self.predicate.is_some())
            .finish()
    }
}

/// Samples an [`Interrupt`] only once every `every` calls to [`Checkpoint::check`],
/// bounding the number of clock reads in tight search loops.
/// Once tripped, it stays tripped.
#[derive(Debug)]
pub struct Checkpoint<'a> {
    interrupt: &'a Interrupt,
    every: usize,
    countdown: usize,
    tripped: bool,
}

impl<'a> Checkpoint<'a> {
    pub fn new(interrupt: &'a Interrupt, every: usize) -> Self {
        let every = every.max(1);
        Checkpoint {
            interrupt,
            every,
            countdown: every,
            tripped: false,
        }
    }

    pub fn check(&mut self) -> bool {
        if !self.tripped {
            self.countdown -= 1;
            if self.countdown == 0 {
                self.countdown = self.every;
                self.tripped = self.interrupt.is_interrupted();
            }
        }
        self.tripped
    }
}
