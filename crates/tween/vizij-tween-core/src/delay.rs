//! Delay: a timed no-op that settles after a fixed duration.

use log::debug;

use crate::completion::{completion_pair, Completer, Completion};
use crate::host::{Timer, TimerHandle};

#[derive(Debug)]
pub struct Delay {
    duration_ms: f64,
    timeout: Option<TimerHandle>,
    completer: Option<Completer>,
}

impl Delay {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            timeout: None,
            completer: None,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn is_running(&self) -> bool {
        self.completer.is_some()
    }

    pub fn pending_timeout(&self) -> Option<TimerHandle> {
        self.timeout
    }

    /// Arm the timer. The completion settles when the host reports the
    /// timeout through [`Delay::on_timeout`] or on [`Delay::cancel`].
    /// Re-running while pending settles the previous completion first.
    pub fn run<T>(&mut self, timer: &mut T) -> Completion
    where
        T: Timer + ?Sized,
    {
        if self.is_running() {
            debug!("delay: restarting a pending delay");
            self.cancel(timer);
        }
        let (completer, completion) = completion_pair();
        self.completer = Some(completer);
        self.timeout = Some(timer.set_timeout(self.duration_ms));
        debug!("delay: armed for {}ms", self.duration_ms);
        completion
    }

    /// Host callback for a fired timeout. Returns `false` for handles this
    /// delay no longer waits on.
    pub fn on_timeout<T>(&mut self, handle: TimerHandle, timer: &mut T) -> bool
    where
        T: Timer + ?Sized,
    {
        if self.timeout != Some(handle) {
            return false;
        }
        self.timeout = None;
        self.cancel(timer);
        true
    }

    /// Clear the pending timer and settle the completion. Idempotent.
    pub fn cancel<T>(&mut self, timer: &mut T)
    where
        T: Timer + ?Sized,
    {
        if let Some(handle) = self.timeout.take() {
            timer.clear_timeout(handle);
        }
        if let Some(completer) = self.completer.take() {
            completer.settle();
        }
    }
}
