//! Host collaborators: the narrow contracts the tween and delay are driven
//! through, plus stock implementations.
//!
//! Frames and timers are delivered by the host. A scheduler only hands out
//! handles; when the frame (or timeout) is due, the host calls
//! `ValueTween::on_frame` / `Delay::on_timeout` with that handle. A handle that
//! was cancelled or superseded is ignored by the receiver.

pub mod clock;
pub mod frames;
pub mod inflate;
pub mod state;
pub mod timer;

use serde::{Deserialize, Serialize};

use crate::value::ValueTree;

pub use clock::{ManualClock, MonotonicClock};
pub use frames::ManualFrameScheduler;
pub use inflate::JsonInflater;
pub use state::StateStore;
pub use timer::ManualTimer;

/// Opaque id of a requested animation frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameHandle(pub u64);

/// Opaque id of a one-shot timeout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

/// Live state the tween reads from and writes partial trees into.
/// Borrowed for the length of a run; never owned by the tween.
pub trait RenderState {
    fn state(&self) -> &ValueTree;
    /// Merge/overwrite the keys present in `partial`; other keys untouched.
    fn update_state(&mut self, partial: &ValueTree);
}

/// Monotonic high-resolution time source, in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Per-rendered-frame scheduling.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    /// No-op when the frame already fired or was never requested.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// One-shot wall-clock timeouts.
pub trait Timer {
    fn set_timeout(&mut self, delay_ms: f64) -> TimerHandle;
    /// No-op when the timeout already fired or was never set.
    fn clear_timeout(&mut self, handle: TimerHandle);
}

/// Expands a caller value spec into a full target tree congruent with the
/// render state. Errors are surfaced as-is by `ValueTween::new`.
pub trait Inflate<S: ?Sized> {
    type Spec: ?Sized;
    type Error;

    fn inflate(&self, state: &S, spec: &Self::Spec) -> Result<ValueTree, Self::Error>;
}

impl<T: RenderState + ?Sized> RenderState for &mut T {
    fn state(&self) -> &ValueTree {
        (**self).state()
    }

    fn update_state(&mut self, partial: &ValueTree) {
        (**self).update_state(partial)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}
