//! Vizij Tween Core (engine-agnostic)
//!
//! Frame-driven tweening of nested numeric state toward a target, plus a
//! timed no-op delay. Each run hands back an awaitable [`Completion`].
//!
//! The crate owns no event loop. Hosts supply the render state, clock, frame
//! scheduler and timer through the traits in [`host`], and deliver frames and
//! timeouts back into [`ValueTween::on_frame`] / [`Delay::on_timeout`].

pub mod completion;
pub mod config;
pub mod delay;
pub mod error;
pub mod host;
pub mod interp;
pub mod step;
pub mod tween;
pub mod value;

// Re-exports for consumers (adapters)
pub use completion::{completion_pair, Completer, Completion, CompletionState};
pub use config::TweenConfig;
pub use delay::Delay;
pub use error::{ConfigError, InflateError};
pub use host::{
    Clock, FrameHandle, FrameScheduler, Inflate, JsonInflater, ManualClock,
    ManualFrameScheduler, ManualTimer, MonotonicClock, RenderState, StateStore, Timer,
    TimerHandle,
};
pub use interp::ease;
pub use step::{Step, StepHost};
pub use tween::{FrameOutcome, ValueTween};
pub use value::ValueTree;
