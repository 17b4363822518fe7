//! ValueTween: one eased interpolation run from the live state to a target.
//!
//! Lifecycle per run:
//! - `run` snapshots the render state, stamps the start time and requests a frame
//! - the host delivers each frame through `on_frame`, which writes one partial
//!   tree and requests the next frame until eased progress reaches 1
//! - `cancel` (also used for natural completion) settles the completion,
//!   drops any pending frame and, with `force`, writes the exact target

use log::{debug, trace};

use crate::completion::{completion_pair, Completer, Completion};
use crate::config::TweenConfig;
use crate::host::{Clock, FrameHandle, FrameScheduler, Inflate, RenderState};
use crate::interp::{clamp01, ease, is_at_end, partial_values};
use crate::value::ValueTree;

/// What a delivered frame did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Stale or unknown handle; nothing was written.
    Ignored,
    /// A partial tree was written and the next frame requested.
    Continued { progress: f64, eased: f64 },
    /// The final tree was written and the run settled.
    Finished,
}

/// Transient state of an active run.
#[derive(Debug)]
struct TweenRun {
    start: ValueTree,
    start_time: f64,
    frame: Option<FrameHandle>,
}

#[derive(Debug)]
pub struct ValueTween {
    target: ValueTree,
    cfg: TweenConfig,
    run: Option<TweenRun>,
    completer: Option<Completer>,
}

impl ValueTween {
    /// Inflate `spec` against `state` into the target tree. Inflation errors
    /// are returned unchanged.
    pub fn new<S, I>(
        state: &S,
        inflater: &I,
        spec: &I::Spec,
        cfg: TweenConfig,
    ) -> Result<Self, I::Error>
    where
        S: ?Sized,
        I: Inflate<S>,
    {
        let target = inflater.inflate(state, spec)?;
        Ok(Self::from_tree(target, cfg))
    }

    /// Build from an already structured target.
    pub fn from_tree(target: ValueTree, cfg: TweenConfig) -> Self {
        Self {
            target,
            cfg,
            run: None,
            completer: None,
        }
    }

    pub fn target(&self) -> &ValueTree {
        &self.target
    }

    pub fn config(&self) -> &TweenConfig {
        &self.cfg
    }

    /// True between `run` scheduling a frame and completion/cancel.
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.run.as_ref().and_then(|r| r.frame)
    }

    /// Start a run against `state`.
    ///
    /// Zero duration writes the target immediately; a state already at the
    /// target is left alone. Both return a settled completion and never
    /// request a frame. A previous pending run on this tween is settled and
    /// its frame cancelled first.
    pub fn run<R, C, F>(&mut self, state: &mut R, clock: &C, frames: &mut F) -> Completion
    where
        R: RenderState + ?Sized,
        C: Clock + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        self.supersede(frames);

        let duration = self.cfg.duration();
        if duration == 0.0 {
            debug!("tween: zero duration, applying target synchronously");
            state.update_state(&self.target);
            return Completion::resolved();
        }
        if is_at_end(state.state(), &self.target) {
            debug!("tween: state already at target, nothing to run");
            return Completion::resolved();
        }

        let start = state.state().clone();
        let start_time = clock.now_ms();
        let frame = frames.request_frame();
        let (completer, completion) = completion_pair();
        debug!(
            "tween: run started at {start_time:.3}ms for {duration}ms over {} keys",
            self.target.len()
        );
        self.run = Some(TweenRun {
            start,
            start_time,
            frame: Some(frame),
        });
        self.completer = Some(completer);
        completion
    }

    /// Advance the run for a delivered frame at `now_ms`.
    ///
    /// Writes exactly one partial tree per accepted frame. Handles that do not
    /// match the pending request are ignored, so a cancelled run never writes.
    pub fn on_frame<R, F>(
        &mut self,
        handle: FrameHandle,
        now_ms: f64,
        state: &mut R,
        frames: &mut F,
    ) -> FrameOutcome
    where
        R: RenderState + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let duration = self.cfg.duration();
        let Some(run) = self.run.as_mut() else {
            return FrameOutcome::Ignored;
        };
        if run.frame != Some(handle) {
            trace!("tween: ignoring stale frame {handle:?}");
            return FrameOutcome::Ignored;
        }
        run.frame = None;

        let progress = clamp01((now_ms - run.start_time) / duration);
        let eased = ease(progress);
        let partial = partial_values(&run.start, &self.target, eased);
        state.update_state(&partial);
        trace!("tween: frame at {now_ms:.3}ms progress={progress:.4} eased={eased:.4}");

        if eased == 1.0 {
            debug!("tween: run finished");
            self.cancel(state, frames);
            FrameOutcome::Finished
        } else {
            run.frame = Some(frames.request_frame());
            FrameOutcome::Continued { progress, eased }
        }
    }

    /// Settle the completion (once), drop any pending frame and, with
    /// `force`, write the exact target. Safe to call repeatedly or before any
    /// run.
    pub fn cancel<R, F>(&mut self, state: &mut R, frames: &mut F)
    where
        R: RenderState + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if let Some(completer) = self.completer.take() {
            completer.settle();
        }
        if let Some(handle) = self.run.take().and_then(|r| r.frame) {
            debug!("tween: cancelled with frame {handle:?} pending");
            frames.cancel_frame(handle);
        }
        if self.cfg.force {
            state.update_state(&self.target);
        }
    }

    fn supersede<F>(&mut self, frames: &mut F)
    where
        F: FrameScheduler + ?Sized,
    {
        if let Some(completer) = self.completer.take() {
            debug!("tween: new run supersedes a pending one");
            completer.settle();
        }
        if let Some(handle) = self.run.take().and_then(|r| r.frame) {
            frames.cancel_frame(handle);
        }
    }
}
