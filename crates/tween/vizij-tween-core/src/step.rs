//! Step: either kind of run unit, for callers holding mixed sequences.

use crate::completion::Completion;
use crate::delay::Delay;
use crate::host::{Clock, FrameScheduler, RenderState, Timer};
use crate::tween::ValueTween;

#[derive(Debug)]
pub enum Step {
    Tween(ValueTween),
    Delay(Delay),
}

impl From<ValueTween> for Step {
    fn from(t: ValueTween) -> Self {
        Step::Tween(t)
    }
}

impl From<Delay> for Step {
    fn from(d: Delay) -> Self {
        Step::Delay(d)
    }
}

/// Borrowed collaborators a step may need. Delays only touch `timer`.
pub struct StepHost<'a, R: ?Sized, C: ?Sized, F: ?Sized, T: ?Sized> {
    pub state: &'a mut R,
    pub clock: &'a C,
    pub frames: &'a mut F,
    pub timer: &'a mut T,
}

impl Step {
    pub fn run<R, C, F, T>(&mut self, host: &mut StepHost<'_, R, C, F, T>) -> Completion
    where
        R: RenderState + ?Sized,
        C: Clock + ?Sized,
        F: FrameScheduler + ?Sized,
        T: Timer + ?Sized,
    {
        match self {
            Step::Tween(t) => t.run(host.state, host.clock, host.frames),
            Step::Delay(d) => d.run(host.timer),
        }
    }

    pub fn cancel<R, C, F, T>(&mut self, host: &mut StepHost<'_, R, C, F, T>)
    where
        R: RenderState + ?Sized,
        C: Clock + ?Sized,
        F: FrameScheduler + ?Sized,
        T: Timer + ?Sized,
    {
        match self {
            Step::Tween(t) => t.cancel(host.state, host.frames),
            Step::Delay(d) => d.cancel(host.timer),
        }
    }

    pub fn is_running(&self) -> bool {
        match self {
            Step::Tween(t) => t.is_running(),
            Step::Delay(d) => d.is_running(),
        }
    }
}
