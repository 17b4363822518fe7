use std::collections::BTreeSet;

use super::{FrameHandle, FrameScheduler};

/// Deterministic frame scheduler. Requests queue up until the host drains
/// them with [`ManualFrameScheduler::take_pending`] and delivers each handle.
#[derive(Debug, Default)]
pub struct ManualFrameScheduler {
    next_id: u64,
    pending: BTreeSet<FrameHandle>,
    /// Every handle ever requested, in request order.
    pub requested: Vec<FrameHandle>,
    /// Every handle passed to `cancel_frame`, including no-op cancels.
    pub cancelled: Vec<FrameHandle>,
}

impl ManualFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the frames due on the next render, oldest first.
    pub fn take_pending(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }

    pub fn request_count(&self) -> usize {
        self.requested.len()
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.insert(handle);
        self.requested.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.remove(&handle);
        self.cancelled.push(handle);
    }
}
