use std::collections::BTreeMap;

use super::{TimerHandle, Timer};

/// Simulated-time timer queue. `advance_to` moves time forward and returns
/// the handles whose deadline has passed, earliest deadline first.
#[derive(Debug, Default)]
pub struct ManualTimer {
    now_ms: f64,
    next_id: u64,
    armed: BTreeMap<TimerHandle, f64>,
    /// Every handle passed to `clear_timeout`, including no-op clears.
    pub cleared: Vec<TimerHandle>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }

    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.armed.contains_key(&handle)
    }

    pub fn deadline(&self, handle: TimerHandle) -> Option<f64> {
        self.armed.get(&handle).copied()
    }

    /// Advance simulated time (never backwards) and pop the due timeouts.
    pub fn advance_to(&mut self, now_ms: f64) -> Vec<TimerHandle> {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
        let now = self.now_ms;
        let mut due: Vec<(TimerHandle, f64)> = self
            .armed
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(h, d)| (*h, *d))
            .collect();
        due.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        for (h, _) in &due {
            self.armed.remove(h);
        }
        due.into_iter().map(|(h, _)| h).collect()
    }
}

impl Timer for ManualTimer {
    fn set_timeout(&mut self, delay_ms: f64) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        let delay = if delay_ms.is_finite() && delay_ms > 0.0 {
            delay_ms
        } else {
            0.0
        };
        self.armed.insert(handle, self.now_ms + delay);
        handle
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.armed.remove(&handle);
        self.cleared.push(handle);
    }
}
