//! Idle detection: how long since the last real interaction.
//!
//! Time is plain f64 milliseconds supplied by the host on every call; the
//! core never reads a wall clock, which keeps the idle transition exactly
//! testable.

/// Tracks the last real interaction and decides when the simulation is idle.
///
/// The clock arms on the first observed tick, so a freshly started
/// simulation counts down from its first frame rather than being instantly
/// idle under hosts whose timestamps do not start at zero.
#[derive(Debug, Clone)]
pub struct IdleClock {
    threshold_ms: f64,
    last_interaction: Option<f64>,
}

impl IdleClock {
    /// Creates an unarmed clock with the given idle threshold.
    pub fn new(threshold_ms: f64) -> Self {
        Self {
            threshold_ms,
            last_interaction: None,
        }
    }

    /// Records a real interaction at `now_ms`.
    pub fn touch(&mut self, now_ms: f64) {
        self.last_interaction = Some(now_ms);
    }

    /// Arms the clock at `now_ms` if no interaction was ever recorded.
    pub fn observe(&mut self, now_ms: f64) {
        if self.last_interaction.is_none() {
            self.last_interaction = Some(now_ms);
        }
    }

    /// True once strictly more than the threshold has elapsed since the last
    /// interaction. An unarmed clock is never idle.
    pub fn is_idle(&self, now_ms: f64) -> bool {
        match self.last_interaction {
            Some(t) => now_ms - t > self.threshold_ms,
            None => false,
        }
    }

    /// Timestamp of the last interaction (or first observation), if any.
    pub fn last_interaction(&self) -> Option<f64> {
        self.last_interaction
    }
}
