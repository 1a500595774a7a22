//! Gauge value transition state machine.
//!
//! ```text
//! Idle(value) ──retarget──▶ Transitioning(from, to, start) ──progress = 1──▶ Idle(to)
//!                               ▲          │
//!                               └─retarget─┘  from = value displayed at that instant
//! ```
//!
//! Time is supplied by the caller, so the machine runs the same under a real
//! or simulated clock.

use super::AnimationState;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle {
        value: f64,
    },
    Transitioning {
        from: f64,
        to: f64,
        started_at: Instant,
        /// Highest eased progress reported so far.
        progress: f64,
    },
}

/// Eases a value toward its latest target over a fixed duration.
#[derive(Debug, Clone)]
pub struct GaugeAnimation {
    phase: Phase,
    duration: Duration,
}

impl GaugeAnimation {
    pub fn new(initial: f64, duration: Duration) -> Self {
        Self {
            phase: Phase::Idle { value: initial },
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Idle { .. })
    }

    /// Final value of the current or last transition.
    pub fn target(&self) -> f64 {
        match self.phase {
            Phase::Idle { value } => value,
            Phase::Transitioning { to, .. } => to,
        }
    }

    /// Start moving toward `to`.
    ///
    /// Mid-transition, the new transition starts from the value displayed at
    /// `now`, so the readout never jumps. Re-sending the current target is a
    /// no-op.
    pub fn retarget(&mut self, to: f64, now: Instant) {
        if self.target() == to {
            return;
        }

        let from = self.value_at(now);
        tracing::trace!(from, to, "Gauge transition started");
        self.phase = Phase::Transitioning {
            from,
            to,
            started_at: now,
            progress: 0.0,
        };
    }

    /// Advance to `now`. Collapses to idle once progress reaches exactly 1.
    pub fn tick(&mut self, now: Instant) -> AnimationState {
        match self.phase {
            Phase::Idle { value } => AnimationState::settled_at(value),
            Phase::Transitioning {
                from,
                to,
                started_at,
                progress,
            } => {
                let progress = self.eased_progress(started_at, now).max(progress);
                if progress >= 1.0 {
                    self.phase = Phase::Idle { value: to };
                    return AnimationState {
                        from,
                        to,
                        progress: 1.0,
                        settled: true,
                    };
                }

                self.phase = Phase::Transitioning {
                    from,
                    to,
                    started_at,
                    progress,
                };
                AnimationState {
                    from,
                    to,
                    progress,
                    settled: false,
                }
            }
        }
    }

    /// The value that would be displayed at `now`, without advancing.
    pub fn value_at(&self, now: Instant) -> f64 {
        match self.phase {
            Phase::Idle { value } => value,
            Phase::Transitioning {
                from,
                to,
                started_at,
                progress,
            } => {
                let progress = self.eased_progress(started_at, now).max(progress);
                from + (to - from) * progress
            }
        }
    }

    /// Last reported state, without advancing.
    pub fn state(&self) -> AnimationState {
        match self.phase {
            Phase::Idle { value } => AnimationState::settled_at(value),
            Phase::Transitioning {
                from, to, progress, ..
            } => AnimationState {
                from,
                to,
                progress,
                settled: false,
            },
        }
    }

    fn eased_progress(&self, started_at: Instant, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            return 1.0;
        }
        ease_out_cubic(elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }
}

/// Monotonic ease-out on `[0, 1]`; `f(1) == 1`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
