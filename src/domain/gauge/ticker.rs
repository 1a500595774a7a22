//! Tokio-driven animation clock.
//!
//! A background task emits one instant per tick over an mpsc channel. The
//! subscription lives exactly as long as the [`AnimationTicker`]: dropping
//! it (or calling [`AnimationTicker::stop`]) aborts the task, so a torn-down
//! widget never keeps a timer mutating state nobody observes.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{AnimationState, GaugeAnimation};

pub struct AnimationTicker {
    tick_rx: mpsc::Receiver<Instant>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimationTicker {
    /// Spawn the tick task. Must be called inside a tokio runtime.
    pub fn start(interval: Duration) -> Self {
        let (tick_tx, tick_rx) = mpsc::channel(8);
        let handle = tokio::spawn(run_ticks(interval, tick_tx));
        Self {
            tick_rx,
            task_handle: Some(handle),
        }
    }

    /// Next tick instant, or `None` once stopped.
    pub async fn next_tick(&mut self) -> Option<Instant> {
        self.tick_rx.recv().await
    }

    /// Release the clock subscription.
    pub fn stop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
            tracing::trace!("Animation ticker stopped");
        }
        self.tick_rx.close();
    }

    pub fn is_running(&self) -> bool {
        self.task_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    #[cfg(test)]
    fn abort_handle(&self) -> Option<tokio::task::AbortHandle> {
        self.task_handle.as_ref().map(JoinHandle::abort_handle)
    }
}

impl Drop for AnimationTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_ticks(interval: Duration, tick_tx: mpsc::Sender<Instant>) {
    let mut ticks = tokio::time::interval(interval);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticks.reset(); // skip immediate first tick

    loop {
        let at = ticks.tick().await;
        if tick_tx.send(at.into_std()).await.is_err() {
            return;
        }
    }
}

/// Drive `animation` until it settles, calling `on_tick` with every state.
///
/// Stops the ticker once settled and returns the final state. If the ticker
/// is stopped first, returns the last state seen.
pub async fn animate_to_rest<F>(
    animation: &mut GaugeAnimation,
    ticker: &mut AnimationTicker,
    mut on_tick: F,
) -> AnimationState
where
    F: FnMut(&AnimationState),
{
    let mut state = animation.state();
    if state.settled {
        ticker.stop();
        return state;
    }

    while let Some(now) = ticker.next_tick().await {
        state = animation.tick(now);
        on_tick(&state);
        if state.settled {
            ticker.stop();
            break;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_arrive_at_interval() {
        let mut ticker = AnimationTicker::start(Duration::from_millis(16));
        let first = ticker.next_tick().await.unwrap();
        let second = ticker.next_tick().await.unwrap();
        assert_eq!(second - first, Duration::from_millis(16));
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_tick_stream() {
        let mut ticker = AnimationTicker::start(Duration::from_millis(16));
        ticker.next_tick().await.unwrap();
        ticker.stop();
        // Buffered ticks may still drain; the stream must then end.
        let mut drained = 0;
        while ticker.next_tick().await.is_some() {
            drained += 1;
        }
        assert!(drained <= 8);
        assert!(!ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_mid_transition_ends_tick_task() {
        let started = tokio::time::Instant::now().into_std();
        let mut animation = GaugeAnimation::new(0.0, Duration::from_millis(1000));
        animation.retarget(-0.0036, started);

        let mut ticker = AnimationTicker::start(Duration::from_millis(16));
        for _ in 0..3 {
            let at = ticker.next_tick().await.unwrap();
            assert!(!animation.tick(at).settled);
        }
        let task = ticker.abort_handle().unwrap();
        assert!(!task.is_finished());

        drop(ticker);
        for _ in 0..16 {
            if task.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(task.is_finished());

        // Nothing drives the animation once the ticker is gone.
        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(!animation.is_settled());
    }
}
