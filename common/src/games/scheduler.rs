use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::log;

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Running,
    Paused,
    Stopped,
}

/// What the tick callback wants the scheduler to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    ChangeInterval(Duration),
    Stop,
}

type ClearHook = Box<dyn FnOnce() + Send + Sync>;

/// Periodic driver for a tick callback. Only one callback runs at a time and
/// none runs after `stop` returns.
pub struct TickScheduler {
    state_tx: Arc<watch::Sender<SchedulerState>>,
    interval_tx: Arc<watch::Sender<Duration>>,
    handle: Option<JoinHandle<()>>,
    on_clear: Option<ClearHook>,
}

impl TickScheduler {
    /// Starts ticking. The first callback fires one `period` after start.
    pub fn start<F, Fut>(period: Duration, on_tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = TickControl> + Send + 'static,
    {
        let (state_tx, state_rx) = watch::channel(SchedulerState::Running);
        let (interval_tx, interval_rx) = watch::channel(period);
        let state_tx = Arc::new(state_tx);
        let interval_tx = Arc::new(interval_tx);

        let handle = tokio::spawn(run_ticks(
            period,
            on_tick,
            Arc::clone(&state_tx),
            state_rx,
            Arc::clone(&interval_tx),
            interval_rx,
        ));

        log!("Scheduler started with interval {}ms", period.as_millis());

        Self {
            state_tx,
            interval_tx,
            handle: Some(handle),
            on_clear: None,
        }
    }

    /// Hook invoked once after the scheduler has been stopped.
    pub fn with_clear_hook(mut self, hook: impl FnOnce() + Send + Sync + 'static) -> Self {
        self.on_clear = Some(Box::new(hook));
        self
    }

    pub fn state(&self) -> SchedulerState {
        *self.state_tx.borrow()
    }

    pub fn is_paused(&self) -> bool {
        self.state() == SchedulerState::Paused
    }

    pub fn pause(&self) {
        let changed = self.state_tx.send_if_modified(|state| {
            if *state == SchedulerState::Running {
                *state = SchedulerState::Paused;
                true
            } else {
                false
            }
        });
        if changed {
            log!("Scheduler paused");
        }
    }

    pub fn resume(&self) {
        let changed = self.state_tx.send_if_modified(|state| {
            if *state == SchedulerState::Paused {
                *state = SchedulerState::Running;
                true
            } else {
                false
            }
        });
        if changed {
            log!("Scheduler resumed");
        }
    }

    pub fn set_interval(&self, period: Duration) {
        self.interval_tx.send_replace(period);
    }

    pub fn current_interval(&self) -> Duration {
        *self.interval_tx.borrow()
    }

    /// Stops ticking and waits for an in-flight callback to finish.
    pub async fn stop(&mut self) {
        self.state_tx.send_replace(SchedulerState::Stopped);

        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                log!("Scheduler task ended abnormally: {}", e);
            }
            log!("Scheduler stopped");
        }

        if let Some(hook) = self.on_clear.take() {
            hook();
        }
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

fn new_timer(period: Duration) -> Interval {
    let period = period.max(MIN_PERIOD);
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}

async fn run_ticks<F, Fut>(
    period: Duration,
    mut on_tick: F,
    state_tx: Arc<watch::Sender<SchedulerState>>,
    mut state_rx: watch::Receiver<SchedulerState>,
    interval_tx: Arc<watch::Sender<Duration>>,
    mut interval_rx: watch::Receiver<Duration>,
) where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = TickControl> + Send + 'static,
{
    let mut timer = new_timer(period);

    loop {
        let state = *state_rx.borrow_and_update();
        match state {
            SchedulerState::Stopped => break,
            SchedulerState::Paused => {
                if state_rx.changed().await.is_err() {
                    break;
                }
                // a full interval passes again after resume
                timer.reset();
                continue;
            }
            SchedulerState::Running => {}
        }

        tokio::select! {
            _ = timer.tick() => {
                match on_tick().await {
                    TickControl::Continue => {}
                    TickControl::ChangeInterval(next) => {
                        interval_tx.send_replace(next);
                        // our own update; the change arm must not rebuild the timer
                        interval_rx.mark_unchanged();
                        timer = new_timer(next);
                    }
                    TickControl::Stop => {
                        state_tx.send_replace(SchedulerState::Stopped);
                        break;
                    }
                }
            }
            changed = state_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            changed = interval_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let next = *interval_rx.borrow_and_update();
                timer = new_timer(next);
            }
        }
    }
}
