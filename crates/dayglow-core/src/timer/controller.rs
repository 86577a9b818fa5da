//! Async driver for [`TimerEngine`].
//!
//! The controller owns the engine and the periodic ticker task. At most one
//! ticker exists at a time: every transition that leaves the running state
//! aborts it, and starting aborts any leftover before spawning a new one.
//! A completion signal still waiting out its delay is cancelled the same way.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use super::engine::{TimerEngine, TimerView};
use super::mode::TimerMode;
use super::time_source::{SystemTimeSource, TimeSource};
use crate::events::Event;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);
/// Pause between the zero tick and the completion signal, so the zeroed
/// display is published first.
pub const DEFAULT_COMPLETION_DELAY: Duration = Duration::from_millis(50);

#[derive(Clone)]
pub struct PomodoroController {
    engine: Arc<Mutex<TimerEngine>>,
    ticker: Arc<Mutex<Option<JoinHandle<()>>>>,
    completion: Arc<Mutex<Option<JoinHandle<()>>>>,
    time: Arc<dyn TimeSource>,
    events: UnboundedSender<Event>,
    tick_interval: Duration,
    completion_delay: Duration,
}

impl PomodoroController {
    pub fn new(engine: TimerEngine, events: UnboundedSender<Event>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            ticker: Arc::new(Mutex::new(None)),
            completion: Arc::new(Mutex::new(None)),
            time: Arc::new(SystemTimeSource),
            events,
            tick_interval: DEFAULT_TICK_INTERVAL,
            completion_delay: DEFAULT_COMPLETION_DELAY,
        }
    }

    pub fn with_time_source(mut self, time: Arc<dyn TimeSource>) -> Self {
        self.time = time;
        self
    }

    pub fn with_intervals(mut self, tick_interval: Duration, completion_delay: Duration) -> Self {
        self.tick_interval = tick_interval.max(Duration::from_millis(1));
        self.completion_delay = completion_delay;
        self
    }

    pub async fn view(&self) -> TimerView {
        self.engine.lock().await.view()
    }

    pub async fn is_running(&self) -> bool {
        self.engine.lock().await.is_running()
    }

    /// Start counting down. Returns `false` if already running.
    pub async fn start(&self) -> bool {
        let started = {
            let mut engine = self.engine.lock().await;
            engine.start(self.time.now_ms())
        };
        match started {
            Some(event) => {
                info!("countdown started");
                self.publish(event);
                self.spawn_ticker().await;
                true
            }
            None => false,
        }
    }

    /// Pause a running countdown. Returns `false` if it was not running.
    pub async fn pause(&self) -> bool {
        self.stop_ticker().await;
        let now = self.time.now_ms();
        let mut engine = self.engine.lock().await;

        // The deadline may have passed since the last tick; finish instead of
        // parking at zero without ever signalling completion.
        if let Some(done) = engine.tick(now) {
            self.publish(ticked(&engine));
            drop(engine);
            self.schedule_completion(done).await;
            return true;
        }

        match engine.pause(now) {
            Some(event) => {
                info!(remaining_ms = engine.remaining_ms(), "countdown paused");
                self.publish(event);
                true
            }
            None => false,
        }
    }

    /// Start/pause toggle.
    pub async fn toggle(&self) -> bool {
        if self.is_running().await {
            self.pause().await
        } else {
            self.start().await
        }
    }

    pub async fn reset(&self) {
        self.stop_ticker().await;
        let event = self.engine.lock().await.reset();
        info!("countdown reset");
        self.publish(event);
    }

    /// Switch mode. A running countdown is stopped; the new mode is not
    /// started.
    pub async fn set_mode(&self, mode: TimerMode) {
        self.stop_ticker().await;
        let event = self.engine.lock().await.set_mode(mode);
        info!(%mode, "timer mode changed");
        self.publish(event);
    }

    // ── Internal ─────────────────────────────────────────────────────

    async fn spawn_ticker(&self) {
        let mut slot = self.ticker.lock().await;
        if let Some(previous) = slot.take() {
            previous.abort();
        }

        let engine = Arc::clone(&self.engine);
        let time = Arc::clone(&self.time);
        let controller = self.clone();
        let period = self.tick_interval;

        *slot = Some(tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let mut guard = engine.lock().await;
                if !guard.is_running() {
                    break;
                }
                let completed = guard.tick(time.now_ms());
                controller.publish(ticked(&guard));
                drop(guard);

                if let Some(done) = completed {
                    controller.schedule_completion(done).await;
                    break;
                }
            }
            debug!("ticker finished");
        }));
    }

    /// Abort the ticker and any completion signal not yet published.
    async fn stop_ticker(&self) {
        if let Some(handle) = self.ticker.lock().await.take() {
            handle.abort();
        }
        if let Some(handle) = self.completion.lock().await.take() {
            handle.abort();
        }
    }

    async fn schedule_completion(&self, done: Event) {
        info!("countdown reached zero");
        let controller = self.clone();
        let delay = self.completion_delay;
        let mut slot = self.completion.lock().await;
        *slot = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            controller.publish(done);
        }));
    }

    fn publish(&self, event: Event) {
        if self.events.send(event).is_err() {
            debug!("event receiver dropped; timer event not delivered");
        }
    }
}

fn ticked(engine: &TimerEngine) -> Event {
    Event::TimerTicked {
        state: engine.state(),
        remaining_ms: engine.remaining_ms(),
        at: Utc::now(),
    }
}
