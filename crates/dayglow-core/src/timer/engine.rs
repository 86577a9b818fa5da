//! Countdown engine.
//!
//! The engine is a pure state machine over absolute wall-clock time. It does
//! not own a thread or a timer; every time-dependent command takes `now_ms`
//! and the caller (see [`super::PomodoroController`]) drives `tick()`.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> ... -> Paused (remaining = 0)
//!   ^                                              |
//!   +-------------- reset / set_mode --------------+
//! ```
//!
//! While running, remaining time is always `deadline - now`, never a running
//! sum of tick intervals, so a late or skipped tick cannot accumulate drift.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::mode::{ModeDurations, TimerMode};
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

/// Remaining time split for the countdown face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerDisplay {
    pub minutes: u64,
    pub seconds: u64,
    /// floor((remaining mod 1000) / 10)
    pub hundredths: u64,
}

impl TimerDisplay {
    pub fn from_ms(remaining_ms: u64) -> Self {
        Self {
            minutes: remaining_ms / 60_000,
            seconds: (remaining_ms % 60_000) / 1000,
            hundredths: (remaining_ms % 1000) / 10,
        }
    }

    /// `MM:SS`
    pub fn clock_label(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }

    pub fn hundredths_label(&self) -> String {
        format!("{:02}", self.hundredths)
    }
}

/// Serializable view of the engine for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerView {
    pub mode: TimerMode,
    pub state: TimerState,
    pub remaining_ms: u64,
    pub duration_ms: u64,
    pub display: TimerDisplay,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    durations: ModeDurations,
    mode: TimerMode,
    state: TimerState,
    remaining_ms: u64,
    /// Absolute deadline (ms since epoch); set only while running.
    #[serde(default)]
    end_epoch_ms: Option<u64>,
}

impl TimerEngine {
    /// New engine in work mode with a full countdown.
    pub fn new(durations: ModeDurations) -> Self {
        Self {
            durations,
            mode: TimerMode::Work,
            state: TimerState::Idle,
            remaining_ms: durations.of(TimerMode::Work),
            end_epoch_ms: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn end_epoch_ms(&self) -> Option<u64> {
        self.end_epoch_ms
    }

    pub fn duration_ms(&self) -> u64 {
        self.durations.of(self.mode)
    }

    pub fn durations(&self) -> ModeDurations {
        self.durations
    }

    /// 0.0 .. 1.0 elapsed fraction of the current mode.
    pub fn progress(&self) -> f64 {
        let total = self.duration_ms();
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_ms as f64 / total as f64)
    }

    pub fn display(&self) -> TimerDisplay {
        TimerDisplay::from_ms(self.remaining_ms)
    }

    pub fn view(&self) -> TimerView {
        TimerView {
            mode: self.mode,
            state: self.state,
            remaining_ms: self.remaining_ms,
            duration_ms: self.duration_ms(),
            display: self.display(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin counting down from the current remaining time.
    ///
    /// Starting with nothing left is allowed; the next tick completes.
    pub fn start(&mut self, now_ms: u64) -> Option<Event> {
        if self.state == TimerState::Running {
            return None;
        }
        let ends_at_ms = now_ms.saturating_add(self.remaining_ms);
        self.state = TimerState::Running;
        self.end_epoch_ms = Some(ends_at_ms);
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_ms: self.remaining_ms,
            ends_at_ms,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self, now_ms: u64) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.flush(now_ms);
        self.state = TimerState::Paused;
        self.end_epoch_ms = None;
        Some(Event::TimerPaused {
            mode: self.mode,
            remaining_ms: self.remaining_ms,
            at: Utc::now(),
        })
    }

    /// Start when stopped, pause when running.
    pub fn toggle(&mut self, now_ms: u64) -> Option<Event> {
        if self.is_running() {
            self.pause(now_ms)
        } else {
            self.start(now_ms)
        }
    }

    /// Stop and refill the current mode. Mode is unchanged.
    pub fn reset(&mut self) -> Event {
        self.stop_and_refill();
        Event::TimerReset {
            mode: self.mode,
            remaining_ms: self.remaining_ms,
            at: Utc::now(),
        }
    }

    /// Stop, switch mode and refill. Never auto-starts.
    pub fn set_mode(&mut self, mode: TimerMode) -> Event {
        self.mode = mode;
        self.stop_and_refill();
        Event::ModeChanged {
            mode: self.mode,
            remaining_ms: self.remaining_ms,
            at: Utc::now(),
        }
    }

    /// Recompute remaining time. Returns `Some(Event::TimerCompleted)` on the
    /// tick that reaches zero; the engine is paused afterwards, so later
    /// ticks return `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.flush(now_ms);
        if self.remaining_ms > 0 {
            return None;
        }
        self.state = TimerState::Paused;
        self.end_epoch_ms = None;
        Some(Event::TimerCompleted {
            mode: self.mode,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn flush(&mut self, now_ms: u64) {
        if let Some(end) = self.end_epoch_ms {
            self.remaining_ms = end.saturating_sub(now_ms);
        }
    }

    fn stop_and_refill(&mut self) {
        self.state = TimerState::Idle;
        self.end_epoch_ms = None;
        self.remaining_ms = self.durations.of(self.mode);
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(ModeDurations::default())
    }
}
