use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{TimerMode, TimerState};
use crate::weather::WeatherReading;

/// Every state change in the system produces an Event.
/// Front ends drain these from a channel and re-render after each one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ModeChanged {
        mode: TimerMode,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    TimerStarted {
        mode: TimerMode,
        remaining_ms: u64,
        /// Absolute deadline, ms since epoch.
        ends_at_ms: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: TimerMode,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    TimerTicked {
        state: TimerState,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero. Emitted once per run.
    TimerCompleted {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    WeatherLoading {
        seq: u64,
        location: String,
        status: String,
        at: DateTime<Utc>,
    },
    WeatherUpdated {
        seq: u64,
        reading: WeatherReading,
        status: String,
        at: DateTime<Utc>,
    },
    WeatherFailed {
        seq: u64,
        location: String,
        message: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn is_timer_event(&self) -> bool {
        matches!(
            self,
            Event::ModeChanged { .. }
                | Event::TimerStarted { .. }
                | Event::TimerPaused { .. }
                | Event::TimerTicked { .. }
                | Event::TimerReset { .. }
                | Event::TimerCompleted { .. }
        )
    }

    /// Request sequence number for weather events.
    pub fn weather_seq(&self) -> Option<u64> {
        match self {
            Event::WeatherLoading { seq, .. }
            | Event::WeatherUpdated { seq, .. }
            | Event::WeatherFailed { seq, .. } => Some(*seq),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = Event::TimerCompleted {
            mode: TimerMode::Break,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "TimerCompleted");
        assert_eq!(json["mode"], "break");
    }

    #[test]
    fn classifies_events() {
        let tick = Event::TimerTicked {
            state: TimerState::Running,
            remaining_ms: 10,
            at: Utc::now(),
        };
        assert!(tick.is_timer_event());
        assert_eq!(tick.weather_seq(), None);

        let failed = Event::WeatherFailed {
            seq: 4,
            location: "salaya".into(),
            message: "x".into(),
            at: Utc::now(),
        };
        assert!(!failed.is_timer_event());
        assert_eq!(failed.weather_seq(), Some(4));
    }
}
