use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    #[default]
    Work,
    Break,
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerMode::Work => f.write_str("work"),
            TimerMode::Break => f.write_str("break"),
        }
    }
}

impl FromStr for TimerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "work" | "focus" | "w" => Ok(TimerMode::Work),
            "break" | "rest" | "b" => Ok(TimerMode::Break),
            other => Err(format!("unknown timer mode: {other}")),
        }
    }
}

/// Full length of each mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeDurations {
    pub work_ms: u64,
    pub break_ms: u64,
}

impl ModeDurations {
    /// Build from whole minutes.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn from_minutes(work_min: u64, break_min: u64) -> Self {
        Self {
            work_ms: work_min.saturating_mul(60).saturating_mul(1000),
            break_ms: break_min.saturating_mul(60).saturating_mul(1000),
        }
    }

    pub fn of(&self, mode: TimerMode) -> u64 {
        match mode {
            TimerMode::Work => self.work_ms,
            TimerMode::Break => self.break_ms,
        }
    }
}

impl Default for ModeDurations {
    fn default() -> Self {
        Self::from_minutes(25, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_durations() {
        let d = ModeDurations::default();
        assert_eq!(d.of(TimerMode::Work), 1_500_000);
        assert_eq!(d.of(TimerMode::Break), 300_000);
    }

    #[test]
    fn from_minutes_saturates() {
        let d = ModeDurations::from_minutes(u64::MAX, 1);
        assert_eq!(d.work_ms, u64::MAX);
        assert_eq!(d.break_ms, 60_000);
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("Work".parse::<TimerMode>().unwrap(), TimerMode::Work);
        assert_eq!("b".parse::<TimerMode>().unwrap(), TimerMode::Break);
        assert!("nap".parse::<TimerMode>().is_err());
    }
}
