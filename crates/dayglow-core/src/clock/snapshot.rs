use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::lighting::LightingState;
use crate::locale::{Locale, BUDDHIST_ERA_OFFSET};

/// Everything the clock face shows for one instant.
///
/// Derived on every tick; nothing here is stored between ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub buddhist_year: i32,
    /// Weekday/day/month label with the Buddhist-era year appended.
    pub date_label: String,
    pub lighting: LightingState,
}

impl ClockSnapshot {
    pub fn at(now: NaiveDateTime, locale: Locale) -> Self {
        let minutes_since_midnight = now.hour() * 60 + now.minute();
        Self {
            hours: now.hour(),
            minutes: now.minute(),
            seconds: now.second(),
            buddhist_year: now.year() + BUDDHIST_ERA_OFFSET,
            date_label: locale.date_label(now.date()),
            lighting: LightingState::at(minutes_since_midnight),
        }
    }

    /// Snapshot of the host's local time.
    pub fn now(locale: Locale) -> Self {
        Self::at(chrono::Local::now().naive_local(), locale)
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hours * 60 + self.minutes
    }

    /// Zero-padded `(HH, MM, SS)`.
    pub fn time_parts(&self) -> (String, String, String) {
        (
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        )
    }

    pub fn time_label(&self) -> String {
        let (h, m, s) = self.time_parts();
        format!("{h}:{m}:{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::DayPhase;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn pads_time_fields() {
        let snap = ClockSnapshot::at(at(7, 5, 3), Locale::Th);
        assert_eq!(
            snap.time_parts(),
            ("07".to_string(), "05".to_string(), "03".to_string())
        );
        assert_eq!(snap.time_label(), "07:05:03");
    }

    #[test]
    fn carries_buddhist_year_and_label() {
        let snap = ClockSnapshot::at(at(12, 0, 0), Locale::Th);
        assert_eq!(snap.buddhist_year, 2569);
        assert!(snap.date_label.ends_with(" 2569"));
    }

    #[test]
    fn lighting_follows_minutes_since_midnight() {
        let snap = ClockSnapshot::at(at(4, 30, 59), Locale::En);
        assert_eq!(snap.minutes_since_midnight(), 270);
        assert_eq!(snap.lighting.phase, DayPhase::Dawn);
        assert_eq!(snap.lighting.intensity, 0.0);
    }
}
