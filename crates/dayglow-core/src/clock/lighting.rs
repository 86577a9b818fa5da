//! Daylight curve.
//!
//! Maps minutes-since-midnight to a brightness scalar and a decorative sun
//! position. The day is split into four half-open phases:
//!
//! ```text
//! 00:00        04:30   06:00              18:00             23:00   24:00
//!   |  night     | dawn  |       day         |      dusk      | night |
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

pub const DARK_END_EARLY: u32 = 4 * 60 + 30;
pub const DAWN_END: u32 = 6 * 60;
pub const DUSK_START: u32 = 18 * 60;
pub const DUSK_END: u32 = 23 * 60;
pub const DARK_START_LATE: u32 = DUSK_END;

/// Resting sun position while it is below the horizon.
const NIGHT_SUN_X: f64 = 50.0;
const NIGHT_SUN_Y: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPhase {
    Night,
    Dawn,
    Day,
    Dusk,
}

impl DayPhase {
    /// Phase containing `minute` (wrapped into a single day).
    pub fn at(minute: u32) -> Self {
        let t = minute % MINUTES_PER_DAY;
        if t >= DARK_START_LATE || t < DARK_END_EARLY {
            DayPhase::Night
        } else if t < DAWN_END {
            DayPhase::Dawn
        } else if t < DUSK_START {
            DayPhase::Day
        } else {
            DayPhase::Dusk
        }
    }

    /// Half-open `[start, end)` bounds. Night wraps midnight, so its start is
    /// greater than its end.
    pub fn bounds(self) -> (u32, u32) {
        match self {
            DayPhase::Night => (DARK_START_LATE, DARK_END_EARLY),
            DayPhase::Dawn => (DARK_END_EARLY, DAWN_END),
            DayPhase::Day => (DAWN_END, DUSK_START),
            DayPhase::Dusk => (DUSK_START, DUSK_END),
        }
    }
}

/// Output of the daylight curve for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightingState {
    pub phase: DayPhase,
    /// Normalized brightness, 0.0 ..= 1.0
    pub intensity: f64,
    /// Horizontal sun position in percent.
    pub sun_x: f64,
    /// Vertical sun position in percent (larger is lower).
    pub sun_y: f64,
}

impl LightingState {
    /// Evaluate the curve at `minute` minutes past midnight.
    pub fn at(minute: u32) -> Self {
        let t = minute % MINUTES_PER_DAY;
        let phase = DayPhase::at(t);

        let (intensity, sun_x, sun_y) = match phase {
            DayPhase::Night => (0.0, NIGHT_SUN_X, NIGHT_SUN_Y),
            DayPhase::Dawn => {
                let p = progress(t, phase);
                (0.4 * p, 20.0 + 10.0 * p, 120.0 - 20.0 * p)
            }
            DayPhase::Day => {
                let p = progress(t, phase);
                let arc = (p * PI).sin();
                let intensity = (0.4 + 0.6 * arc).min(1.0);
                (intensity, 30.0 + 40.0 * p, 100.0 - 80.0 * arc)
            }
            DayPhase::Dusk => {
                let p = progress(t, phase);
                ((1.0 - p) * 0.3, 70.0 + 10.0 * p, 100.0 + 50.0 * p)
            }
        };

        Self {
            phase,
            intensity,
            sun_x,
            sun_y,
        }
    }

    pub fn sun_x_pct(&self) -> String {
        format!("{}%", self.sun_x)
    }

    pub fn sun_y_pct(&self) -> String {
        format!("{}%", self.sun_y)
    }
}

/// Fraction of the way through `phase`, in `[0, 1)`.
fn progress(t: u32, phase: DayPhase) -> f64 {
    let (start, end) = phase.bounds();
    f64::from(t - start) / f64::from(end - start)
}

/// Render the curve as an hourly ASCII bar chart.
pub fn render_ascii_chart() -> String {
    let mut output = String::from("\nDaylight Curve:\n");
    output.push_str(&"─".repeat(50));
    output.push('\n');

    for hour in 0..24 {
        let state = LightingState::at(hour * 60);
        let bar_length = (state.intensity * 30.0).round() as usize;
        let bar = "█".repeat(bar_length);
        let empty = " ".repeat(30 - bar_length);

        let marker = match state.phase {
            DayPhase::Night => "·",
            DayPhase::Dawn | DayPhase::Dusk => "○",
            DayPhase::Day => "●",
        };

        output.push_str(&format!(
            "{:02}:00 {}{}{} {:.0}%\n",
            hour,
            bar,
            empty,
            marker,
            state.intensity * 100.0
        ));
    }

    output.push_str(&"─".repeat(50));
    output.push_str("\n● Day  ○ Dawn/Dusk  · Night\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn boundary_intensities() {
        assert_eq!(LightingState::at(270).intensity, 0.0);
        assert!(close(LightingState::at(360).intensity, 0.4));
        assert!(close(LightingState::at(720).intensity, 1.0));
        assert!(close(LightingState::at(1080).intensity, 0.3));
        assert_eq!(LightingState::at(1380).intensity, 0.0);
    }

    #[test]
    fn boundaries_belong_to_the_later_phase() {
        assert_eq!(DayPhase::at(269), DayPhase::Night);
        assert_eq!(DayPhase::at(270), DayPhase::Dawn);
        assert_eq!(DayPhase::at(359), DayPhase::Dawn);
        assert_eq!(DayPhase::at(360), DayPhase::Day);
        assert_eq!(DayPhase::at(1079), DayPhase::Day);
        assert_eq!(DayPhase::at(1080), DayPhase::Dusk);
        assert_eq!(DayPhase::at(1379), DayPhase::Dusk);
        assert_eq!(DayPhase::at(1380), DayPhase::Night);
        assert_eq!(DayPhase::at(0), DayPhase::Night);
    }

    #[test]
    fn noon_puts_the_sun_at_its_peak() {
        let noon = LightingState::at(720);
        assert!(close(noon.sun_x, 50.0));
        assert!(close(noon.sun_y, 20.0));
    }

    #[test]
    fn night_uses_resting_sun_position() {
        let midnight = LightingState::at(0);
        assert_eq!(midnight.sun_x, 50.0);
        assert_eq!(midnight.sun_y, 150.0);
        assert_eq!(midnight.sun_y_pct(), "150%");
    }

    #[test]
    fn dawn_starts_at_the_horizon() {
        let dawn = LightingState::at(270);
        assert_eq!(dawn.sun_x, 20.0);
        assert_eq!(dawn.sun_y, 120.0);
    }

    #[test]
    fn minutes_wrap_past_midnight() {
        assert_eq!(LightingState::at(1440 + 720), LightingState::at(720));
    }

    #[test]
    fn chart_has_one_row_per_hour() {
        let chart = render_ascii_chart();
        assert_eq!(chart.lines().filter(|l| l.contains(":00 ")).count(), 24);
        assert!(chart.contains(&format!("12:00 {}● 100%", "█".repeat(30))));
    }

    proptest! {
        #[test]
        fn curve_stays_in_range(t in 0u32..MINUTES_PER_DAY) {
            let s = LightingState::at(t);
            prop_assert!((0.0..=1.0).contains(&s.intensity));
            prop_assert!((20.0..=80.0).contains(&s.sun_x));
            prop_assert!((20.0..=150.0).contains(&s.sun_y));
        }

        #[test]
        fn each_minute_lies_in_exactly_one_phase(t in 0u32..MINUTES_PER_DAY) {
            let hits = [DayPhase::Night, DayPhase::Dawn, DayPhase::Day, DayPhase::Dusk]
                .iter()
                .filter(|phase| {
                    let (start, end) = phase.bounds();
                    if start < end {
                        t >= start && t < end
                    } else {
                        t >= start || t < end
                    }
                })
                .count();
            prop_assert_eq!(hits, 1);
        }
    }
}
