//! Text rendering of core snapshots.

use dayglow_core::clock::DayPhase;
use dayglow_core::{ClockSnapshot, Dashboard, LightingState, TimerMode, TimerState, TimerView, WeatherPanel};

const BAR_WIDTH: usize = 20;

pub fn phase_name(phase: DayPhase) -> &'static str {
    match phase {
        DayPhase::Night => "night",
        DayPhase::Dawn => "dawn",
        DayPhase::Day => "day",
        DayPhase::Dusk => "dusk",
    }
}

pub fn intensity_bar(intensity: f64) -> String {
    let filled = (intensity.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn lighting(state: &LightingState) -> String {
    format!(
        "{} {:>3.0}% {:<5} sun ({}, {})",
        intensity_bar(state.intensity),
        state.intensity * 100.0,
        phase_name(state.phase),
        state.sun_x_pct(),
        state.sun_y_pct()
    )
}

pub fn clock(snapshot: &ClockSnapshot) -> String {
    format!("{}  {}", snapshot.time_label(), snapshot.date_label)
}

pub fn weather(panel: &WeatherPanel) -> String {
    format!(
        "{} {}  {}",
        panel.icon_label(),
        panel.temperature_label(),
        panel.status
    )
}

pub fn mode_selector(mode: TimerMode) -> String {
    match mode {
        TimerMode::Work => "[WORK]  break ".to_string(),
        TimerMode::Break => " work  [BREAK]".to_string(),
    }
}

/// Label for the start/pause control given the current state.
pub fn start_label(state: TimerState) -> &'static str {
    match state {
        TimerState::Running => "pause",
        TimerState::Idle | TimerState::Paused => "start",
    }
}

pub fn timer(view: &TimerView) -> String {
    format!(
        "{} {}.{}  ({})",
        mode_selector(view.mode),
        view.display.clock_label(),
        view.display.hundredths_label(),
        start_label(view.state)
    )
}

/// The full widget.
pub fn dashboard(dash: &Dashboard) -> String {
    let mut out = String::new();
    out.push_str(&clock(&dash.clock));
    out.push('\n');
    out.push_str(&lighting(&dash.clock.lighting));
    out.push_str("\n\n");
    out.push_str(&weather(&dash.weather));
    out.push_str("\n\n");
    out.push_str(&timer(&dash.timer));
    out.push('\n');
    if let Some(notice) = &dash.notice {
        out.push_str(&format!("\n>>> {notice} <<<\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayglow_core::{Locale, TimerEngine};

    #[test]
    fn bar_scales_with_intensity() {
        assert_eq!(intensity_bar(0.0), "░".repeat(20));
        assert_eq!(intensity_bar(1.0), "█".repeat(20));
        assert_eq!(intensity_bar(0.5).chars().filter(|c| *c == '█').count(), 10);
    }

    #[test]
    fn lighting_line_shows_phase_and_sun() {
        let line = lighting(&LightingState::at(720));
        assert!(line.contains("100%"));
        assert!(line.contains("day"));
        assert!(line.contains("sun (50%, 20%)"));
    }

    #[test]
    fn timer_line_shows_hundredths() {
        let view = TimerEngine::default().view();
        assert_eq!(timer(&view), "[WORK]  break  25:00.00  (start)");
    }

    #[test]
    fn dashboard_includes_notice() {
        let mut dash = Dashboard::new(Locale::En, false, TimerEngine::default().view());
        dash.notice = Some("Break is over! Back to work.".into());
        let text = dashboard(&dash);
        assert!(text.contains(">>> Break is over! Back to work. <<<"));
        assert!(text.contains("--°C"));
    }
}
