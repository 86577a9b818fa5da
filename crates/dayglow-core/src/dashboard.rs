//! Presentation model.
//!
//! `Dashboard` is the single snapshot a front end renders. Components never
//! write to the display directly; they publish [`Event`]s, the front end
//! folds them in with [`Dashboard::apply`] and re-renders.

use serde::Serialize;

use crate::clock::ClockSnapshot;
use crate::events::Event;
use crate::locale::Locale;
use crate::timer::TimerView;

/// Weather half of the widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherPanel {
    pub location: Option<String>,
    pub temperature_c: Option<i32>,
    pub icon: Option<String>,
    pub status: String,
    /// Temperature and icon are placeholders while a fetch is in flight.
    pub loading: bool,
    latest_seq: u64,
    keep_loading_on_error: bool,
}

impl WeatherPanel {
    pub fn new(keep_loading_on_error: bool) -> Self {
        Self {
            location: None,
            temperature_c: None,
            icon: None,
            status: String::new(),
            loading: false,
            latest_seq: 0,
            keep_loading_on_error,
        }
    }

    /// Fold a weather event in. Events from a request older than the newest
    /// one seen are ignored. Returns whether the panel changed.
    pub fn apply(&mut self, event: &Event) -> bool {
        let Some(seq) = event.weather_seq() else {
            return false;
        };
        if seq < self.latest_seq {
            return false;
        }
        self.latest_seq = seq;

        match event {
            Event::WeatherLoading {
                location, status, ..
            } => {
                self.location = Some(location.clone());
                self.status = status.clone();
                self.loading = true;
            }
            Event::WeatherUpdated {
                reading, status, ..
            } => {
                self.location = Some(reading.location.clone());
                self.temperature_c = Some(reading.temperature_c);
                self.icon = Some(reading.icon.clone());
                self.status = status.clone();
                self.loading = false;
            }
            Event::WeatherFailed { message, .. } => {
                self.status = message.clone();
                if !self.keep_loading_on_error {
                    self.loading = false;
                }
            }
            _ => return false,
        }
        true
    }

    pub fn temperature_label(&self) -> String {
        match self.temperature_c {
            Some(t) if !self.loading => format!("{t}°C"),
            _ => "--°C".to_string(),
        }
    }

    pub fn icon_label(&self) -> &str {
        match &self.icon {
            Some(icon) if !self.loading => icon.as_str(),
            _ => "…",
        }
    }
}

/// Snapshot of everything on screen.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub locale: Locale,
    pub clock: ClockSnapshot,
    pub weather: WeatherPanel,
    pub timer: TimerView,
    /// Pending completion message, shown until dismissed.
    pub notice: Option<String>,
}

impl Dashboard {
    pub fn new(locale: Locale, keep_loading_on_error: bool, timer: TimerView) -> Self {
        Self {
            locale,
            clock: ClockSnapshot::now(locale),
            weather: WeatherPanel::new(keep_loading_on_error),
            timer,
            notice: None,
        }
    }

    pub fn refresh_clock(&mut self) {
        self.clock = ClockSnapshot::now(self.locale);
    }

    /// Fold in a non-timer-view event. Timer views are replaced wholesale by
    /// the caller from the controller; this only records the completion
    /// notice and weather changes.
    pub fn apply(&mut self, event: &Event) -> bool {
        match event {
            Event::TimerCompleted { mode, .. } => {
                self.notice = Some(self.locale.completion_message(*mode).to_string());
                true
            }
            Event::TimerStarted { .. } | Event::ModeChanged { .. } | Event::TimerReset { .. } => {
                self.notice = None;
                true
            }
            _ => self.weather.apply(event),
        }
    }
}
