//! # Dayglow Core Library
//!
//! Core logic for the Dayglow desk widget: a live clock with a day/night
//! lighting curve, a current-weather readout and a Pomodoro countdown. The
//! `dayglow` CLI is a thin terminal front end over this crate.
//!
//! ## Architecture
//!
//! - **Clock**: pure functions of wall-clock time (time labels, Buddhist-era
//!   date, daylight intensity and sun position)
//! - **Weather**: Open-Meteo client plus a service that discards superseded
//!   responses by request sequence number
//! - **Timer**: a deadline-based countdown state machine driven by a tokio
//!   ticker task
//! - **Dashboard**: the single view model front ends render after every
//!   [`Event`]
//!
//! ## Key Components
//!
//! - [`LightingState`]: daylight curve
//! - [`WeatherService`]: fetch orchestration
//! - [`TimerEngine`] / [`PomodoroController`]: countdown state and driver
//! - [`Config`]: application configuration management

pub mod clock;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod locale;
pub mod storage;
pub mod timer;
pub mod weather;

pub use clock::{ClockSnapshot, DayPhase, LightingState};
pub use dashboard::{Dashboard, WeatherPanel};
pub use error::{ConfigError, CoreError, WeatherError};
pub use events::Event;
pub use locale::Locale;
pub use storage::Config;
pub use timer::{
    ModeDurations, PomodoroController, TimerDisplay, TimerEngine, TimerMode, TimerState, TimerView,
};
pub use weather::{
    FetchOutcome, Location, WeatherCategory, WeatherClient, WeatherReading, WeatherService,
};
