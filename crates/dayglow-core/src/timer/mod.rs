mod controller;
mod engine;
mod mode;
mod time_source;

pub use controller::{PomodoroController, DEFAULT_COMPLETION_DELAY, DEFAULT_TICK_INTERVAL};
pub use engine::{TimerDisplay, TimerEngine, TimerState, TimerView};
pub use mode::{ModeDurations, TimerMode};
pub use time_source::{ManualTimeSource, SystemTimeSource, TimeSource};
