mod lighting;
mod snapshot;

pub use lighting::{
    render_ascii_chart, DayPhase, LightingState, DARK_END_EARLY, DARK_START_LATE, DAWN_END,
    DUSK_END, DUSK_START, MINUTES_PER_DAY,
};
pub use snapshot::ClockSnapshot;
