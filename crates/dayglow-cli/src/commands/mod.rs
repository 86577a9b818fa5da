pub mod clock;
pub mod config;
pub mod dashboard;
pub mod lighting;
pub mod timer;
pub mod weather;
