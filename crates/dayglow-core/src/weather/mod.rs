mod client;
mod code;
mod location;
mod service;

pub use client::{CurrentWeather, WeatherClient, WeatherReading, DEFAULT_API_BASE_URL};
pub use code::WeatherCategory;
pub use location::{Location, LOCATIONS};
pub use service::{FetchOutcome, WeatherService};
