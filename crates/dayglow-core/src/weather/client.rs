//! Open-Meteo current-conditions client.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::code::WeatherCategory;
use super::location::Location;
use crate::error::WeatherError;
use crate::locale::Locale;

pub const DEFAULT_API_BASE_URL: &str = "https://api.open-meteo.com";
const FORECAST_PATH: &str = "v1/forecast";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

/// The `current_weather` object of a forecast response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub weathercode: i32,
    pub windspeed: f64,
}

/// One successful fetch, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub location: String,
    pub temperature_c: i32,
    pub weather_code: i32,
    pub wind_speed_kmh: f64,
    pub category: WeatherCategory,
    pub icon: String,
    pub description: String,
}

impl WeatherReading {
    pub fn from_current(location: &Location, current: &CurrentWeather, locale: Locale) -> Self {
        let category = WeatherCategory::from_code(current.weathercode);
        Self {
            location: location.key.to_string(),
            temperature_c: round_half_up(current.temperature),
            weather_code: current.weathercode,
            wind_speed_kmh: current.windspeed,
            category,
            icon: category.icon().to_string(),
            description: category.description(locale).to_string(),
        }
    }

    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature_c)
    }
}

fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// HTTP client for the forecast endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: Url,
}

impl WeatherClient {
    /// Build a client against `base_url` (scheme + host, optionally a path prefix).
    pub fn new(base_url: &str) -> Result<Self, WeatherError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn forecast_url(&self, location: &Location) -> Result<Url, WeatherError> {
        let (latitude, longitude) = location.query_coords();
        let mut url = self.base_url.join(FORECAST_PATH)?;
        url.query_pairs_mut()
            .append_pair("latitude", &latitude)
            .append_pair("longitude", &longitude)
            .append_pair("current_weather", "true");
        Ok(url)
    }

    /// Fetch current conditions for `location`. Exactly one request, no retry.
    pub async fn current(&self, location: &Location) -> Result<CurrentWeather, WeatherError> {
        let url = self.forecast_url(location)?;
        debug!(%url, location = location.key, "requesting current weather");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(WeatherError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Malformed(e.to_string()))?;
        Ok(parsed.current_weather)
    }
}
