//! WMO weather-code classification.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCategory {
    Clear,
    PartlyCloudy,
    Fog,
    LightRain,
    HeavyRain,
    Thunderstorm,
    MostlyCloudy,
}

impl WeatherCategory {
    /// Classify a weather code. First matching range wins; anything not
    /// listed falls back to `MostlyCloudy`.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => WeatherCategory::Clear,
            1..=3 => WeatherCategory::PartlyCloudy,
            45..=48 => WeatherCategory::Fog,
            51..=67 => WeatherCategory::LightRain,
            80..=82 => WeatherCategory::HeavyRain,
            c if c >= 95 => WeatherCategory::Thunderstorm,
            _ => WeatherCategory::MostlyCloudy,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WeatherCategory::Clear => "☀",
            WeatherCategory::PartlyCloudy | WeatherCategory::MostlyCloudy => "☁",
            WeatherCategory::Fog => "🌫",
            WeatherCategory::LightRain | WeatherCategory::HeavyRain => "☂",
            WeatherCategory::Thunderstorm => "⛈",
        }
    }

    pub fn description(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Th => match self {
                WeatherCategory::Clear => "ท้องฟ้าแจ่มใส",
                WeatherCategory::PartlyCloudy => "มีเมฆเป็นบางส่วน",
                WeatherCategory::Fog => "มีหมอก",
                WeatherCategory::LightRain => "ฝนตกปรอยๆ",
                WeatherCategory::HeavyRain => "ฝนตกหนัก",
                WeatherCategory::Thunderstorm => "พายุฝนฟ้าคะนอง",
                WeatherCategory::MostlyCloudy => "มีเมฆมาก",
            },
            Locale::En => match self {
                WeatherCategory::Clear => "clear sky",
                WeatherCategory::PartlyCloudy => "partly cloudy",
                WeatherCategory::Fog => "fog",
                WeatherCategory::LightRain => "light rain",
                WeatherCategory::HeavyRain => "heavy rain",
                WeatherCategory::Thunderstorm => "thunderstorm",
                WeatherCategory::MostlyCloudy => "mostly cloudy",
            },
        }
    }
}
