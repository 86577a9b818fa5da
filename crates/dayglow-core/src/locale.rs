//! Display strings for the two supported locales.
//!
//! Thai is the default: the location names, weather descriptions and the
//! Buddhist-era year all come from a Thai-language widget.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::timer::TimerMode;

/// Offset between the Gregorian and Buddhist-era calendars.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

const TH_WEEKDAYS: [&str; 7] = [
    "จันทร์",
    "อังคาร",
    "พุธ",
    "พฤหัสบดี",
    "ศุกร์",
    "เสาร์",
    "อาทิตย์",
];

const TH_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

const EN_WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Th,
    En,
}

impl Locale {
    pub fn weekday_name(self, weekday: Weekday) -> &'static str {
        let idx = weekday.num_days_from_monday() as usize;
        match self {
            Locale::Th => TH_WEEKDAYS[idx],
            Locale::En => EN_WEEKDAYS[idx],
        }
    }

    pub fn month_name(self, month: u32) -> &'static str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::Th => TH_MONTHS[idx],
            Locale::En => EN_MONTHS[idx],
        }
    }

    /// Long weekday/day/month label with the Buddhist-era year appended.
    pub fn date_label(self, date: NaiveDate) -> String {
        let weekday = self.weekday_name(date.weekday());
        let month = self.month_name(date.month());
        let year = date.year() + BUDDHIST_ERA_OFFSET;
        match self {
            Locale::Th => format!("วัน{weekday}ที่ {} {month} {year}", date.day()),
            Locale::En => format!("{weekday}, {} {month} {year}", date.day()),
        }
    }

    pub fn loading_status(self, place: &str) -> String {
        match self {
            Locale::Th => format!("กำลังดึงข้อมูล {place}..."),
            Locale::En => format!("Fetching weather for {place}..."),
        }
    }

    pub fn weather_status(self, description: &str, wind_speed_kmh: f64) -> String {
        match self {
            Locale::Th => format!("{description} • ลม {wind_speed_kmh} กม./ชม."),
            Locale::En => format!("{description} • wind {wind_speed_kmh} km/h"),
        }
    }

    pub fn fetch_failed(self) -> &'static str {
        match self {
            Locale::Th => "โหลดข้อมูลไม่สำเร็จ",
            Locale::En => "Failed to load weather data",
        }
    }

    /// Message shown when a countdown in `mode` reaches zero.
    pub fn completion_message(self, mode: TimerMode) -> &'static str {
        match (self, mode) {
            (Locale::Th, TimerMode::Work) => "หมดเวลาทำงานแล้ว! ได้เวลาพักสักหน่อย",
            (Locale::Th, TimerMode::Break) => "หมดเวลาพักแล้ว! กลับมาทำงานกันต่อ",
            (Locale::En, TimerMode::Work) => "Work session finished! Time for a break.",
            (Locale::En, TimerMode::Break) => "Break is over! Back to work.",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Th => f.write_str("th"),
            Locale::En => f.write_str("en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "th" | "th-th" | "thai" => Ok(Locale::Th),
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}
