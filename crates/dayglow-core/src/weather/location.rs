use serde::Serialize;

use crate::error::{CoreError, Result};

/// A place the weather panel can show.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub key: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// Thai display name.
    pub name: &'static str,
}

pub const LOCATIONS: [Location; 3] = [
    Location {
        key: "bangkok",
        latitude: 13.7563,
        longitude: 100.5018,
        name: "กรุงเทพมหานคร",
    },
    Location {
        key: "salaya",
        latitude: 13.8016,
        longitude: 100.3228,
        name: "ศาลายา",
    },
    Location {
        key: "phetchaburi",
        latitude: 13.1069,
        longitude: 99.9450,
        name: "เพชรบุรี",
    },
];

impl Location {
    /// Look up a location by key (case-insensitive).
    pub fn find(key: &str) -> Result<&'static Location> {
        LOCATIONS
            .iter()
            .find(|loc| loc.key.eq_ignore_ascii_case(key.trim()))
            .ok_or_else(|| CoreError::UnknownLocation(key.to_string()))
    }

    /// Coordinates formatted the way the API query expects them.
    pub fn query_coords(&self) -> (String, String) {
        (
            format!("{:.4}", self.latitude),
            format!("{:.4}", self.longitude),
        )
    }
}
