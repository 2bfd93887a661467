//! Airport records.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::AirportCode;
use super::time::hhmm_list;

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Coarse time-of-day departure slots published by an airport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(with = "hhmm_list", default)]
    pub morning: Vec<NaiveTime>,
    #[serde(with = "hhmm_list", default)]
    pub afternoon: Vec<NaiveTime>,
    #[serde(with = "hhmm_list", default)]
    pub evening: Vec<NaiveTime>,
    #[serde(with = "hhmm_list", default)]
    pub night: Vec<NaiveTime>,
}

/// An airport in the catalog.
///
/// Airports are identity records: they are loaded once with the catalog
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: AirportCode,
    pub name: String,
    pub city: String,
    /// State or province.
    #[serde(alias = "state")]
    pub region: String,
    pub coordinates: Coordinates,
    pub terminals: u32,
    #[serde(default)]
    pub schedule: DaySchedule,
}

impl Airport {
    /// Label used in route listings, e.g. "Mumbai, Maharashtra (BOM)".
    pub fn display_label(&self) -> String {
        format!("{}, {} ({})", self.city, self.region, self.code)
    }

    /// Label used in airport pickers, e.g. "Mumbai (BOM) - Maharashtra".
    pub fn option_label(&self) -> String {
        format!("{} ({}) - {}", self.city, self.code, self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mumbai() -> Airport {
        Airport {
            code: AirportCode::parse("BOM").unwrap(),
            name: "Chhatrapati Shivaji Maharaj International Airport".to_string(),
            city: "Mumbai".to_string(),
            region: "Maharashtra".to_string(),
            coordinates: Coordinates {
                lat: 19.0896,
                lng: 72.8656,
            },
            terminals: 2,
            schedule: DaySchedule::default(),
        }
    }

    #[test]
    fn labels() {
        let bom = mumbai();
        assert_eq!(bom.display_label(), "Mumbai, Maharashtra (BOM)");
        assert_eq!(bom.option_label(), "Mumbai (BOM) - Maharashtra");
    }

    #[test]
    fn deserialize_accepts_state_alias() {
        let json = r#"{
            "code": "GOI",
            "name": "Goa International Airport",
            "city": "Dabolim",
            "state": "Goa",
            "coordinates": { "lat": 15.3808, "lng": 73.8314 },
            "terminals": 1,
            "schedule": {
                "morning": ["07:00", "09:00"],
                "afternoon": ["13:00"],
                "evening": [],
                "night": ["21:30"]
            }
        }"#;

        let airport: Airport = serde_json::from_str(json).unwrap();
        assert_eq!(airport.region, "Goa");
        assert_eq!(airport.schedule.morning.len(), 2);
        assert_eq!(airport.schedule.night.len(), 1);
        assert!(airport.schedule.evening.is_empty());
    }

    #[test]
    fn deserialize_rejects_bad_slot() {
        let json = r#"{
            "code": "GOI",
            "name": "Goa International Airport",
            "city": "Dabolim",
            "region": "Goa",
            "coordinates": { "lat": 15.3808, "lng": 73.8314 },
            "terminals": 1,
            "schedule": { "morning": ["7am"] }
        }"#;

        assert!(serde_json::from_str::<Airport>(json).is_err());
    }
}
