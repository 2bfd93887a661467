//! Route edges and their published schedules.

use std::fmt;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::AirportCode;
use super::time::hhmm;

/// Label used for flights that operate every day.
const DAILY: &str = "Daily";

/// Days on which a scheduled flight operates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frequency {
    /// Every day of the week.
    Daily,
    /// Only on the listed weekdays, in published order.
    Days(Vec<Weekday>),
}

impl Frequency {
    /// Published labels, e.g. `["Daily"]` or `["Mon", "Wed"]`.
    pub fn labels(&self) -> Vec<String> {
        match self {
            Frequency::Daily => vec![DAILY.to_string()],
            Frequency::Days(days) => days.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels().join(", "))
    }
}

impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.labels().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let labels = Vec::<String>::deserialize(deserializer)?;

        if labels.is_empty() {
            return Err(serde::de::Error::custom("frequency must list at least one day"));
        }

        if labels.iter().any(|l| l.eq_ignore_ascii_case(DAILY)) {
            return Ok(Frequency::Daily);
        }

        labels
            .iter()
            .map(|l| {
                l.parse::<Weekday>()
                    .map_err(|_| serde::de::Error::custom(format!("unknown weekday: {l}")))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Frequency::Days)
    }
}

/// One published departure on a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledFlight {
    #[serde(with = "hhmm")]
    pub departure: NaiveTime,
    #[serde(with = "hhmm")]
    pub arrival: NaiveTime,
    pub frequency: Frequency,
}

/// A directed, non-stop route between two airports.
///
/// Durations are fractional hours; prices are whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEdge {
    pub from: AirportCode,
    pub to: AirportCode,
    #[serde(rename = "duration")]
    pub duration_hours: f64,
    pub price: u32,
    /// Intermediate technical stops on this edge. Zero for a plain
    /// non-stop flight.
    #[serde(default)]
    pub stops: u32,
    #[serde(default)]
    pub schedule: Vec<ScheduledFlight>,
}

impl RouteEdge {
    /// Create an edge with no published schedule.
    pub fn new(from: AirportCode, to: AirportCode, duration_hours: f64, price: u32) -> Self {
        Self {
            from,
            to,
            duration_hours,
            price,
            stops: 0,
            schedule: Vec::new(),
        }
    }

    /// Set the declared stop count.
    pub fn with_stops(mut self, stops: u32) -> Self {
        self.stops = stops;
        self
    }

    /// Attach a published schedule.
    pub fn with_schedule(mut self, schedule: Vec<ScheduledFlight>) -> Self {
        self.schedule = schedule;
        self
    }

    /// Whether this edge departs from `from` and arrives at `to`.
    pub fn connects(&self, from: &AirportCode, to: &AirportCode) -> bool {
        &self.from == from && &self.to == to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    #[test]
    fn frequency_daily_display() {
        let freq = Frequency::Daily;
        assert_eq!(freq.labels(), vec!["Daily"]);
        assert_eq!(freq.to_string(), "Daily");
    }

    #[test]
    fn frequency_days_display() {
        let freq = Frequency::Days(vec![Weekday::Mon, Weekday::Wed, Weekday::Fri, Weekday::Sun]);
        assert_eq!(freq.labels(), vec!["Mon", "Wed", "Fri", "Sun"]);
        assert_eq!(freq.to_string(), "Mon, Wed, Fri, Sun");
    }

    #[test]
    fn frequency_deserialize() {
        let daily: Frequency = serde_json::from_str(r#"["Daily"]"#).unwrap();
        assert_eq!(daily, Frequency::Daily);

        let days: Frequency = serde_json::from_str(r#"["Mon", "Wed"]"#).unwrap();
        assert_eq!(days, Frequency::Days(vec![Weekday::Mon, Weekday::Wed]));

        assert!(serde_json::from_str::<Frequency>(r#"[]"#).is_err());
        assert!(serde_json::from_str::<Frequency>(r#"["Someday"]"#).is_err());
    }

    #[test]
    fn route_edge_deserialize() {
        let json = r#"{
            "from": "DEL",
            "to": "BOM",
            "duration": 2.1,
            "price": 5500,
            "stops": 0,
            "schedule": [
                { "departure": "06:00", "arrival": "08:06", "frequency": ["Daily"] },
                { "departure": "14:30", "arrival": "16:36", "frequency": ["Mon", "Wed", "Fri", "Sun"] }
            ]
        }"#;

        let edge: RouteEdge = serde_json::from_str(json).unwrap();
        assert_eq!(edge.from, code("DEL"));
        assert_eq!(edge.to, code("BOM"));
        assert_eq!(edge.duration_hours, 2.1);
        assert_eq!(edge.price, 5500);
        assert_eq!(edge.stops, 0);
        assert_eq!(edge.schedule.len(), 2);
        assert_eq!(edge.schedule[1].frequency.to_string(), "Mon, Wed, Fri, Sun");
    }

    #[test]
    fn route_edge_defaults_stops_and_schedule() {
        let json = r#"{ "from": "BOM", "to": "DEL", "duration": 2.1, "price": 5500 }"#;
        let edge: RouteEdge = serde_json::from_str(json).unwrap();
        assert_eq!(edge.stops, 0);
        assert!(edge.schedule.is_empty());
    }

    #[test]
    fn connects() {
        let edge = RouteEdge::new(code("DEL"), code("BOM"), 2.1, 5500);
        assert!(edge.connects(&code("DEL"), &code("BOM")));
        assert!(!edge.connects(&code("BOM"), &code("DEL")));
    }
}
