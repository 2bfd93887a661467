//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Airport, FlightPath, PathSegment, ScheduledFlight, format_hhmm};
use crate::suggest::Suggestion;

/// Request to search for paths.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Origin airport code
    pub from: String,

    /// Destination airport code
    pub to: String,
}

/// Response for path search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Origin code, normalized
    pub from: String,

    /// Destination code, normalized
    pub to: String,

    /// Paths, best first
    pub paths: Vec<FlightPathResult>,
}

/// A path option.
#[derive(Debug, Serialize)]
pub struct FlightPathResult {
    /// Path segments in travel order
    pub segments: Vec<SegmentResult>,

    /// Airports visited, in order
    pub airports: Vec<String>,

    /// Total duration in hours, including connection time
    pub total_duration_hours: f64,

    /// Total price
    pub total_price: u64,

    /// Number of stops
    pub total_stops: u32,
}

impl FlightPathResult {
    /// Create from a domain FlightPath.
    pub fn from_path(path: &FlightPath) -> Self {
        Self {
            segments: path.segments().iter().map(SegmentResult::from_segment).collect(),
            airports: path
                .airport_codes()
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
            total_duration_hours: path.total_duration_hours(),
            total_price: path.total_price(),
            total_stops: path.total_stops(),
        }
    }
}

/// A segment of a path.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub from: String,
    pub to: String,
    pub duration_hours: f64,
    pub price: u32,
    pub stops: u32,
    pub is_connection: bool,
    pub schedule: Vec<ScheduleResult>,
}

impl SegmentResult {
    /// Create from a domain PathSegment.
    pub fn from_segment(segment: &PathSegment) -> Self {
        let route = &segment.route;
        Self {
            from: route.from.as_str().to_string(),
            to: route.to.as_str().to_string(),
            duration_hours: route.duration_hours,
            price: route.price,
            stops: route.stops,
            is_connection: segment.is_connection,
            schedule: route.schedule.iter().map(ScheduleResult::from_flight).collect(),
        }
    }
}

/// A published departure.
#[derive(Debug, Serialize)]
pub struct ScheduleResult {
    /// Departure time (HH:MM)
    pub departure: String,

    /// Arrival time (HH:MM)
    pub arrival: String,

    /// Operating days, e.g. `["Daily"]`
    pub frequency: Vec<String>,
}

impl ScheduleResult {
    /// Create from a domain ScheduledFlight.
    pub fn from_flight(flight: &ScheduledFlight) -> Self {
        Self {
            departure: format_hhmm(flight.departure),
            arrival: format_hhmm(flight.arrival),
            frequency: flight.frequency.labels(),
        }
    }
}

/// Response listing catalog airports.
#[derive(Debug, Serialize)]
pub struct AirportsResponse {
    pub airports: Vec<Airport>,
}

/// Response listing route suggestions.
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
