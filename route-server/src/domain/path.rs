//! Flight path types.
//!
//! A `FlightPath` is one itinerary from an origin to a destination: either a
//! single direct edge, or two edges chained through an intermediate airport.
//! Aggregates are computed once at construction.

use super::{AirportCode, DomainError, RouteEdge};

/// One traversed edge within a path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub route: RouteEdge,
    /// True for the second and later legs of a path.
    pub is_connection: bool,
}

/// A ranked search result.
///
/// Invariants, enforced by the constructors:
/// - there is at least one segment
/// - each segment departs from the airport the previous one arrives at
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPath {
    segments: Vec<PathSegment>,
    total_duration_hours: f64,
    total_price: u64,
    total_stops: u32,
}

impl FlightPath {
    /// Build a single-segment path from a direct edge.
    ///
    /// The stop count is the edge's own declared `stops`, so a catalog entry
    /// with a technical stop is reported as such.
    pub fn direct(edge: &RouteEdge) -> Self {
        Self {
            segments: vec![PathSegment {
                route: edge.clone(),
                is_connection: false,
            }],
            total_duration_hours: edge.duration_hours,
            total_price: u64::from(edge.price),
            total_stops: edge.stops,
        }
    }

    /// Build a two-segment path with a connection at `first.to`.
    ///
    /// Total duration is both flight times plus `buffer_hours` of layover.
    /// The stop count is always 1; the edges' own stop counts are ignored.
    pub fn one_stop(
        first: &RouteEdge,
        second: &RouteEdge,
        buffer_hours: f64,
    ) -> Result<Self, DomainError> {
        if first.to != second.from {
            return Err(DomainError::BrokenChain(first.to, second.from));
        }

        Ok(Self {
            segments: vec![
                PathSegment {
                    route: first.clone(),
                    is_connection: false,
                },
                PathSegment {
                    route: second.clone(),
                    is_connection: true,
                },
            ],
            total_duration_hours: first.duration_hours + second.duration_hours + buffer_hours,
            total_price: u64::from(first.price) + u64::from(second.price),
            total_stops: 1,
        })
    }

    /// Returns the segments in travel order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Total duration in hours, including any connection buffer.
    pub fn total_duration_hours(&self) -> f64 {
        self.total_duration_hours
    }

    /// Total price across all segments.
    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// Number of stops reported for this path.
    pub fn total_stops(&self) -> u32 {
        self.total_stops
    }

    /// Where the path starts.
    pub fn origin(&self) -> AirportCode {
        // Constructors guarantee at least one segment.
        self.segments[0].route.from
    }

    /// Where the path ends.
    pub fn destination(&self) -> AirportCode {
        self.segments[self.segments.len() - 1].route.to
    }

    /// True when the path is a single catalog edge.
    pub fn is_direct(&self) -> bool {
        self.segments.len() == 1
    }

    /// Airports where the traveller changes planes.
    pub fn intermediate_stops(&self) -> Vec<AirportCode> {
        self.segments[1..].iter().map(|s| s.route.from).collect()
    }

    /// Every airport visited in order: origin, any connection, destination.
    ///
    /// This is what the map needs to draw the path.
    pub fn airport_codes(&self) -> Vec<AirportCode> {
        let mut codes = Vec::with_capacity(self.segments.len() + 1);
        codes.push(self.origin());
        codes.extend(self.segments.iter().map(|s| s.route.to));
        codes
    }

    /// Check that consecutive segments share their connecting airport.
    pub fn validate_chain(&self) -> Result<(), DomainError> {
        if self.segments.is_empty() {
            return Err(DomainError::EmptyPath);
        }
        for pair in self.segments.windows(2) {
            if pair[0].route.to != pair[1].route.from {
                return Err(DomainError::BrokenChain(pair[0].route.to, pair[1].route.from));
            }
        }
        Ok(())
    }
}
