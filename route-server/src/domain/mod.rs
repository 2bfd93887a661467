//! Domain types for the flight route finder.
//!
//! This module contains the core data model: airport codes, airports,
//! route edges with their schedules, and the flight paths the planner
//! produces. Types enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod airport;
mod code;
mod error;
mod path;
mod route;
mod time;

pub use airport::{Airport, Coordinates, DaySchedule};
pub use code::{AirportCode, InvalidAirportCode};
pub use error::DomainError;
pub use path::{FlightPath, PathSegment};
pub use route::{Frequency, RouteEdge, ScheduledFlight};
pub use time::{TimeError, format_hhmm, parse_hhmm};
