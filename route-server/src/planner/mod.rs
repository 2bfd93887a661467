//! Path finder for direct and one-stop flights.
//!
//! This module implements the route search: given two airport codes and a
//! route table, enumerate every direct edge and every two-edge chain between
//! them, aggregate duration, price and stops, and rank by total duration.
//!
//! Searches are synchronous and stateless, so any number of callers can
//! search the same catalog concurrently.

mod config;
mod rank;
mod search;

pub use config::{CONNECTION_BUFFER_HOURS, SearchConfig, TieBreak};
pub use rank::rank_paths;
pub use search::{PathFinder, SearchResult, find_paths};
