//! Direct and one-stop path search.
//!
//! Given an origin and destination, finds every itinerary that is either a
//! single route edge or two edges chained through one intermediate airport,
//! then ranks them by total duration.

use tracing::{debug, trace, warn};

use crate::catalog::RouteIndex;
use crate::domain::{AirportCode, FlightPath, RouteEdge};

use super::config::SearchConfig;
use super::rank::rank_paths;

/// Result of a path search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Found paths, ranked best-first.
    pub paths: Vec<FlightPath>,

    /// Number of route edges looked at during the search.
    pub edges_examined: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            paths: Vec::new(),
            edges_examined: 0,
        }
    }
}

/// Find all direct and one-stop paths between two airports.
///
/// Codes are compared exactly; callers normalize user input beforehand.
/// Unknown codes and unreachable pairs both produce an empty list, as does
/// asking for a path from an airport to itself.
///
/// # Examples
///
/// ```
/// use route_server::domain::{AirportCode, RouteEdge};
/// use route_server::planner::find_paths;
///
/// let del = AirportCode::parse("DEL").unwrap();
/// let bom = AirportCode::parse("BOM").unwrap();
/// let routes = vec![RouteEdge::new(del, bom, 2.1, 5500)];
///
/// let paths = find_paths(&del, &bom, &routes);
/// assert_eq!(paths.len(), 1);
/// assert_eq!(paths[0].total_price(), 5500);
/// ```
pub fn find_paths(
    origin: &AirportCode,
    destination: &AirportCode,
    routes: &[RouteEdge],
) -> Vec<FlightPath> {
    let index = RouteIndex::new(routes);
    let config = SearchConfig::default();
    PathFinder::new(&index, &config)
        .search(origin, destination)
        .paths
}

/// Path finder over an indexed route table.
///
/// Holds no state between searches; each call recomputes from the index.
pub struct PathFinder<'a> {
    index: &'a RouteIndex<'a>,
    config: &'a SearchConfig,
}

impl<'a> PathFinder<'a> {
    /// Create a new path finder.
    pub fn new(index: &'a RouteIndex<'a>, config: &'a SearchConfig) -> Self {
        Self { index, config }
    }

    /// Search for paths from `origin` to `destination`.
    pub fn search(&self, origin: &AirportCode, destination: &AirportCode) -> SearchResult {
        if origin == destination {
            debug!(%origin, "origin equals destination, nothing to search");
            return SearchResult::empty();
        }

        let mut paths = Vec::new();
        let mut edges_examined = 0;

        let departures = self.index.departures(origin);
        edges_examined += departures.len();

        // Only the first direct edge counts
        if let Some(edge) = self.index.direct(origin, destination) {
            trace!(from = %edge.from, to = %edge.to, "direct edge");
            paths.push(FlightPath::direct(edge));
        }
        let direct_count = paths.len();

        for first in departures {
            let onward = self.index.departures(&first.to);
            edges_examined += onward.len();

            for second in onward.iter().filter(|e| &e.to == destination) {
                if self.config.exclude_origin_revisits
                    && revisits_endpoint(first, origin, destination)
                {
                    trace!(via = %first.to, "skipping path that revisits an endpoint");
                    continue;
                }

                // Onward edges are looked up by `first.to`, so the chain holds.
                debug_assert_eq!(first.to, second.from);
                let Some(path) = chain(first, second, self.config.connection_buffer_hours) else {
                    continue;
                };
                trace!(
                    via = %first.to,
                    duration = path.total_duration_hours(),
                    "one-stop path"
                );
                paths.push(path);
            }
        }

        debug!(
            %origin,
            %destination,
            direct = direct_count,
            one_stop = paths.len() - direct_count,
            edges_examined,
            "path search complete"
        );

        let mut paths = rank_paths(paths, self.config.tie_break);
        if let Some(max) = self.config.max_results {
            paths.truncate(max);
        }

        SearchResult {
            paths,
            edges_examined,
        }
    }
}

/// Join two legs into a one-stop path, logging legs that do not connect.
fn chain(first: &RouteEdge, second: &RouteEdge, buffer_hours: f64) -> Option<FlightPath> {
    match FlightPath::one_stop(first, second, buffer_hours) {
        Ok(path) => Some(path),
        Err(e) => {
            warn!(error = %e, "dropping one-stop candidate");
            None
        }
    }
}

/// Whether a one-stop path connects at one of its own endpoints.
fn revisits_endpoint(first: &RouteEdge, origin: &AirportCode, destination: &AirportCode) -> bool {
    &first.to == origin || &first.to == destination
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
