//! Adjacency index over route edges.
//!
//! Groups edges by departure airport so the planner can look up the
//! outgoing edges of an airport without scanning the whole table. Edges
//! keep their table order within each group, which keeps search output
//! identical to a linear scan.

use std::collections::HashMap;

use crate::domain::{AirportCode, RouteEdge};

/// Outgoing edges keyed by departure airport.
#[derive(Debug, Clone, Default)]
pub struct RouteIndex<'a> {
    by_origin: HashMap<AirportCode, Vec<&'a RouteEdge>>,
    edge_count: usize,
}

impl<'a> RouteIndex<'a> {
    /// Build an index over a route table.
    pub fn new(routes: &'a [RouteEdge]) -> Self {
        let mut by_origin: HashMap<AirportCode, Vec<&'a RouteEdge>> = HashMap::new();
        for edge in routes {
            by_origin.entry(edge.from).or_default().push(edge);
        }

        Self {
            by_origin,
            edge_count: routes.len(),
        }
    }

    /// Edges departing from `from`, in table order.
    pub fn departures(&self, from: &AirportCode) -> &[&'a RouteEdge] {
        self.by_origin.get(from).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first edge from `from` to `to`, if any.
    pub fn direct(&self, from: &AirportCode, to: &AirportCode) -> Option<&'a RouteEdge> {
        self.departures(from)
            .iter()
            .find(|edge| &edge.to == to)
            .copied()
    }

    /// Total number of indexed edges.
    pub fn len(&self) -> usize {
        self.edge_count
    }

    /// Returns true if no edges were indexed.
    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}
