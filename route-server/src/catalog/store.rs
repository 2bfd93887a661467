//! The airport and route catalog.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Airport, AirportCode, RouteEdge};

use super::error::CatalogError;
use super::index::RouteIndex;

/// Catalog bundled with the server.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// On-disk catalog layout.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    airports: Vec<Airport>,
    routes: Vec<RouteEdge>,
}

/// An immutable set of airports and the routes between them.
///
/// A catalog is an ordinary value: build one and pass it to whatever needs
/// it. Construction validates the data, so the planner can assume
/// well-formed edges.
#[derive(Debug, Clone)]
pub struct Catalog {
    airports: Vec<Airport>,
    routes: Vec<RouteEdge>,
}

impl Catalog {
    /// Create a catalog, validating airports and routes.
    pub fn new(airports: Vec<Airport>, routes: Vec<RouteEdge>) -> Result<Self, CatalogError> {
        validate(&airports, &routes)?;
        Ok(Self { airports, routes })
    }

    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.airports, file.routes)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            airports = catalog.airports.len(),
            routes = catalog.routes.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// The catalog shipped with the server.
    ///
    /// Parsed afresh on every call; callers own the result.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Serialize the catalog back to JSON.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let file = CatalogFile {
            airports: self.airports.clone(),
            routes: self.routes.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// All airports, in catalog order.
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    /// All routes, in catalog order.
    pub fn routes(&self) -> &[RouteEdge] {
        &self.routes
    }

    /// Look up an airport by code.
    pub fn airport(&self, code: &AirportCode) -> Option<&Airport> {
        self.airports.iter().find(|a| &a.code == code)
    }

    /// Whether an airport with this code exists.
    pub fn contains_airport(&self, code: &AirportCode) -> bool {
        self.airport(code).is_some()
    }

    /// The route from `from` to `to`, if one exists.
    pub fn route(&self, from: &AirportCode, to: &AirportCode) -> Option<&RouteEdge> {
        self.routes.iter().find(|r| r.connects(from, to))
    }

    /// Build an adjacency index over the routes.
    pub fn index(&self) -> RouteIndex<'_> {
        RouteIndex::new(&self.routes)
    }
}

/// Check catalog consistency.
fn validate(airports: &[Airport], routes: &[RouteEdge]) -> Result<(), CatalogError> {
    let mut codes = HashSet::new();
    for airport in airports {
        if !codes.insert(airport.code) {
            return Err(CatalogError::DuplicateAirport(airport.code));
        }
    }

    let mut pairs = HashSet::new();
    for route in routes {
        if route.from == route.to {
            return Err(CatalogError::SelfLoop(route.from));
        }

        for endpoint in [route.from, route.to] {
            if !codes.contains(&endpoint) {
                return Err(CatalogError::UnknownAirport {
                    from: route.from,
                    to: route.to,
                    missing: endpoint,
                });
            }
        }

        if !route.duration_hours.is_finite() || route.duration_hours < 0.0 {
            return Err(CatalogError::InvalidDuration {
                from: route.from,
                to: route.to,
                duration: route.duration_hours,
            });
        }

        if !pairs.insert((route.from, route.to)) {
            return Err(CatalogError::DuplicateRoute(route.from, route.to));
        }
    }

    Ok(())
}
