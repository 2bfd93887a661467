//! Askama templates for the web frontend.

use askama::Template;

use crate::catalog::Catalog;
use crate::domain::{Airport, AirportCode, FlightPath, PathSegment, ScheduledFlight, format_hhmm};
use crate::suggest::Suggestion;

/// Number of airports shown on the landing page.
const POPULAR_COUNT: usize = 6;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with search form and popular destinations.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub airports: Vec<AirportOptionView>,
    pub popular: Vec<AirportCardView>,
}

impl IndexTemplate {
    /// Build the landing page for a catalog.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            airports: catalog
                .airports()
                .iter()
                .map(AirportOptionView::from_airport)
                .collect(),
            popular: catalog
                .airports()
                .iter()
                .take(POPULAR_COUNT)
                .map(AirportCardView::from_airport)
                .collect(),
        }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route search results fragment.
#[derive(Template)]
#[template(path = "route_results.html")]
pub struct RouteResultsTemplate {
    pub heading: String,
    pub routes: Vec<RouteCardView>,
}

impl RouteResultsTemplate {
    /// Build the results fragment for ranked paths.
    pub fn new(paths: &[FlightPath], catalog: &Catalog) -> Self {
        Self {
            heading: results_heading(paths.len()),
            routes: paths
                .iter()
                .map(|p| RouteCardView::from_path(p, catalog))
                .collect(),
        }
    }
}

/// Suggested routes fragment.
#[derive(Template)]
#[template(path = "suggestions.html")]
pub struct SuggestionsTemplate {
    pub suggestions: Vec<SuggestionView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Entry in the airport pickers.
#[derive(Debug, Clone)]
pub struct AirportOptionView {
    pub code: String,
    pub label: String,
}

impl AirportOptionView {
    pub fn from_airport(airport: &Airport) -> Self {
        Self {
            code: airport.code.to_string(),
            label: airport.option_label(),
        }
    }
}

/// Landing page destination card.
#[derive(Debug, Clone)]
pub struct AirportCardView {
    pub city: String,
    pub name: String,
    pub region: String,
}

impl AirportCardView {
    pub fn from_airport(airport: &Airport) -> Self {
        Self {
            city: airport.city.clone(),
            name: airport.name.clone(),
            region: airport.region.clone(),
        }
    }
}

/// Endpoint airport details on a route card.
#[derive(Debug, Clone)]
pub struct AirportDetailView {
    pub name: String,
    pub terminals: String,
}

impl AirportDetailView {
    fn lookup(code: &AirportCode, catalog: &Catalog) -> Self {
        match catalog.airport(code) {
            Some(airport) => Self {
                name: airport.name.clone(),
                terminals: airport.terminals.to_string(),
            },
            None => Self {
                name: code.to_string(),
                terminals: "-".to_string(),
            },
        }
    }
}

/// Route card view model.
#[derive(Debug, Clone)]
pub struct RouteCardView {
    pub title: String,
    pub price: String,
    pub total_duration: String,
    pub badge: String,
    /// No stops at all, including technical stops on a direct edge.
    pub is_nonstop: bool,
    /// JSON array of `[lat, lng]` pairs for the map.
    pub map_points: String,
    pub departure: AirportDetailView,
    pub arrival: AirportDetailView,
    pub segments: Vec<SegmentView>,
    /// Timetable of the direct route between the endpoints, if one exists.
    pub schedule: Vec<ScheduleView>,
}

impl RouteCardView {
    /// Create from a domain FlightPath.
    pub fn from_path(path: &FlightPath, catalog: &Catalog) -> Self {
        let origin = path.origin();
        let destination = path.destination();

        let points: Vec<[f64; 2]> = path
            .airport_codes()
            .iter()
            .filter_map(|code| catalog.airport(code))
            .map(|a| [a.coordinates.lat, a.coordinates.lng])
            .collect();
        let map_points = serde_json::to_string(&points).unwrap_or_else(|_| "[]".to_string());

        // Only the nonstop timetable is shown, even on one-stop cards.
        let schedule = catalog
            .route(&origin, &destination)
            .map(|r| r.schedule.iter().map(ScheduleView::from_flight).collect())
            .unwrap_or_default();

        Self {
            title: format!(
                "{} → {}",
                airport_label(&origin, catalog),
                airport_label(&destination, catalog)
            ),
            price: format!("₹{}", path.total_price()),
            total_duration: format_hours(path.total_duration_hours()),
            badge: stops_badge(path.total_stops()),
            is_nonstop: path.total_stops() == 0,
            map_points,
            departure: AirportDetailView::lookup(&origin, catalog),
            arrival: AirportDetailView::lookup(&destination, catalog),
            segments: path
                .segments()
                .iter()
                .map(|s| SegmentView::from_segment(s, catalog))
                .collect(),
            schedule,
        }
    }
}

/// Segment view model.
#[derive(Debug, Clone)]
pub struct SegmentView {
    pub from: String,
    pub to: String,
    pub duration: String,
    pub price: String,
    pub is_connection: bool,
}

impl SegmentView {
    pub fn from_segment(segment: &PathSegment, catalog: &Catalog) -> Self {
        let route = &segment.route;
        Self {
            from: airport_label(&route.from, catalog),
            to: airport_label(&route.to, catalog),
            duration: format_hours(route.duration_hours),
            price: format!("₹{}", route.price),
            is_connection: segment.is_connection,
        }
    }
}

/// Timetable row.
#[derive(Debug, Clone)]
pub struct ScheduleView {
    pub departure: String,
    pub arrival: String,
    pub frequency: String,
}

impl ScheduleView {
    pub fn from_flight(flight: &ScheduledFlight) -> Self {
        Self {
            departure: format_hhmm(flight.departure),
            arrival: format_hhmm(flight.arrival),
            frequency: flight.frequency.to_string(),
        }
    }
}

/// Suggestion view model.
#[derive(Debug, Clone)]
pub struct SuggestionView {
    pub from: String,
    pub to: String,
    pub from_label: String,
    pub to_label: String,
    pub reason: String,
}

impl SuggestionView {
    pub fn from_suggestion(suggestion: &Suggestion, catalog: &Catalog) -> Self {
        Self {
            from: suggestion.from.to_string(),
            to: suggestion.to.to_string(),
            from_label: airport_label(&suggestion.from, catalog),
            to_label: airport_label(&suggestion.to, catalog),
            reason: suggestion.reason.clone(),
        }
    }
}

/// "City, Region (CODE)", or the bare code for airports not in the catalog.
fn airport_label(code: &AirportCode, catalog: &Catalog) -> String {
    catalog
        .airport(code)
        .map(Airport::display_label)
        .unwrap_or_else(|| code.to_string())
}

/// Hours with at most two decimals and no trailing zeros, e.g. "6.1h".
pub fn format_hours(hours: f64) -> String {
    let fixed = format!("{hours:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}h")
}

fn stops_badge(stops: u32) -> String {
    if stops == 0 {
        "Direct flight".to_string()
    } else {
        format!("{stops} stop")
    }
}

fn results_heading(count: usize) -> String {
    match count {
        0 => "No routes found".to_string(),
        1 => "Found 1 route".to_string(),
        n => format!("Found {n} routes"),
    }
}
