//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use std::path::Path;
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use crate::domain::AirportCode;
use crate::planner::PathFinder;
use crate::suggest::SuggestError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/airports", get(list_airports))
        .route("/api/suggestions", get(suggestions))
        .route("/search", get(search))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(
        IndexTemplate::from_catalog(&state.catalog)
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// All catalog airports.
async fn list_airports(State(state): State<AppState>) -> Json<AirportsResponse> {
    Json(AirportsResponse {
        airports: state.catalog.airports().to_vec(),
    })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn parse_code(raw: &str, which: &str) -> Result<AirportCode, AppError> {
    AirportCode::parse_normalized(raw).map_err(|_| AppError::BadRequest {
        message: format!("Invalid {which} airport code: {raw}"),
    })
}

/// Search for direct and one-stop paths between two airports.
async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<SearchRequest>,
) -> Result<Response, AppError> {
    let from = parse_code(&req.from, "origin")?;
    let to = parse_code(&req.to, "destination")?;

    let index = state.catalog.index();
    let result = PathFinder::new(&index, &state.config).search(&from, &to);
    debug!(
        %from,
        %to,
        paths = result.paths.len(),
        edges_examined = result.edges_examined,
        "search complete"
    );

    if accepts_html(&headers) {
        let template = RouteResultsTemplate::new(&result.paths, &state.catalog);
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let paths = result.paths.iter().map(FlightPathResult::from_path).collect();

        Ok(Json(SearchResponse {
            from: from.to_string(),
            to: to.to_string(),
            paths,
        })
        .into_response())
    }
}

/// Suggested routes from the configured generator.
async fn suggestions(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, AppError> {
    let suggester = state.suggester.as_ref().ok_or_else(|| AppError::NotFound {
        message: "Route suggestions are not configured".to_string(),
    })?;

    let suggestions = suggester.suggest().await?;

    if accepts_html(&headers) {
        let template = SuggestionsTemplate {
            suggestions: suggestions
                .iter()
                .map(|s| SuggestionView::from_suggestion(s, &state.catalog))
                .collect(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(SuggestionsResponse { suggestions }).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<SuggestError> for AppError {
    fn from(e: SuggestError) -> Self {
        AppError::BadGateway {
            message: format!("Suggestion service failed: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::planner::SearchConfig;
    use crate::suggest::{StaticSuggester, Suggester, Suggestion};
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use futures::future::BoxFuture;
    use tower::ServiceExt;

    struct FailingSuggester;

    impl Suggester for FailingSuggester {
        fn suggest(&self) -> BoxFuture<'_, Result<Vec<Suggestion>, SuggestError>> {
            Box::pin(async { Err(SuggestError::Unauthorized) })
        }
    }

    fn app(state: AppState) -> Router {
        create_router(state, "static")
    }

    fn builtin_state() -> AppState {
        AppState::new(Catalog::builtin().unwrap(), SearchConfig::default())
    }

    async fn fetch(router: Router, uri: &str, accept: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .uri(uri)
            .header(header::ACCEPT, accept)
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_ok() {
        let (status, body) = fetch(app(builtin_state()), "/health", "*/*").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn index_lists_airports() {
        let (status, body) = fetch(app(builtin_state()), "/", "text/html").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Popular Destinations"));
        assert!(body.contains("New Delhi (DEL) - Delhi"));
    }

    #[tokio::test]
    async fn airports_json() {
        let (status, body) = fetch(app(builtin_state()), "/api/airports", "application/json").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["airports"][0]["code"], "DEL");
    }

    #[tokio::test]
    async fn search_json_is_ranked() {
        let (status, body) = fetch(app(builtin_state()), "/search?from=del&to=blr", "application/json").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["from"], "DEL");
        assert_eq!(json["to"], "BLR");

        let paths = json["paths"].as_array().unwrap();
        assert!(!paths.is_empty());
        assert_eq!(paths[0]["total_stops"], 0);

        let durations: Vec<f64> = paths
            .iter()
            .map(|p| p["total_duration_hours"].as_f64().unwrap())
            .collect();
        assert!(durations.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn search_html_fragment() {
        let (status, body) = fetch(app(builtin_state()), "/search?from=DEL&to=BOM", "text/html").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Found"));
        assert!(body.contains("Direct flight"));
        assert!(!body.contains("<html"));
    }

    #[tokio::test]
    async fn search_unknown_airport_is_empty() {
        let (status, body) = fetch(app(builtin_state()), "/search?from=DEL&to=ZZZ", "text/html").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No routes found"));
    }

    #[tokio::test]
    async fn search_rejects_malformed_code() {
        let (status, body) = fetch(app(builtin_state()), "/search?from=D-L&to=BOM", "application/json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "Invalid origin airport code: D-L");
    }

    #[tokio::test]
    async fn suggestions_not_configured() {
        let (status, _) = fetch(app(builtin_state()), "/api/suggestions", "application/json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn suggestions_from_static_list() {
        let state = builtin_state().with_suggester(StaticSuggester::new(vec![Suggestion {
            from: AirportCode::parse("DEL").unwrap(),
            to: AirportCode::parse("GOI").unwrap(),
            reason: "Beaches".to_string(),
        }]));

        let (status, body) = fetch(app(state.clone()), "/api/suggestions", "application/json").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["suggestions"][0]["to"], "GOI");

        let (status, body) = fetch(app(state), "/api/suggestions", "text/html").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("data-to=\"GOI\""));
        assert!(body.contains("Beaches"));
    }

    #[tokio::test]
    async fn suggestions_failure_is_bad_gateway() {
        let state = builtin_state().with_suggester(FailingSuggester);
        let (status, _) = fetch(app(state), "/api/suggestions", "application/json").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
