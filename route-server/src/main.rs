use std::error::Error;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use route_server::catalog::Catalog;
use route_server::config::ServerConfig;
use route_server::planner::SearchConfig;
use route_server::suggest::{CachedSuggester, ChatSuggester};
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("route_server=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    info!(
        airports = catalog.airports().len(),
        routes = catalog.routes().len(),
        "catalog loaded"
    );

    let codes = catalog.airports().iter().map(|a| a.code).collect();
    let mut state = AppState::new(catalog, SearchConfig::default());

    match config.suggest {
        Some(suggest_config) => {
            let chat = ChatSuggester::new(suggest_config, codes)?;
            state = state.with_suggester(CachedSuggester::new(chat));
            info!("route suggestions enabled");
        }
        None => warn!("OPENAI_API_KEY not set, route suggestions disabled"),
    }

    let app = create_router(state, &config.static_dir);

    info!("Flight route finder listening on http://{}", config.addr);
    info!("  GET /                 - Search page");
    info!("  GET /health           - Health check");
    info!("  GET /api/airports     - Airport list");
    info!("  GET /search?from=&to= - Route search");
    info!("  GET /api/suggestions  - Route suggestions");

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
