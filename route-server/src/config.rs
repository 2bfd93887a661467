//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::suggest::SuggestConfig;

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default directory for static assets.
const DEFAULT_STATIC_DIR: &str = "static";

/// Error returned for unusable configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {name}: {value}")]
pub struct ConfigError {
    name: &'static str,
    value: String,
}

/// Runtime configuration for the route server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Catalog JSON file. `None` uses the built-in catalog.
    pub catalog_path: Option<PathBuf>,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Suggestion generator settings. `None` disables suggestions.
    pub suggest: Option<SuggestConfig>,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    ///
    /// - `ROUTE_SERVER_ADDR`: listen address (default `127.0.0.1:3000`)
    /// - `ROUTE_CATALOG_PATH`: catalog JSON file (default: built-in catalog)
    /// - `ROUTE_STATIC_DIR`: static asset directory (default `static`)
    /// - `OPENAI_API_KEY`: enables suggestions when set
    /// - `OPENAI_BASE_URL`, `OPENAI_MODEL`: suggestion API overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let addr_str = get("ROUTE_SERVER_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_str.parse().map_err(|_| ConfigError {
            name: "ROUTE_SERVER_ADDR",
            value: addr_str.clone(),
        })?;

        let catalog_path = get("ROUTE_CATALOG_PATH").map(PathBuf::from);

        let static_dir = get("ROUTE_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let suggest = get("OPENAI_API_KEY").map(|key| {
            let mut config = SuggestConfig::new(key);
            if let Some(url) = get("OPENAI_BASE_URL") {
                config = config.with_base_url(url);
            }
            if let Some(model) = get("OPENAI_MODEL") {
                config = config.with_model(model);
            }
            config
        });

        Ok(Self {
            addr,
            catalog_path,
            static_dir,
            suggest,
        })
    }
}
