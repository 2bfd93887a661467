//! Web layer for the flight route finder.
//!
//! Provides HTTP endpoints for listing airports and searching routes.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
