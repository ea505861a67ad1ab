//! Web layer for the station directory.
//!
//! Provides HTTP endpoints for listing, searching and looking up stations.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router, select_stations};
pub use state::AppState;
