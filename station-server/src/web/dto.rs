//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::stations::Station;

/// Query parameters for `GET /stations`.
#[derive(Debug, Default, Deserialize)]
pub struct StationListRequest {
    /// Free-text search; absent means "all stations"
    pub q: Option<String>,

    /// Maximum number of results when searching
    pub limit: Option<usize>,
}

/// Response for `GET /stations`.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// Matching stations, best first when searching
    pub stations: Vec<Station>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
