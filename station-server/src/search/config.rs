//! Search limits for the station endpoint.

/// Configuration for station search requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of results returned when the request gives no limit.
    pub default_limit: usize,

    /// Upper bound on the number of results a request may ask for.
    pub max_limit: usize,

    /// Longest accepted query, in characters.
    pub max_query_chars: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(default_limit: usize, max_limit: usize, max_query_chars: usize) -> Self {
        Self {
            default_limit,
            max_limit,
            max_query_chars,
        }
    }

    /// Set the default result count.
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Set the maximum result count.
    pub fn with_max_limit(mut self, limit: usize) -> Self {
        self.max_limit = limit;
        self
    }

    /// Resolve a requested limit: the default when absent, never above the maximum.
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }

    /// Whether a query is short enough to be searched.
    pub fn accepts_query(&self, query: &str) -> bool {
        query.chars().count() <= self.max_query_chars
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 50,
            max_query_chars: 100,
        }
    }
}
