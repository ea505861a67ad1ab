//! Station record type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::search::Searchable;

/// A station in the directory.
///
/// Only `id`, `name` and `importance` are interpreted. Any other fields in
/// the source data (coordinates, country, operator codes, ...) are kept in
/// `extra` and serialized back out unchanged.
///
/// # Examples
///
/// ```
/// use station_server::stations::Station;
///
/// let json = r#"{"id": "8503000", "name": "Zürich HB", "importance": 1, "country": "CH"}"#;
/// let station: Station = serde_json::from_str(json).unwrap();
///
/// assert_eq!(station.name, "Zürich HB");
/// assert_eq!(station.extra["country"], "CH");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Stable identifier
    pub id: String,

    /// Display name, e.g. "Biel/Bienne"
    pub name: String,

    /// Prominence rank; lower is more important
    #[serde(default = "least_important")]
    pub importance: u32,

    /// Fields passed through without interpretation
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn least_important() -> u32 {
    u32::MAX
}

impl Station {
    /// Create a station with no extra fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, importance: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            importance,
            extra: Map::new(),
        }
    }
}

impl Searchable for Station {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn importance(&self) -> u32 {
        self.importance
    }
}
