//! Station store backed by a flat JSON file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::error::StationError;
use super::station::Station;

/// Accepted layouts of the station file.
#[derive(Deserialize)]
#[serde(untagged)]
enum StationFile {
    /// `[{...}, {...}]`
    List(Vec<Station>),
    /// `{"stations": [{...}, {...}]}`
    Wrapped { stations: Vec<Station> },
}

impl StationFile {
    fn into_stations(self) -> Vec<Station> {
        match self {
            StationFile::List(stations) | StationFile::Wrapped { stations } => stations,
        }
    }
}

/// Thread-safe station directory.
///
/// Readers take a snapshot (`Arc<Vec<Station>>`) and work on it without
/// holding the lock, so a reload never blocks an in-flight search.
#[derive(Clone)]
pub struct StationStore {
    inner: Arc<RwLock<Arc<Vec<Station>>>>,
    path: Option<PathBuf>,
}

impl StationStore {
    /// Load the store from a JSON file.
    ///
    /// Fails if the file cannot be read, is not valid station JSON, or
    /// contains duplicate ids.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, StationError> {
        let path = path.into();
        let stations = read_stations(&path).await?;
        info!(path = %path.display(), count = stations.len(), "loaded stations");

        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(stations))),
            path: Some(path),
        })
    }

    /// Create a store from stations already in memory.
    ///
    /// Such a store cannot be reloaded.
    pub fn from_stations(stations: Vec<Station>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(stations))),
            path: None,
        }
    }

    /// The current station list.
    pub async fn snapshot(&self) -> Arc<Vec<Station>> {
        let guard = self.inner.read().await;
        Arc::clone(&guard)
    }

    /// Look up a station by id.
    pub async fn get(&self, id: &str) -> Option<Station> {
        let snapshot = self.snapshot().await;
        snapshot.iter().find(|s| s.id == id).cloned()
    }

    /// Get the number of stations in the store.
    pub async fn len(&self) -> usize {
        self.snapshot().await.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.snapshot().await.is_empty()
    }

    /// Re-read the station file.
    ///
    /// On success, replaces the current list. On failure, the existing
    /// list is preserved and the error is returned.
    pub async fn reload(&self) -> Result<usize, StationError> {
        let path = self.path.as_ref().ok_or(StationError::NoBackingFile)?;
        let stations = read_stations(path).await?;
        let count = stations.len();

        let mut guard = self.inner.write().await;
        *guard = Arc::new(stations);

        Ok(count)
    }
}

async fn read_stations(path: &Path) -> Result<Vec<Station>, StationError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StationError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    parse_stations(path, &contents)
}

/// Parse the station file contents and check ids are unique.
fn parse_stations(path: &Path, contents: &str) -> Result<Vec<Station>, StationError> {
    let stations = serde_json::from_str::<StationFile>(contents)
        .map_err(|source| StationError::Json {
            path: path.to_path_buf(),
            source,
        })?
        .into_stations();

    let mut seen = HashSet::with_capacity(stations.len());
    for station in &stations {
        if !seen.insert(station.id.as_str()) {
            return Err(StationError::DuplicateId(station.id.clone()));
        }
    }

    debug!(count = stations.len(), "parsed station file");
    Ok(stations)
}
