//! Server configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::search::SearchConfig;

/// Default station file location.
const DEFAULT_STATIONS_FILE: &str = "stations.json";

/// Default listen address.
const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000);

/// How often to reload the station file (24 hours).
const DEFAULT_RELOAD_SECS: u64 = 24 * 60 * 60;

/// Error returned when an environment variable has an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the station server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Path to the station JSON file
    pub stations_path: PathBuf,

    /// How often to reload the station file; `None` disables reloading
    pub reload_interval: Option<Duration>,

    /// Search request limits
    pub search: SearchConfig,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `STATIONS_FILE` | `stations.json` |
    /// | `BIND_ADDR` | `127.0.0.1:3000` |
    /// | `STATION_RELOAD_SECS` | `86400` (`0` disables reloading) |
    /// | `SEARCH_DEFAULT_LIMIT` | `10` |
    /// | `SEARCH_MAX_LIMIT` | `50` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through a variable lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SearchConfig::default();

        let bind_addr = parse_var(&lookup, "BIND_ADDR")?.unwrap_or(DEFAULT_BIND_ADDR);

        let stations_path = lookup("STATIONS_FILE")
            .filter(|p| !p.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STATIONS_FILE), PathBuf::from);

        let reload_secs = parse_var(&lookup, "STATION_RELOAD_SECS")?.unwrap_or(DEFAULT_RELOAD_SECS);
        let reload_interval = (reload_secs > 0).then(|| Duration::from_secs(reload_secs));

        let search = defaults
            .clone()
            .with_default_limit(
                parse_var(&lookup, "SEARCH_DEFAULT_LIMIT")?.unwrap_or(defaults.default_limit),
            )
            .with_max_limit(parse_var(&lookup, "SEARCH_MAX_LIMIT")?.unwrap_or(defaults.max_limit));

        Ok(Self {
            bind_addr,
            stations_path,
            reload_interval,
            search,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            stations_path: PathBuf::from(DEFAULT_STATIONS_FILE),
            reload_interval: Some(Duration::from_secs(DEFAULT_RELOAD_SECS)),
            search: SearchConfig::default(),
        }
    }
}

/// Parse an optional variable, treating an empty value as unset.
fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(var).filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        let default = ServerConfig::default();

        assert_eq!(config.bind_addr, default.bind_addr);
        assert_eq!(config.stations_path, PathBuf::from("stations.json"));
        assert_eq!(config.reload_interval, Some(Duration::from_secs(86400)));
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("STATIONS_FILE", "/data/stations.json"),
            ("STATION_RELOAD_SECS", "600"),
            ("SEARCH_DEFAULT_LIMIT", "5"),
            ("SEARCH_MAX_LIMIT", "25"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.stations_path, PathBuf::from("/data/stations.json"));
        assert_eq!(config.reload_interval, Some(Duration::from_secs(600)));
        assert_eq!(config.search.default_limit, 5);
        assert_eq!(config.search.max_limit, 25);
    }

    #[test]
    fn zero_reload_disables_reloading() {
        let config = ServerConfig::from_lookup(lookup(&[("STATION_RELOAD_SECS", "0")])).unwrap();
        assert_eq!(config.reload_interval, None);
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("STATIONS_FILE", ""),
            ("SEARCH_MAX_LIMIT", "  "),
        ]))
        .unwrap();

        assert_eq!(config.stations_path, PathBuf::from("stations.json"));
        assert_eq!(config.search.max_limit, 50);
    }

    #[test]
    fn invalid_values_are_errors() {
        let err = ServerConfig::from_lookup(lookup(&[("SEARCH_MAX_LIMIT", "lots")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { var: "SEARCH_MAX_LIMIT", ref value, .. } if value == "lots"
        ));

        let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "BIND_ADDR", .. }));

        let err =
            ServerConfig::from_lookup(lookup(&[("STATION_RELOAD_SECS", "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "STATION_RELOAD_SECS", .. }));
    }
}
