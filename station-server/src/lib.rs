//! Station directory server.
//!
//! Serves the station list behind a live rail map and answers free-text
//! station searches with a tiered fuzzy matcher.

pub mod config;
pub mod search;
pub mod stations;
pub mod web;
