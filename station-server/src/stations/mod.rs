//! Station records and the station store.
//!
//! Stations are read from a flat JSON file at startup and can be reloaded
//! in the background. Searches run against an immutable snapshot.

mod error;
mod station;
mod store;

pub use error::StationError;
pub use station::Station;
pub use store::StationStore;
