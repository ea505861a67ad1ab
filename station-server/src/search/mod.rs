//! Fuzzy station search and ranking.
//!
//! Given a free-text query and a list of stations, finds the stations whose
//! names best match and orders them by a tiered relevance policy:
//! exact, prefix, word-prefix, substring and finally edit-distance matches,
//! with station importance breaking ties within a tier.
//!
//! Everything here is pure and synchronous. No state survives between
//! calls, so searches can run concurrently from any number of handlers.

mod config;
mod distance;
mod normalize;
mod rank;
mod score;

pub use config::SearchConfig;
pub use distance::distance;
pub use normalize::{names_of, normalize};
pub use rank::{MIN_SCORE, RankedStation, rank, search};
pub use score::{
    MIN_WORD_SCORE, MatchResult, MatchTier, score_multi_word, score_name, score_station,
    score_word,
};

/// A record that can be searched by name.
///
/// Only the display name and importance are read; any other data the
/// record carries passes through untouched.
pub trait Searchable {
    /// Human-readable name, possibly bilingual with a `/` separator.
    fn display_name(&self) -> &str;

    /// Prominence rank. Lower is more important.
    fn importance(&self) -> u32;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn display_name(&self) -> &str {
        (**self).display_name()
    }

    fn importance(&self) -> u32 {
        (**self).importance()
    }
}
