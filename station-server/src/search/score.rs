//! Match scoring for station names.
//!
//! Every comparison yields a [`MatchResult`]: a categorical [`MatchTier`]
//! plus a continuous score in `[0, 1]`. The tier always dominates; the score
//! only orders results within the same tier.

use std::cmp::Ordering;

use super::Searchable;
use super::distance::distance;
use super::normalize::{names_of, normalize};

/// Per-word score below which a multi-word query is treated as unmatched.
pub const MIN_WORD_SCORE: f64 = 0.3;

const EXACT_SCORE: f64 = 1.0;
const PREFIX_SCORE: f64 = 0.95;
const WORD_PREFIX_SCORE: f64 = 0.9;
const SUBSTRING_SCORE: f64 = 0.7;

/// Fuzzy matches are scaled into this share of the score range.
const FUZZY_WEIGHT: f64 = 0.6;
/// Share of fuzzy similarity granted for a matching first letter.
const FIRST_LETTER_BOOST: f64 = 0.2;
/// Characters of a name word compared beyond the query word's length.
const FUZZY_SLACK: usize = 2;
const MAX_EDITS: usize = 2;

/// Category of a match, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// The whole name (or word) equals the query.
    Exact,
    /// The name starts with the query.
    Prefix,
    /// Some word of the name starts with the query.
    WordPrefix,
    /// The query occurs inside the name.
    Substring,
    /// Within a small edit distance.
    Fuzzy,
    /// Not a match.
    NoMatch,
}

impl MatchTier {
    /// Numeric rank of the tier, 0 (best) to 5.
    pub fn rank(self) -> u8 {
        match self {
            MatchTier::Exact => 0,
            MatchTier::Prefix => 1,
            MatchTier::WordPrefix => 2,
            MatchTier::Substring => 3,
            MatchTier::Fuzzy => 4,
            MatchTier::NoMatch => 5,
        }
    }
}

/// How well a query matched a name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    /// Confidence in `[0, 1]`. Always zero for [`MatchTier::NoMatch`].
    pub score: f64,
    pub tier: MatchTier,
}

impl MatchResult {
    pub const EXACT: Self = Self::new(EXACT_SCORE, MatchTier::Exact);
    pub const PREFIX: Self = Self::new(PREFIX_SCORE, MatchTier::Prefix);
    pub const WORD_PREFIX: Self = Self::new(WORD_PREFIX_SCORE, MatchTier::WordPrefix);
    pub const SUBSTRING: Self = Self::new(SUBSTRING_SCORE, MatchTier::Substring);
    pub const NO_MATCH: Self = Self::new(0.0, MatchTier::NoMatch);

    const fn new(score: f64, tier: MatchTier) -> Self {
        Self { score, tier }
    }

    /// Order results best first: lower tier, then higher score.
    pub fn cmp_best_first(&self, other: &Self) -> Ordering {
        self.tier
            .cmp(&other.tier)
            .then_with(|| other.score.total_cmp(&self.score))
    }

    /// Whether `self` ranks strictly ahead of `other`.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.cmp_best_first(other) == Ordering::Less
    }

    fn best_of(self, other: Self) -> Self {
        if other.is_better_than(&self) {
            other
        } else {
            self
        }
    }
}

/// Score one normalized query word against one normalized name word.
///
/// Exact, prefix and substring hits are checked first. Anything else is
/// compared by edit distance against the start of the name word, trimmed to
/// the query length plus two characters so that long names are not
/// penalized for their tails. At most `min(2, len / 2)` edits are accepted.
pub fn score_word(query_word: &str, name_word: &str) -> MatchResult {
    if name_word == query_word {
        return MatchResult::EXACT;
    }
    if name_word.starts_with(query_word) {
        return MatchResult::PREFIX;
    }
    if name_word.contains(query_word) {
        return MatchResult::SUBSTRING;
    }

    let query_len = query_word.chars().count();
    let capped: String = name_word.chars().take(query_len + FUZZY_SLACK).collect();
    let capped_len = capped.chars().count();

    let edits = distance(query_word, &capped);
    let max_allowed = MAX_EDITS.min(query_len / 2);
    if edits > max_allowed {
        return MatchResult::NO_MATCH;
    }

    let longest = query_len.max(capped_len);
    let mut similarity = 1.0 - edits as f64 / longest as f64;

    let first_query = query_word.chars().next();
    if first_query.is_some() && first_query == capped.chars().next() {
        similarity = similarity * (1.0 - FIRST_LETTER_BOOST) + FIRST_LETTER_BOOST;
    }

    MatchResult::new(similarity * FUZZY_WEIGHT, MatchTier::Fuzzy)
}

/// Score a single-word query against a whole name.
///
/// Both inputs are normalized first.
pub fn score_name(query: &str, name: &str) -> MatchResult {
    score_normalized_name(&normalize(query), &normalize(name))
}

fn score_normalized_name(query: &str, name: &str) -> MatchResult {
    if name == query {
        return MatchResult::EXACT;
    }
    if name.starts_with(query) {
        return MatchResult::PREFIX;
    }

    if name.split_whitespace().any(|word| word.starts_with(query)) {
        return MatchResult::WORD_PREFIX;
    }
    if name.contains(query) {
        return MatchResult::SUBSTRING;
    }

    // Best word by raw score; the tier comes along with it.
    name.split_whitespace()
        .map(|word| score_word(query, word))
        .fold(MatchResult::NO_MATCH, |best, result| {
            if result.score > best.score {
                result
            } else {
                best
            }
        })
}

/// Score a multi-word query against a name, ignoring word order.
///
/// `query_words` must already be normalized. Every query word must find a
/// reasonable match somewhere in the name; the result is only as strong as
/// the weakest word: its score is the minimum and its tier the maximum over
/// the query words.
pub fn score_multi_word<W: AsRef<str>>(query_words: &[W], name: &str) -> MatchResult {
    score_normalized_multi_word(query_words, &normalize(name))
}

fn score_normalized_multi_word<W: AsRef<str>>(query_words: &[W], name: &str) -> MatchResult {
    if query_words.is_empty() {
        return MatchResult::NO_MATCH;
    }

    let name_words: Vec<&str> = name.split_whitespace().collect();
    let mut worst_score = EXACT_SCORE;
    let mut worst_tier = MatchTier::Exact;

    for query_word in query_words {
        let best = name_words
            .iter()
            .map(|name_word| score_word(query_word.as_ref(), name_word))
            .fold(MatchResult::NO_MATCH, MatchResult::best_of);

        if best.score < MIN_WORD_SCORE {
            return MatchResult::NO_MATCH;
        }

        worst_score = worst_score.min(best.score);
        worst_tier = worst_tier.max(best.tier);
    }

    MatchResult::new(worst_score, worst_tier)
}

/// Score a query against every searchable name of a station.
///
/// Single-word queries compare against each name as a whole. Queries of two
/// or more words are scored both as a phrase (so names typed in their
/// natural order keep exact and prefix precedence) and as a bag of words.
/// The best result over all names and both modes wins.
pub fn score_station<S: Searchable + ?Sized>(query: &str, station: &S) -> MatchResult {
    let normalized = normalize(query);
    let words: Vec<&str> = normalized.split_whitespace().collect();
    if words.is_empty() {
        return MatchResult::NO_MATCH;
    }
    let phrase = words.join(" ");

    names_of(station.display_name())
        .into_iter()
        .map(|name| {
            let name = normalize(name);
            let as_phrase = score_normalized_name(&phrase, &name);
            if words.len() == 1 {
                as_phrase
            } else {
                as_phrase.best_of(score_normalized_multi_word(&words, &name))
            }
        })
        .fold(MatchResult::NO_MATCH, MatchResult::best_of)
}
