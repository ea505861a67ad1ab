//! Top-level station search and ordering.

use std::cmp::Ordering;

use tracing::debug;

use super::Searchable;
use super::score::{MatchResult, score_station};

/// Aggregate score a station must exceed to appear in search results.
pub const MIN_SCORE: f64 = 0.3;

/// A station returned by [`rank`], with the match that placed it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedStation<'a, S> {
    pub station: &'a S,
    /// `None` when the query was blank and stations were ordered by
    /// importance alone.
    pub result: Option<MatchResult>,
}

/// Search stations by free-text query, best match first.
///
/// See [`rank`] for the ordering. Only the station records are returned.
pub fn search<'a, S: Searchable>(stations: &'a [S], query: &str, limit: usize) -> Vec<&'a S> {
    rank(stations, query, limit)
        .into_iter()
        .map(|ranked| ranked.station)
        .collect()
}

/// Rank stations against a query, keeping the match result of each.
///
/// A blank query returns the `limit` most important stations (stable on
/// ties). Otherwise every station is scored, those scoring at or below
/// [`MIN_SCORE`] are dropped, and the rest are sorted by:
/// 1. Match tier (stronger category first)
/// 2. Importance (lower value first)
/// 3. Score (higher first)
pub fn rank<'a, S: Searchable>(
    stations: &'a [S],
    query: &str,
    limit: usize,
) -> Vec<RankedStation<'a, S>> {
    if limit == 0 {
        return Vec::new();
    }

    if query.trim().is_empty() {
        let mut by_importance: Vec<&S> = stations.iter().collect();
        by_importance.sort_by_key(|s| s.importance());
        return by_importance
            .into_iter()
            .take(limit)
            .map(|station| RankedStation {
                station,
                result: None,
            })
            .collect();
    }

    let mut scored: Vec<(&S, MatchResult)> = stations
        .iter()
        .map(|station| (station, score_station(query, station)))
        .filter(|(_, result)| result.score > MIN_SCORE)
        .collect();

    scored.sort_by(|(a, a_result), (b, b_result)| compare_matches(*a, a_result, *b, b_result));
    scored.truncate(limit);

    debug!(
        query,
        candidates = stations.len(),
        results = scored.len(),
        "station search"
    );

    scored
        .into_iter()
        .map(|(station, result)| RankedStation {
            station,
            result: Some(result),
        })
        .collect()
}

fn compare_matches<S: Searchable>(
    a: &S,
    a_result: &MatchResult,
    b: &S,
    b_result: &MatchResult,
) -> Ordering {
    a_result
        .tier
        .cmp(&b_result.tier)
        .then_with(|| a.importance().cmp(&b.importance()))
        .then_with(|| b_result.score.total_cmp(&a_result.score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MatchTier;
    use crate::stations::Station;

    fn station(name: &str, importance: u32) -> Station {
        Station::new(name.to_lowercase().replace(' ', "-"), name, importance)
    }

    fn names<'a>(results: &[&'a Station]) -> Vec<&'a str> {
        results.iter().map(|s| s.name.as_str()).collect()
    }

    fn italy() -> Vec<Station> {
        vec![
            station("Milano Centrale", 1),
            station("Milano Rogoredo", 3),
            station("Roma Termini", 1),
        ]
    }

    #[test]
    fn milano_prefix_ordered_by_importance() {
        let stations = italy();
        let results = search(&stations, "milano", 10);
        assert_eq!(names(&results), vec!["Milano Centrale", "Milano Rogoredo"]);
    }

    #[test]
    fn importance_breaks_tier_ties_before_score() {
        let stations = vec![station("Bernina Suot", 5), station("Bern", 9)];
        // both are prefix matches; importance wins even though neither is exact
        let results = search(&stations, "ber", 10);
        assert_eq!(names(&results), vec!["Bernina Suot", "Bern"]);
    }

    #[test]
    fn tier_beats_importance() {
        let stations = vec![
            station("Oberbern", 1),
            station("Bern Wankdorf", 50),
            station("Bern", 100),
        ];
        let results = search(&stations, "bern", 10);
        assert_eq!(names(&results), vec!["Bern", "Bern Wankdorf", "Oberbern"]);
    }

    #[test]
    fn score_breaks_remaining_ties() {
        let stations = vec![station("Lugamo", 1), station("Lugano", 1)];
        // both fuzzy, equal importance; the closer spelling scores higher
        let results = rank(&stations, "lugnao", 10);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].station.name, "Lugano");
        let first = results[0].result.unwrap();
        let second = results[1].result.unwrap();
        assert_eq!(first.tier, MatchTier::Fuzzy);
        assert_eq!(second.tier, MatchTier::Fuzzy);
        assert!(first.score > second.score);
    }

    #[test]
    fn exact_match_precedes_substring_and_fuzzy() {
        let stations = vec![
            station("Sankt Gallen", 1),
            station("Gallen", 10),
            station("Gallenkirch", 2),
        ];
        let results = search(&stations, "gallen", 10);
        assert_eq!(results[0].name, "Gallen");
    }

    #[test]
    fn blank_query_orders_by_importance_stably() {
        let stations = vec![
            station("C", 2),
            station("A", 1),
            station("D", 2),
            station("B", 1),
        ];
        let results = search(&stations, "", 3);
        assert_eq!(names(&results), vec!["A", "B", "C"]);

        let results = rank(&stations, "   ", 10);
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.result.is_none()));
    }

    #[test]
    fn zero_limit_is_empty() {
        let stations = italy();
        assert!(search(&stations, "milano", 0).is_empty());
        assert!(search(&stations, "", 0).is_empty());
    }

    #[test]
    fn empty_station_list() {
        let stations: Vec<Station> = Vec::new();
        assert!(search(&stations, "milano", 10).is_empty());
        assert!(search(&stations, "", 10).is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        let stations = italy();
        assert!(search(&stations, "zurich", 10).is_empty());
    }

    #[test]
    fn limit_truncates() {
        let stations = italy();
        let results = search(&stations, "milano", 1);
        assert_eq!(names(&results), vec!["Milano Centrale"]);
    }

    #[test]
    fn bilingual_names_match_either_language() {
        let stations = vec![station("Biel/Bienne", 4), station("Bienenberg", 1)];
        let results = rank(&stations, "bienne", 10);
        assert_eq!(results[0].station.name, "Biel/Bienne");
        assert!(results[0].result.unwrap().tier <= MatchTier::Prefix);

        let results = search(&stations, "biel", 10);
        assert_eq!(names(&results), vec!["Biel/Bienne"]);
    }

    #[test]
    fn reordered_words_still_match() {
        let stations = italy();
        let results = search(&stations, "centrale milano", 10);
        assert_eq!(names(&results), vec!["Milano Centrale"]);
    }

    #[test]
    fn diacritics_ignored_in_query_and_names() {
        let stations = vec![station("Zürich HB", 1), station("Genève", 1)];
        assert_eq!(names(&search(&stations, "zurich", 10)), vec!["Zürich HB"]);
        assert_eq!(names(&search(&stations, "GENEVE", 10)), vec!["Genève"]);
    }

    #[test]
    fn score_at_threshold_is_dropped() {
        // two edits over four letters with different first letters scores exactly 0.3
        let stations = vec![station("Xbcy", 1)];
        assert_eq!(score_station("abcd", &stations[0]).score, MIN_SCORE);
        assert!(search(&stations, "abcd", 10).is_empty());

        let stations = vec![station("Xbcy Milano", 1)];
        assert_eq!(score_station("abcd milano", &stations[0]).score, MIN_SCORE);
        assert!(search(&stations, "abcd milano", 10).is_empty());
    }

    #[test]
    fn score_just_above_threshold_is_kept() {
        // same edits, shared first letter: boosted above the threshold
        let stations = vec![station("Abcy", 1)];
        let results = rank(&stations, "abxd", 10);
        assert_eq!(results.len(), 1);
        assert!(results[0].result.unwrap().score > MIN_SCORE);
    }

    #[test]
    fn repeated_searches_agree() {
        let stations = italy();
        let first = search(&stations, "mil", 10);
        let second = search(&stations, "mil", 10);
        assert_eq!(first, second);
    }
}
