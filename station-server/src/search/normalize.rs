//! Text normalization and searchable-name extraction.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a string for comparison: strip diacritics and lower-case.
///
/// Characters are decomposed (NFD) so that accented letters split into a
/// base letter plus combining marks, and the marks are dropped. The result
/// is then lower-cased. Any input is accepted, including the empty string.
///
/// # Examples
///
/// ```
/// use station_server::search::normalize;
///
/// assert_eq!(normalize("Zürich"), "zurich");
/// assert_eq!(normalize("GENÈVE"), "geneve");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Names a station can be found by.
///
/// The display name always comes first. Bilingual names written with a
/// slash (`"Biel/Bienne"`) additionally yield each trimmed segment, left to
/// right. Empty segments are skipped.
pub fn names_of(display_name: &str) -> Vec<&str> {
    let mut names = vec![display_name];
    if display_name.contains('/') {
        names.extend(
            display_name
                .split('/')
                .map(str::trim)
                .filter(|segment| !segment.is_empty()),
        );
    }
    names
}
