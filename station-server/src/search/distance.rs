//! Damerau–Levenshtein edit distance.

/// Edit distance between two strings, counting insertions, deletions,
/// substitutions and transpositions of adjacent characters.
///
/// This is the optimal-string-alignment variant: a transposed pair cannot
/// be edited again afterwards. Lengths are measured in characters, not bytes.
///
/// # Examples
///
/// ```
/// use station_server::search::distance;
///
/// assert_eq!(distance("kitten", "sitting"), 3);
/// assert_eq!(distance("ab", "ba"), 1);
/// assert_eq!(distance("", "abc"), 3);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // table[i][j]: distance between the first j chars of `a` and the first i of `b`
    let mut table = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            let mut best = if b[i - 1] == a[j - 1] {
                table[i - 1][j - 1]
            } else {
                let substitute = table[i - 1][j - 1];
                let insert = table[i][j - 1];
                let delete = table[i - 1][j];
                substitute.min(insert).min(delete) + 1
            };

            if i > 1 && j > 1 && b[i - 1] == a[j - 2] && b[i - 2] == a[j - 1] {
                best = best.min(table[i - 2][j - 2] + 1);
            }

            table[i][j] = best;
        }
    }

    table[b.len()][a.len()]
}
