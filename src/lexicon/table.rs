//! TSV table parsing.
//!
//! Tables are tab-separated, one entry per line. Blank lines and lines
//! starting with `#` are ignored. Rows with the wrong column count are
//! skipped with a warning rather than failing the load; the caller's
//! completeness checks decide whether the feature still works.

use tracing::warn;

/// Parse a two-column table into (key, value) rows.
pub(super) fn parse_pairs(text: &str) -> Vec<(String, String)> {
    rows(text)
        .filter_map(|(line_no, cols)| match cols.as_slice() {
            [key, value] => Some(((*key).to_string(), (*value).to_string())),
            _ => {
                warn!(line = line_no, "skipping row: expected 2 columns");
                None
            }
        })
        .collect()
}

/// Parse a three-column table into (key, a, b) rows. A missing third column
/// reuses the second, so two-column rows are valid shorthand for entries
/// whose singular and plural forms coincide.
pub(super) fn parse_triples(text: &str) -> Vec<(String, String, String)> {
    rows(text)
        .filter_map(|(line_no, cols)| match cols.as_slice() {
            [key, a, b] => Some(((*key).to_string(), (*a).to_string(), (*b).to_string())),
            [key, a] => Some(((*key).to_string(), (*a).to_string(), (*a).to_string())),
            _ => {
                warn!(line = line_no, "skipping row: expected 2 or 3 columns");
                None
            }
        })
        .collect()
}

fn rows(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines().enumerate().filter_map(|(i, line)| {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            return None;
        }
        Some((i + 1, line.split('\t').collect()))
    })
}
