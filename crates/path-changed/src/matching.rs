//! Segment-wise path comparison with optional array wildcards.
//!
//! With wildcards enabled, a `-` segment on either side matches any
//! canonical array index on the other side (`/contacts/-/emails` matches
//! `/contacts/3/emails`). Without them `-` is an ordinary segment.

use path_changed_pointer::is_valid_index;

/// The segment standing for "any index of this array".
pub const WILDCARD: &str = "-";

pub fn segment_matches(a: &str, b: &str, wildcard: bool) -> bool {
    a == b
        || (wildcard
            && ((a == WILDCARD && is_valid_index(b)) || (b == WILDCARD && is_valid_index(a))))
}

/// Same length, every segment matching.
pub fn paths_match(a: &[String], b: &[String], wildcard: bool) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| segment_matches(x, y, wildcard))
}

/// `ancestor` is strictly shorter than `path` and matches its prefix.
pub fn is_ancestor_match(ancestor: &[String], path: &[String], wildcard: bool) -> bool {
    ancestor.len() < path.len()
        && ancestor
            .iter()
            .zip(path)
            .all(|(x, y)| segment_matches(x, y, wildcard))
}

/// Resolve a query prefix against the change path it matched, taking the
/// concrete index wherever the query holds a wildcard.
///
/// Where both sides hold `-` the segment stays `-`; looking it up in an array
/// yields absent, so such a change reads as "no current value".
pub fn concrete_prefix(query: &[String], change: &[String]) -> Vec<String> {
    query
        .iter()
        .zip(change)
        .map(|(q, c)| if q == WILDCARD { c.clone() } else { q.clone() })
        .collect()
}
