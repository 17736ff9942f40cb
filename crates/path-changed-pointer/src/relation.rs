use crate::util::parse_json_pointer;

/// Check if `ancestor` is a strict ancestor of `path`.
///
/// True iff the segments of `ancestor` are a proper prefix of the segments of
/// `path`. Segments compare by exact string equality, so `/ab` is not an
/// ancestor of `/abc`, and a path is never its own ancestor.
///
/// # Example
///
/// ```
/// use path_changed_pointer::{is_ancestor, parse_json_pointer};
///
/// let a = parse_json_pointer("/a/b");
/// assert!(is_ancestor(&[], &a));
/// assert!(is_ancestor(&parse_json_pointer("/a"), &a));
/// assert!(!is_ancestor(&a, &a));
/// assert!(!is_ancestor(&a, &parse_json_pointer("/a")));
/// ```
pub fn is_ancestor(ancestor: &[String], path: &[String]) -> bool {
    ancestor.len() < path.len() && ancestor.iter().zip(path).all(|(a, b)| a == b)
}

/// Pointer-string form of [`is_ancestor`].
pub fn is_ancestor_pointer(ancestor: &str, path: &str) -> bool {
    is_ancestor(&parse_json_pointer(ancestor), &parse_json_pointer(path))
}
