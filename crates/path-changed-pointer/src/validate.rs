//! Syntax validation for JSON Pointer strings.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Non-empty pointer that does not start with `/`.
    #[error("POINTER_INVALID")]
    PointerInvalid,
    /// A `~` not followed by `0` or `1`, at the given byte offset.
    #[error("INVALID_ESCAPE at {0}")]
    InvalidEscape(usize),
}

/// Validate a JSON Pointer string.
///
/// # Errors
///
/// - [`ValidationError::PointerInvalid`] if the pointer is non-empty and does
///   not start with `/`;
/// - [`ValidationError::InvalidEscape`] if a `~` is not followed by `0` or `1`.
///
/// # Example
///
/// ```
/// use path_changed_pointer::{validate_json_pointer, ValidationError};
///
/// validate_json_pointer("").unwrap();
/// validate_json_pointer("/foo/b~1r").unwrap();
/// assert_eq!(validate_json_pointer("foo"), Err(ValidationError::PointerInvalid));
/// assert_eq!(validate_json_pointer("/a~2"), Err(ValidationError::InvalidEscape(2)));
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), ValidationError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(ValidationError::PointerInvalid);
    }
    let bytes = pointer.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'~' && !matches!(bytes.get(i + 1), Some(b'0') | Some(b'1')) {
            return Err(ValidationError::InvalidEscape(i));
        }
    }
    Ok(())
}

/// Returns `true` if `pointer` is a well-formed JSON Pointer.
pub fn is_json_pointer(pointer: &str) -> bool {
    validate_json_pointer(pointer).is_ok()
}
