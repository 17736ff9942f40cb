//! Pluggable pointer collaborators.
//!
//! The detector needs four things from a pointer implementation: syntax
//! validation, decomposition into segments, safe lookup and the strict
//! ancestor relation. [`Rfc6901`] wires them to `path-changed-pointer`;
//! tests or callers with a different path dialect can supply their own.

use serde_json::Value;

pub trait PointerStrategy {
    /// Whether `pointer` is well-formed.
    fn is_pointer(&self, pointer: &str) -> bool;

    /// Split a (valid) pointer into unescaped segments.
    fn segments(&self, pointer: &str) -> Vec<String>;

    /// The value at `path` inside `value`, or `None` if it does not resolve.
    fn lookup<'a>(&self, value: &'a Value, path: &[String]) -> Option<&'a Value>;

    /// Whether `ancestor` is a strict ancestor of `path`.
    fn is_ancestor(&self, ancestor: &[String], path: &[String]) -> bool;
}

/// JSON Pointer as defined by RFC 6901.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc6901;

impl PointerStrategy for Rfc6901 {
    fn is_pointer(&self, pointer: &str) -> bool {
        path_changed_pointer::is_json_pointer(pointer)
    }

    fn segments(&self, pointer: &str) -> Vec<String> {
        path_changed_pointer::parse_json_pointer(pointer)
    }

    fn lookup<'a>(&self, value: &'a Value, path: &[String]) -> Option<&'a Value> {
        path_changed_pointer::get(value, path)
    }

    fn is_ancestor(&self, ancestor: &[String], path: &[String]) -> bool {
        path_changed_pointer::is_ancestor(ancestor, path)
    }
}

impl<S: PointerStrategy + ?Sized> PointerStrategy for &S {
    fn is_pointer(&self, pointer: &str) -> bool {
        (**self).is_pointer(pointer)
    }

    fn segments(&self, pointer: &str) -> Vec<String> {
        (**self).segments(pointer)
    }

    fn lookup<'a>(&self, value: &'a Value, path: &[String]) -> Option<&'a Value> {
        (**self).lookup(value, path)
    }

    fn is_ancestor(&self, ancestor: &[String], path: &[String]) -> bool {
        (**self).is_ancestor(ancestor, path)
    }
}
