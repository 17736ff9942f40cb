//! The change predicate.
//!
//! Evidence is checked in a fixed order and the first positive answer wins:
//!
//! 1. a change recorded exactly at the query path;
//! 2. a change at an ancestor whose old subtree holds, at the query's
//!    relative position, a value different from the current one;
//! 3. a change at a descendant whose old value differs from the current
//!    value at that descendant.
//!
//! Anything else is "unchanged".

use serde_json::Value;
use tracing::{debug, trace};

use path_changed_util::deep_equal_opt;

use crate::change::{Change, Options};
use crate::error::{ChangeError, Result};
use crate::matching::{concrete_prefix, is_ancestor_match, paths_match, WILDCARD};
use crate::strategy::{PointerStrategy, Rfc6901};

/// Answers "did the value at this path change?" for one snapshot and one
/// change log.
#[derive(Debug, Clone, Default)]
pub struct ChangeDetector<S = Rfc6901> {
    strategy: S,
    options: Options,
}

impl ChangeDetector<Rfc6901> {
    pub fn new(options: Options) -> Self {
        Self::with_strategy(Rfc6901, options)
    }
}

impl<S: PointerStrategy> ChangeDetector<S> {
    pub fn with_strategy(strategy: S, options: Options) -> Self {
        Self { strategy, options }
    }

    /// Whether the value at `path` in `doc` differs from what it was before
    /// `changes` were applied.
    ///
    /// `doc` is the document after the edits. Change paths are trusted; only
    /// the query `path` is validated.
    ///
    /// # Errors
    ///
    /// [`ChangeError::InvalidPointer`] if `path` is not a valid pointer.
    pub fn has_changed(&self, doc: &Value, changes: &[Change], path: &str) -> Result<bool> {
        if !self.strategy.is_pointer(path) {
            return Err(ChangeError::InvalidPointer(path.to_string()));
        }
        let query = self.strategy.segments(path);
        let changes: Vec<(&Change, Vec<String>)> = changes
            .iter()
            .map(|change| (change, self.strategy.segments(&change.path)))
            .collect();

        if let Some((change, _)) = changes
            .iter()
            .find(|(_, change_path)| self.same_path(change_path, &query))
        {
            debug!(path, change = %change.path, "change recorded at path");
            return Ok(true);
        }

        if let Some((change, _)) = changes.iter().find(|(change, change_path)| {
            self.is_ancestor(change_path, &query)
                && self.ancestor_differs(doc, change, change_path, &query)
        }) {
            debug!(path, change = %change.path, "ancestor change altered path");
            return Ok(true);
        }

        if let Some((change, _)) = changes.iter().find(|(change, change_path)| {
            self.is_ancestor(&query, change_path)
                && self.descendant_differs(doc, change, change_path)
        }) {
            debug!(path, change = %change.path, "descendant change altered path");
            return Ok(true);
        }

        trace!(path, changes = changes.len(), "no change affects path");
        Ok(false)
    }

    fn wildcard(&self) -> bool {
        self.options.handle_array_paths
    }

    fn same_path(&self, a: &[String], b: &[String]) -> bool {
        paths_match(a, b, self.wildcard())
    }

    fn is_ancestor(&self, ancestor: &[String], path: &[String]) -> bool {
        self.strategy.is_ancestor(ancestor, path)
            || (self.wildcard() && is_ancestor_match(ancestor, path, true))
    }

    fn ancestor_differs(
        &self,
        doc: &Value,
        change: &Change,
        change_path: &[String],
        query: &[String],
    ) -> bool {
        if change_path.len() > query.len() {
            return false;
        }
        let (prefix, subpath) = query.split_at(change_path.len());
        let current = self
            .strategy
            .lookup(doc, &concrete_prefix(prefix, change_path));
        self.any_differs(change.old_value.as_ref(), current, subpath)
    }

    fn descendant_differs(&self, doc: &Value, change: &Change, change_path: &[String]) -> bool {
        let current = self.strategy.lookup(doc, change_path);
        let equal = deep_equal_opt(change.old_value.as_ref(), current);
        trace!(change = %change.path, equal, "compared descendant");
        !equal
    }

    /// Walk `rest` through the old and the current value side by side and
    /// compare what is found at the end. Under wildcard mode a `-` step over
    /// an array fans out to every index present on either side.
    fn any_differs(&self, old: Option<&Value>, current: Option<&Value>, rest: &[String]) -> bool {
        let Some((step, tail)) = rest.split_first() else {
            let equal = deep_equal_opt(old, current);
            trace!(equal, "compared reconstructed value");
            return !equal;
        };

        if self.wildcard() && step == WILDCARD {
            let len = array_len(old).max(array_len(current));
            if len > 0 || is_array(old) || is_array(current) {
                return (0..len)
                    .any(|i| self.any_differs(element(old, i), element(current, i), tail));
            }
        }

        let step = std::slice::from_ref(step);
        self.any_differs(
            old.and_then(|v| self.strategy.lookup(v, step)),
            current.and_then(|v| self.strategy.lookup(v, step)),
            tail,
        )
    }
}

fn is_array(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Array(_)))
}

fn array_len(value: Option<&Value>) -> usize {
    match value {
        Some(Value::Array(arr)) => arr.len(),
        _ => 0,
    }
}

fn element(value: Option<&Value>, index: usize) -> Option<&Value> {
    match value {
        Some(Value::Array(arr)) => arr.get(index),
        _ => None,
    }
}

/// Convenience wrapper around [`ChangeDetector`] with the RFC 6901 strategy.
///
/// # Example
///
/// ```
/// use path_changed::{has_changed, Change, Options};
/// use serde_json::json;
///
/// let doc = json!({"theundefined": "some value"});
/// let changes = [Change::created("/theundefined")];
/// assert!(has_changed(&doc, &changes, "/theundefined", &Options::default()).unwrap());
/// ```
pub fn has_changed(
    doc: &Value,
    changes: &[Change],
    path: &str,
    options: &Options,
) -> Result<bool> {
    ChangeDetector::new(*options).has_changed(doc, changes, path)
}
