//! Change records and detector options.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single edit previously applied to a document.
///
/// `old_value` is the value that lived at `path` before the edit. `None`
/// means the location did not exist, which is distinct from a stored `null`
/// (`Some(Value::Null)`). In JSON form a missing `old_value` key maps to
/// `None` and an explicit `null` maps to `Some(Value::Null)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub path: String,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub old_value: Option<Value>,
}

impl Change {
    /// An edit that replaced `old_value` at `path`.
    pub fn new(path: impl Into<String>, old_value: Value) -> Self {
        Self {
            path: path.into(),
            old_value: Some(old_value),
        }
    }

    /// An edit that created `path`, which held nothing before.
    pub fn created(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            old_value: None,
        }
    }
}

// `Option<Value>` would otherwise turn an explicit `null` into `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Options for [`crate::ChangeDetector`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Treat a `-` segment as "any index of this array" when relating paths.
    pub handle_array_paths: bool,
}

impl Options {
    pub fn with_array_paths(mut self, enabled: bool) -> Self {
        self.handle_array_paths = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_change_missing_old_value_is_absent() {
        let change: Change = serde_json::from_value(json!({"path": "/theundefined"})).unwrap();
        assert_eq!(change, Change::created("/theundefined"));
    }

    #[test]
    fn test_change_null_old_value_is_present() {
        let change: Change =
            serde_json::from_value(json!({"path": "/a", "old_value": null})).unwrap();
        assert_eq!(change.old_value, Some(Value::Null));
    }

    #[test]
    fn test_change_serialization_skips_absent() {
        assert_eq!(
            serde_json::to_value(Change::created("/a")).unwrap(),
            json!({"path": "/a"})
        );
        assert_eq!(
            serde_json::to_value(Change::new("/a", json!(null))).unwrap(),
            json!({"path": "/a", "old_value": null})
        );
    }

    #[test]
    fn test_options_default_and_builder() {
        assert!(!Options::default().handle_array_paths);
        assert!(Options::default().with_array_paths(true).handle_array_paths);

        let opts: Options = serde_json::from_value(json!({})).unwrap();
        assert_eq!(opts, Options::default());
        let opts: Options = serde_json::from_value(json!({"handle_array_paths": true})).unwrap();
        assert!(opts.handle_array_paths);
    }
}
