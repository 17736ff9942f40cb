//! JSON Pointer (RFC 6901) helpers used by the change detector.
//!
//! Three small collaborators live here:
//!
//! - syntax: [`is_json_pointer`] / [`validate_json_pointer`] and
//!   [`parse_json_pointer`] to split a pointer into unescaped segments;
//! - lookup: [`get`] follows segments through a [`serde_json::Value`] and
//!   returns `None` (absent) when any step does not resolve;
//! - relation: [`is_ancestor`] decides whether one path is a strict prefix
//!   of another.
//!
//! # Example
//!
//! ```
//! use path_changed_pointer::{get, is_ancestor, is_json_pointer, parse_json_pointer};
//! use serde_json::json;
//!
//! assert!(is_json_pointer("/contacts/0/emails"));
//! assert!(!is_json_pointer("contacts"));
//!
//! let doc = json!({"contacts": [{"emails": ["a@b.c"]}]});
//! let path = parse_json_pointer("/contacts/0/emails/0");
//! assert_eq!(get(&doc, &path), Some(&json!("a@b.c")));
//!
//! assert!(is_ancestor(&parse_json_pointer("/contacts"), &path));
//! ```

mod get;
mod relation;
mod util;
pub mod validate;

pub use get::{get, get_by_pointer};
pub use relation::{is_ancestor, is_ancestor_pointer};
pub use util::{
    escape_component, format_json_pointer, is_valid_index, parse_json_pointer,
    unescape_component,
};
pub use validate::{is_json_pointer, validate_json_pointer, ValidationError};
