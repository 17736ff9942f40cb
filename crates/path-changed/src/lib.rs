//! Decide whether the value observable at a JSON Pointer actually changed.
//!
//! Edits are recorded as [`Change`] records at the paths that were written
//! directly, each carrying the value that lived there before the edit. A
//! query path can be affected by a change at the same path, at an ancestor
//! (the old subtree contains the old value of the query path) or at a
//! descendant (an edit below it). A write of an equal value is not a change.
//!
//! # Example
//!
//! ```
//! use path_changed::{has_changed, Change, Options};
//! use serde_json::json;
//!
//! let doc = json!({"contacts": [{"emails": ["new", "same"]}]});
//! let changes = vec![Change::new("/contacts/0/emails", json!(["old", "same"]))];
//!
//! let opts = Options::default();
//! assert!(has_changed(&doc, &changes, "/contacts/0/emails/0", &opts).unwrap());
//! assert!(!has_changed(&doc, &changes, "/contacts/0/emails/1", &opts).unwrap());
//! assert!(has_changed(&doc, &changes, "/contacts", &opts).unwrap());
//! assert!(has_changed(&doc, &changes, "not a pointer", &opts).is_err());
//! ```

pub mod change;
pub mod cli;
pub mod detector;
pub mod error;
pub mod matching;
pub mod strategy;

pub use change::{Change, Options};
pub use detector::{has_changed, ChangeDetector};
pub use error::{ChangeError, Result};
pub use strategy::{PointerStrategy, Rfc6901};
