//! path-changed-util - helpers shared by the change detector.
//!
//! Currently this is the structural equality used to decide whether a value
//! recorded before an edit differs from the value observable now.

pub mod json_equal;

pub use json_equal::{deep_equal, deep_equal_opt, number_equal};
