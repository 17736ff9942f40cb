//! JSON equality utilities.
//!
//! Provides deep equality comparison functions for JSON values, including a
//! variant over optional values where `None` stands for an absent location.

mod deep_equal;

pub use deep_equal::{deep_equal, deep_equal_opt, number_equal};
