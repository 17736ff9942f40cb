//! Core logic of the `path-changed` binary.
//!
//! Input is one JSON object read from stdin:
//!
//! ```json
//! {"doc": {...}, "changes": [{"path": "/a", "old_value": 1}], "options": {"handle_array_paths": false}}
//! ```
//!
//! Every key is optional; `doc` defaults to `{}`.

use std::io::Read;

use serde::Deserialize;
use serde_json::Value;

use crate::change::{Change, Options};
use crate::detector::ChangeDetector;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct Input {
    #[serde(default = "empty_object")]
    doc: Value,
    #[serde(default)]
    changes: Vec<Change>,
    #[serde(default)]
    options: Options,
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

/// Parse `json` and answer whether `pointer` changed.
///
/// `array_paths` (the `--array-paths` flag) turns wildcard handling on even
/// if the input's options leave it off.
pub fn evaluate_input(json: &str, pointer: &str, array_paths: bool) -> Result<bool> {
    let input: Input = serde_json::from_str(json)?;
    let mut options = input.options;
    if array_paths {
        options.handle_array_paths = true;
    }
    ChangeDetector::new(options).has_changed(&input.doc, &input.changes, pointer)
}

/// Read the whole input document, which must be UTF-8.
pub fn read_input<R: Read>(mut reader: R) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Command line arguments: `<pointer> [--array-paths]`, flag in any position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub pointer: String,
    pub array_paths: bool,
}

impl Args {
    /// `None` when the pointer argument is missing.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Option<Self> {
        let mut pointer = None;
        let mut array_paths = false;
        for arg in args {
            if arg == "--array-paths" {
                array_paths = true;
            } else if pointer.is_none() {
                pointer = Some(arg);
            }
        }
        pointer.map(|pointer| Args {
            pointer,
            array_paths,
        })
    }
}
