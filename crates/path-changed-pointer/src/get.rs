use serde_json::Value;

use crate::util::{is_valid_index, parse_json_pointer};

/// Get a value from a JSON document by path.
///
/// Returns `None` when the path does not resolve: a missing key, an index
/// out of bounds or not a decimal index, or a step into a scalar. A stored
/// `null` is returned as `Some(&Value::Null)`, so callers can tell it apart
/// from an absent location.
///
/// # Example
///
/// ```
/// use path_changed_pointer::get;
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": [1, null]}});
/// let path = |p: &[&str]| p.iter().map(|s| s.to_string()).collect::<Vec<_>>();
///
/// assert_eq!(get(&doc, &path(&["foo", "bar", "0"])), Some(&json!(1)));
/// assert_eq!(get(&doc, &path(&["foo", "bar", "1"])), Some(&json!(null)));
/// assert_eq!(get(&doc, &path(&["foo", "bar", "2"])), None);
/// assert_eq!(get(&doc, &path(&["foo", "bar", "0", "x"])), None);
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for path_step in path {
        current = match current {
            Value::Array(arr) => {
                // canonical indices only; "-" is the slot past the end and never holds a value
                if !is_valid_index(path_step) {
                    return None;
                }
                arr.get(path_step.parse::<usize>().ok()?)?
            }
            Value::Object(map) => map.get(path_step)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Parse `pointer` and look it up in `val`.
pub fn get_by_pointer<'a>(val: &'a Value, pointer: &str) -> Option<&'a Value> {
    get(val, &parse_json_pointer(pointer))
}
