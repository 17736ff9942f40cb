use serde_json::{Number, Value};

/// Performs a deep equality check between two JSON values.
///
/// This function compares values recursively:
/// - Primitives (null, bool, number, string) by value
/// - Arrays element-by-element, order significant
/// - Objects key-by-key, key order irrelevant
///
/// Values of different JSON types are never equal. Documents are assumed
/// acyclic, which `serde_json::Value` guarantees.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use path_changed_util::json_equal::deep_equal;
///
/// let a = json!({"foo": [1, 2, 3]});
/// let b = json!({"foo": [1, 2, 3]});
/// let c = json!({"foo": [1, 2, 4]});
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len() && arr_a.iter().zip(arr_b).all(|(x, y)| deep_equal(x, y))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            obj_a.len() == obj_b.len()
                && obj_a.iter().all(|(key, val_a)| {
                    obj_b
                        .get(key)
                        .is_some_and(|val_b| deep_equal(val_a, val_b))
                })
        }

        _ => false,
    }
}

/// Deep equality over possibly absent values.
///
/// `None` marks a location that does not exist. Two absent values are equal;
/// an absent value never equals a present one, including a stored `null`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use path_changed_util::deep_equal_opt;
///
/// assert!(deep_equal_opt(None, None));
/// assert!(!deep_equal_opt(None, Some(&json!(null))));
/// assert!(deep_equal_opt(Some(&json!([1])), Some(&json!([1]))));
/// ```
pub fn deep_equal_opt(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => deep_equal(a, b),
        _ => false,
    }
}

/// Numeric equality that ignores the integer/float representation, so `1`
/// and `1.0` compare equal.
pub fn number_equal(a: &Number, b: &Number) -> bool {
    if a == b {
        return true;
    }
    // both integers with differing representation cannot be equal
    if !a.is_f64() && !b.is_f64() {
        return false;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_equal_numbers() {
        assert!(deep_equal(&json!(1), &json!(1)));
        assert!(deep_equal(&json!(-7), &json!(-7)));
    }

    #[test]
    fn test_not_equal_numbers() {
        assert!(!deep_equal(&json!(1), &json!(2)));
        assert!(!deep_equal(&json!(1), &json!(-1)));
    }

    #[test]
    fn test_integer_and_float_with_same_value_equal() {
        assert!(deep_equal(&json!(1), &json!(1.0)));
        assert!(deep_equal(&json!(-3.0), &json!(-3)));
        assert!(!deep_equal(&json!(1), &json!(1.5)));
    }

    #[test]
    fn test_zero_and_null_not_equal() {
        assert!(!deep_equal(&json!(0), &json!(null)));
    }

    #[test]
    fn test_empty_string_and_null_not_equal() {
        assert!(!deep_equal(&json!(""), &json!(null)));
    }

    #[test]
    fn test_strings() {
        assert!(deep_equal(&json!("a"), &json!("a")));
        assert!(!deep_equal(&json!("a"), &json!("b")));
    }

    #[test]
    fn test_booleans() {
        assert!(deep_equal(&json!(true), &json!(true)));
        assert!(!deep_equal(&json!(true), &json!(false)));
        assert!(!deep_equal(&json!(1), &json!(true)));
        assert!(!deep_equal(&json!(0), &json!(false)));
    }

    #[test]
    fn test_objects_ignore_key_order() {
        assert!(deep_equal(&json!({"a": 1, "b": "2"}), &json!({"b": "2", "a": 1})));
    }

    #[test]
    fn test_objects_differ() {
        assert!(!deep_equal(
            &json!({"a": 1, "b": "2"}),
            &json!({"a": 1, "b": "2", "c": []})
        ));
        assert!(!deep_equal(&json!({"a": 1, "c": 3}), &json!({"a": 1, "d": 3})));
        assert!(!deep_equal(&json!({"a": null}), &json!({"b": null})));
    }

    #[test]
    fn test_empty_object_and_array_not_equal() {
        assert!(!deep_equal(&json!({}), &json!([])));
    }

    #[test]
    fn test_arrays() {
        assert!(deep_equal(&json!([]), &json!([])));
        assert!(deep_equal(&json!([1, 2, 3]), &json!([1, 2, 3])));
        assert!(!deep_equal(&json!([1, 2, 3]), &json!([1, 2])));
        assert!(!deep_equal(&json!([1, 2, 3]), &json!([3, 2, 1])));
    }

    #[test]
    fn test_nested_contacts() {
        let a = json!({
            "name": "Test contact 0 name",
            "phones": ["p0", "p1"],
            "emails": ["e0", "e1"]
        });
        let b = json!({
            "emails": ["e0", "e1"],
            "name": "Test contact 0 name",
            "phones": ["p0", "p1"]
        });
        assert!(deep_equal(&a, &b));

        let c = json!({
            "emails": ["e0", "e1-new"],
            "name": "Test contact 0 name",
            "phones": ["p0", "p1"]
        });
        assert!(!deep_equal(&a, &c));
    }

    #[test]
    fn test_absent_values() {
        assert!(deep_equal_opt(None, None));
        assert!(!deep_equal_opt(Some(&json!(null)), None));
        assert!(!deep_equal_opt(None, Some(&json!(0))));
        assert!(deep_equal_opt(Some(&json!(null)), Some(&json!(null))));
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            "[a-z]{0,6}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-c]", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_deep_equal_is_reflexive(v in arb_json()) {
            prop_assert!(deep_equal(&v, &v.clone()));
        }

        #[test]
        fn prop_deep_equal_is_symmetric(a in arb_json(), b in arb_json()) {
            prop_assert_eq!(deep_equal(&a, &b), deep_equal(&b, &a));
        }

        #[test]
        fn prop_deep_equal_agrees_with_value_eq_on_integers(a in arb_json(), b in arb_json()) {
            prop_assert_eq!(deep_equal(&a, &b), a == b);
        }
    }
}
