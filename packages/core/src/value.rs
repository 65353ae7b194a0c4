//! Filter values, their wire encoding, and the store's ordering of JSON values.

use std::cmp::Ordering;

use serde_json::{Number, Value as JsonValue};

/// A scalar a filter compares against.
///
/// An explicit tagged union so every encoder handles each case.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FilterValue {
    /// Absence of a value. Only equality filters accept it.
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl FilterValue {
    /// Check if this value is the absent sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, FilterValue::Null)
    }

    /// NaN and infinities have no JSON form.
    pub(crate) fn is_encodable(&self) -> bool {
        match self {
            FilterValue::Float(f) => f.is_finite(),
            _ => true,
        }
    }

    /// Encode as a JSON scalar.
    ///
    /// Strings are quoted and escaped, numbers are bare, the absent value is
    /// the literal `null`.
    ///
    /// ```rust
    /// use rtdb_core::FilterValue;
    ///
    /// assert_eq!(FilterValue::from(1).to_json_string(), "1");
    /// assert_eq!(FilterValue::from("a\"b").to_json_string(), r#""a\"b""#);
    /// assert_eq!(FilterValue::Null.to_json_string(), "null");
    /// ```
    pub fn to_json_string(&self) -> String {
        match self {
            FilterValue::Null => "null".to_string(),
            FilterValue::Bool(b) => b.to_string(),
            FilterValue::Integer(i) => i.to_string(),
            FilterValue::Float(f) => Number::from_f64(*f)
                .map(|n| n.to_string())
                .unwrap_or_else(|| "null".to_string()),
            FilterValue::String(s) => JsonValue::from(s.as_str()).to_string(),
        }
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Bool(v)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Integer(v)
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        FilterValue::Integer(v as i64)
    }
}

impl From<u32> for FilterValue {
    fn from(v: u32) -> Self {
        FilterValue::Integer(v as i64)
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Float(v)
    }
}

/// Widens exactly, so the encoding spells out the `f32`'s binary value:
/// `0.1f32` encodes as `0.10000000149011612`. Pass an `f64` literal to get
/// the shortest decimal form.
impl From<f32> for FilterValue {
    fn from(v: f32) -> Self {
        FilterValue::Float(v as f64)
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::String(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::String(v.to_string())
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FilterValue::Null)
    }
}

/// The non-null entry at `key`.
///
/// Object keys match exactly. An array is indexed only by a key that is the
/// canonical decimal form of an index, so `"01"` and `"+1"` address nothing.
pub(crate) fn child_value<'a>(node: &'a JsonValue, key: &str) -> Option<&'a JsonValue> {
    let child = match node {
        JsonValue::Object(map) => map.get(key),
        JsonValue::Array(items) => key
            .parse::<usize>()
            .ok()
            .filter(|index| index.to_string() == key)
            .and_then(|index| items.get(index)),
        _ => None,
    };
    child.filter(|value| !value.is_null())
}

/// First-level non-null entries keyed as strings, array elements by index.
pub(crate) fn entries(node: &JsonValue) -> Vec<(String, &JsonValue)> {
    match node {
        JsonValue::Object(map) => map
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| (key.clone(), value))
            .collect(),
        JsonValue::Array(items) => items
            .iter()
            .enumerate()
            .filter(|(_, value)| !value.is_null())
            .map(|(index, value)| (index.to_string(), value))
            .collect(),
        _ => Vec::new(),
    }
}

/// Rank of a value's type in the store's ordering.
fn type_rank(value: &JsonValue) -> u8 {
    match value {
        JsonValue::Null => 0,
        JsonValue::Bool(false) => 1,
        JsonValue::Bool(true) => 2,
        JsonValue::Number(_) => 3,
        JsonValue::String(_) => 4,
        JsonValue::Array(_) | JsonValue::Object(_) => 5,
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a.cmp(&b);
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a.cmp(&b);
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// Compare two JSON values the way the store orders them.
///
/// `null` sorts first, then `false`, `true`, numbers (numerically), strings
/// (lexically), and finally containers. Containers compare equal to each
/// other so a stable sort keeps their relative order.
pub fn compare(a: &JsonValue, b: &JsonValue) -> Ordering {
    match (a, b) {
        (JsonValue::Number(a), JsonValue::Number(b)) => compare_numbers(a, b),
        (JsonValue::String(a), JsonValue::String(b)) => a.cmp(b),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encode_scalars() {
        assert_eq!(FilterValue::from(true).to_json_string(), "true");
        assert_eq!(FilterValue::from(false).to_json_string(), "false");
        assert_eq!(FilterValue::from(-42).to_json_string(), "-42");
        assert_eq!(FilterValue::from(1.5).to_json_string(), "1.5");
        assert_eq!(FilterValue::from("value").to_json_string(), "\"value\"");
        assert_eq!(FilterValue::Null.to_json_string(), "null");
    }

    #[test]
    fn encode_escapes_strings() {
        assert_eq!(
            FilterValue::from("say \"hi\"\n").to_json_string(),
            r#""say \"hi\"\n""#
        );
    }

    #[test]
    fn numbers_decode_back_exactly() {
        for n in [0i64, 1, -1, i64::MAX, i64::MIN] {
            let encoded = FilterValue::from(n).to_json_string();
            assert_eq!(encoded.parse::<i64>().unwrap(), n);
        }
        for f in [0.1f64, -2.5e-7, 1e21, f64::MAX, f64::MIN_POSITIVE] {
            let encoded = FilterValue::from(f).to_json_string();
            let decoded: f64 = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, f);
        }
    }

    #[test]
    fn f32_widens_exactly() {
        assert_eq!(FilterValue::from(0.5f32).to_json_string(), "0.5");
        assert_eq!(
            FilterValue::from(0.1f32).to_json_string(),
            "0.10000000149011612"
        );
        assert_eq!(FilterValue::from(0.1f32), FilterValue::Float(0.1f32 as f64));
    }

    #[test]
    fn child_lookup_by_shape() {
        let object = json!({"0": "zero", "gone": null});
        assert_eq!(child_value(&object, "0"), Some(&json!("zero")));
        assert_eq!(child_value(&object, "gone"), None);

        let array = json!(["a", null, "c"]);
        assert_eq!(child_value(&array, "2"), Some(&json!("c")));
        assert_eq!(child_value(&array, "1"), None);
        assert_eq!(child_value(&array, "02"), None);
        assert_eq!(child_value(&array, "+2"), None);
        assert_eq!(child_value(&json!("a"), "0"), None);
    }

    #[test]
    fn entries_skip_nulls() {
        let array = json!(["a", null, "c"]);
        let keys: Vec<String> = entries(&array).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["0", "2"]);
        assert_eq!(entries(&json!({"a": null})).len(), 0);
        assert!(entries(&json!(3)).is_empty());
    }

    #[test]
    fn option_conversion() {
        assert_eq!(FilterValue::from(None::<i64>), FilterValue::Null);
        assert_eq!(FilterValue::from(Some("x")), FilterValue::from("x"));
    }

    #[test]
    fn non_finite_floats_are_not_encodable() {
        assert!(!FilterValue::from(f64::NAN).is_encodable());
        assert!(!FilterValue::from(f64::INFINITY).is_encodable());
        assert!(FilterValue::from(1.0).is_encodable());
        assert!(FilterValue::Null.is_encodable());
    }

    #[test]
    fn store_ordering_across_types() {
        let ordered = [
            json!(null),
            json!(false),
            json!(true),
            json!(-1),
            json!(2.5),
            json!(10),
            json!("a"),
            json!("b"),
            json!({"x": 1}),
        ];
        for pair in ordered.windows(2) {
            assert_eq!(
                compare(&pair[0], &pair[1]),
                Ordering::Less,
                "{} should sort before {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(compare(&json!(9), &json!(10)), Ordering::Less);
        assert_eq!(compare(&json!(1), &json!(1.0)), Ordering::Equal);
        assert_eq!(compare(&json!(u64::MAX), &json!(1)), Ordering::Greater);
    }

    #[test]
    fn containers_tie() {
        assert_eq!(compare(&json!({"a": 1}), &json!([1])), Ordering::Equal);
    }
}
