//! Sorters request server-side ordering and reproduce it locally.
//!
//! The REST API returns a JSON object whose key order carries no meaning, so
//! every sorter also rebuilds a mapping result in the order the server
//! applied. An array result becomes a mapping keyed by index, since once
//! sorted its order no longer matches its indices; null elements are dropped
//! the way the store drops them. Scalars pass through unchanged, and sorting
//! is stable: entries that compare equal keep their original relative order.

use std::cmp::Ordering;

use serde_json::{Map, Value as JsonValue};

use crate::modifier::Modifier;
use crate::value::{child_value, compare};
use crate::{Error, Path};

/// A query sorter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sorter {
    /// Order children by key.
    OrderByKey,
    /// Order children by their own value.
    OrderByValue,
    /// Order children by the value of a nested child.
    OrderByChild(Path),
}

impl Sorter {
    pub fn order_by_key() -> Self {
        Sorter::OrderByKey
    }

    pub fn order_by_value() -> Self {
        Sorter::OrderByValue
    }

    /// Order by the value at `child`, relative to each entry.
    ///
    /// The child path must be a valid, non-empty path.
    pub fn order_by_child(child: &str) -> Result<Self, Error> {
        let path = Path::parse(child)?;
        if path.is_empty() {
            return Err(Error::invalid_filter_value("child path must not be empty"));
        }
        Ok(Sorter::OrderByChild(path))
    }

    /// The sentinel sent as the (unquoted) `orderBy` value.
    pub fn token(&self) -> String {
        match self {
            Sorter::OrderByKey => "$key".to_string(),
            Sorter::OrderByValue => "$value".to_string(),
            Sorter::OrderByChild(path) => path.to_string(),
        }
    }

    fn sort_entries(&self, map: Map<String, JsonValue>) -> Map<String, JsonValue> {
        let mut entries: Vec<(String, JsonValue)> = map.into_iter().collect();
        match self {
            Sorter::OrderByKey => entries.sort_by(|(a, _), (b, _)| a.cmp(b)),
            Sorter::OrderByValue => entries.sort_by(|(_, a), (_, b)| compare(a, b)),
            Sorter::OrderByChild(path) => {
                entries.sort_by(|(_, a), (_, b)| compare_children(a, b, path))
            }
        }
        entries.into_iter().collect()
    }
}

/// Value at `path` inside `value`, if every level has the key.
fn lookup<'a>(value: &'a JsonValue, path: &Path) -> Option<&'a JsonValue> {
    path.iter().try_fold(value, |node, key| child_value(node, key))
}

fn index_entries(items: Vec<JsonValue>) -> Map<String, JsonValue> {
    items
        .into_iter()
        .enumerate()
        .filter(|(_, value)| !value.is_null())
        .map(|(index, value)| (index.to_string(), value))
        .collect()
}

fn compare_children(a: &JsonValue, b: &JsonValue, path: &Path) -> Ordering {
    let null = JsonValue::Null;
    compare(
        lookup(a, path).unwrap_or(&null),
        lookup(b, path).unwrap_or(&null),
    )
}

impl Modifier for Sorter {
    fn parameter_name(&self) -> &'static str {
        "orderBy"
    }

    fn parameter_value(&self) -> String {
        JsonValue::from(self.token()).to_string()
    }

    fn modify_value(&self, value: JsonValue) -> JsonValue {
        match value {
            JsonValue::Object(map) => JsonValue::Object(self.sort_entries(map)),
            JsonValue::Array(items) => JsonValue::Object(self.sort_entries(index_entries(items))),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use url::Url;

    fn render(sorter: &Sorter) -> String {
        sorter
            .modify_uri(&Url::parse("http://domain.tld").unwrap())
            .to_string()
    }

    fn keys(value: &JsonValue) -> Vec<&str> {
        value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn order_by_key_renders() {
        assert!(render(&Sorter::order_by_key()).contains("orderBy=%22%24key%22"));
    }

    #[test]
    fn order_by_value_renders() {
        assert!(render(&Sorter::order_by_value()).contains("orderBy=%22%24value%22"));
    }

    #[test]
    fn order_by_child_renders() {
        let sorter = Sorter::order_by_child("address/city").unwrap();
        assert_eq!(sorter.parameter_value(), "\"address/city\"");
        assert!(render(&sorter).contains("orderBy=%22address%2Fcity%22"));
    }

    #[test]
    fn order_by_child_rejects_bad_paths() {
        assert!(matches!(
            Sorter::order_by_child("a.b"),
            Err(Error::InvalidPath(_))
        ));
        assert!(matches!(
            Sorter::order_by_child("/"),
            Err(Error::InvalidFilterValue { .. })
        ));
    }

    #[test]
    fn order_by_key_sorts_mapping() {
        let sorted = Sorter::OrderByKey.modify_value(json!({
            "c": "any", "a": "any", "d": "any", "b": "any"
        }));
        assert_eq!(keys(&sorted), ["a", "b", "c", "d"]);
    }

    #[test]
    fn order_by_key_passes_scalars() {
        assert_eq!(
            Sorter::OrderByKey.modify_value(json!("scalar")),
            json!("scalar")
        );
        assert_eq!(Sorter::OrderByKey.modify_value(json!(null)), json!(null));
    }

    #[test]
    fn order_by_value_sorts_mapping() {
        let sorted = Sorter::OrderByValue.modify_value(json!({
            "first": 3, "second": 4, "third": 1, "fourth": 2
        }));
        assert_eq!(keys(&sorted), ["third", "fourth", "first", "second"]);
        assert_eq!(sorted["third"], json!(1));
    }

    #[test]
    fn order_by_value_passes_scalars() {
        assert_eq!(
            Sorter::OrderByValue.modify_value(json!("scalar")),
            json!("scalar")
        );
    }

    #[test]
    fn order_by_value_mixed_types() {
        let sorted = Sorter::OrderByValue.modify_value(json!({
            "s": "text", "n": 5, "o": {"x": 1}, "t": true, "z": null, "f": false
        }));
        assert_eq!(keys(&sorted), ["z", "f", "t", "n", "s", "o"]);
    }

    #[test]
    fn order_by_value_is_stable() {
        let sorted = Sorter::OrderByValue.modify_value(json!({
            "d": 2, "b": 1, "c": 2, "a": 1
        }));
        assert_eq!(keys(&sorted), ["b", "a", "d", "c"]);
    }

    #[test]
    fn order_by_child_sorts_mapping() {
        let sorter = Sorter::order_by_child("height").unwrap();
        let sorted = sorter.modify_value(json!({
            "stegosaurus": {"height": 4},
            "lambeosaurus": {"height": 2.1},
            "pterodactyl": {"weight": 1},
            "bruhathkayosaurus": {"height": 25}
        }));
        assert_eq!(
            keys(&sorted),
            ["pterodactyl", "lambeosaurus", "stegosaurus", "bruhathkayosaurus"]
        );
    }

    #[test]
    fn order_by_nested_child() {
        let sorter = Sorter::order_by_child("address/city").unwrap();
        let sorted = sorter.modify_value(json!({
            "bob": {"address": {"city": "Zurich"}},
            "amy": {"address": {"city": "Berlin"}},
            "cat": "not a mapping"
        }));
        assert_eq!(keys(&sorted), ["cat", "amy", "bob"]);
    }

    #[test]
    fn order_by_value_keys_array_by_index() {
        let sorted = Sorter::OrderByValue.modify_value(json!([30, null, 10, 20]));
        assert_eq!(keys(&sorted), ["2", "3", "0"]);
        assert_eq!(sorted["2"], json!(10));
    }

    #[test]
    fn order_by_child_reads_array_elements() {
        let sorter = Sorter::order_by_child("scores/0").unwrap();
        let sorted = sorter.modify_value(json!({
            "a": {"scores": [9]},
            "b": {"scores": [3]},
            "c": {"scores": {"01": 1}}
        }));
        assert_eq!(keys(&sorted), ["c", "b", "a"]);
    }
}
