//! Read-only views over query results.

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::value::{child_value, entries};
use crate::{Path, Reference};

/// An immutable view of the value at a location, paired with its reference.
///
/// Navigation is total: looking up a missing or wrongly shaped branch yields
/// a snapshot whose value is absent (`exists() == false`), never an error.
///
/// # Example
///
/// ```rust,ignore
/// let snapshot = query.snapshot(json!({"key": {"subkey": "value"}}));
///
/// assert!(snapshot.has_child("key/subkey"));
/// assert_eq!(snapshot.child("key/subkey").value(), &json!("value"));
/// assert!(!snapshot.child("key/missing").exists());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<R> {
    reference: R,
    value: JsonValue,
}

impl<R: Reference> Snapshot<R> {
    /// Wrap a raw value received for `reference`.
    ///
    /// The value is kept exactly as received; arrays stay arrays.
    pub fn new(reference: R, value: JsonValue) -> Self {
        Snapshot { reference, value }
    }

    pub fn reference(&self) -> &R {
        &self.reference
    }

    /// The key of the location, or `None` at the root.
    pub fn key(&self) -> Option<&str> {
        self.reference.key()
    }

    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    pub fn into_value(self) -> JsonValue {
        self.value
    }

    /// Deserialize the value into a typed view.
    pub fn value_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.value)
    }

    /// True unless the value is absent.
    pub fn exists(&self) -> bool {
        !self.value.is_null()
    }

    /// True if the value has at least one non-null entry.
    pub fn has_children(&self) -> bool {
        self.num_children() > 0
    }

    /// Number of first-level non-null entries, 0 for scalars and absent
    /// values.
    pub fn num_children(&self) -> usize {
        entries(&self.value).len()
    }

    /// Whether a value exists at the `/`-separated relative path.
    pub fn has_child(&self, path: &str) -> bool {
        self.lookup(&Path::new(path))
            .is_some_and(|value| !value.is_null())
    }

    /// The snapshot at the `/`-separated relative path.
    ///
    /// Keys are matched as exact strings on objects, so `"123"` and `"-abc"`
    /// address the entries with those keys. Only on an array is a key read as
    /// an index. If any level is missing or a scalar, the returned snapshot is
    /// absent.
    pub fn child(&self, path: &str) -> Snapshot<R> {
        let path = Path::new(path);
        let value = match self.lookup(&path) {
            Some(value) => value.clone(),
            None => {
                tracing::trace!(path = %path, "no value at snapshot child");
                JsonValue::Null
            }
        };
        Snapshot::new(self.reference.child(&path), value)
    }

    /// First-level non-null children, in object order or by array index.
    pub fn children(&self) -> impl Iterator<Item = Snapshot<R>> + '_ {
        entries(&self.value).into_iter().map(|(key, value)| {
            let reference = self.reference.child(&Path {
                components: vec![key],
            });
            Snapshot::new(reference, value.clone())
        })
    }

    fn lookup(&self, path: &Path) -> Option<&JsonValue> {
        path.iter()
            .try_fold(&self.value, |node, key| child_value(node, key))
    }
}
