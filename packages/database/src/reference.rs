//! References addressed by a base URL and a path.

use std::sync::Arc;

use rtdb_core::{JsonValue, Path, Query, Reference, Snapshot};
use url::Url;

use crate::Error;

/// Suffix the REST API expects on every resource path.
const REST_SUFFIX: &str = ".json";

/// A location in a [`Database`](crate::Database).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseReference {
    base_url: Arc<Url>,
    path: Path,
}

impl DatabaseReference {
    pub(crate) fn new(base_url: Arc<Url>, path: Path) -> Self {
        tracing::trace!(path = %path, "created reference");
        DatabaseReference { base_url, path }
    }

    /// A reference to the root of the same database.
    pub fn root(&self) -> Self {
        DatabaseReference::new(Arc::clone(&self.base_url), Path::root())
    }

    /// The location one level up, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        self.path
            .parent()
            .map(|path| DatabaseReference::new(Arc::clone(&self.base_url), path))
    }

    /// A validated reference to a descendant.
    ///
    /// Unlike [`Reference::child`], this checks the joined path immediately.
    pub fn try_child(&self, relative: &str) -> Result<Self, Error> {
        let child = self.child(&Path::new(relative));
        child.path.validate()?;
        Ok(child)
    }

    /// Start a query against this location.
    pub fn query(&self) -> Query<Self> {
        Query::new(self.clone())
    }

    /// Wrap a raw result fetched from this location without any query.
    pub fn snapshot(&self, raw: JsonValue) -> Snapshot<Self> {
        Snapshot::new(self.clone(), raw)
    }
}

impl Reference for DatabaseReference {
    fn path(&self) -> &Path {
        &self.path
    }

    /// `<base>/<segments>.json`, with each segment percent-encoded.
    fn uri(&self) -> Url {
        let mut uri = (*self.base_url).clone();
        if let Ok(mut segments) = uri.path_segments_mut() {
            segments.pop_if_empty();
            match self.path.components.split_last() {
                Some((last, parents)) => {
                    segments.extend(parents);
                    segments.push(&format!("{}{}", last, REST_SUFFIX));
                }
                None => {
                    segments.push(REST_SUFFIX);
                }
            }
        }
        uri
    }

    fn child(&self, relative: &Path) -> Self {
        DatabaseReference::new(Arc::clone(&self.base_url), self.path.join(relative))
    }
}
