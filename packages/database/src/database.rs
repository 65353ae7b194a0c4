//! The root handle for one database.

use std::sync::Arc;

use rtdb_core::Path;
use url::Url;

use crate::{DatabaseConfig, DatabaseReference, Error};

/// A database reachable at a base URL.
///
/// Cloning is cheap; every reference created from a `Database` shares its
/// base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Database {
    base_url: Arc<Url>,
}

impl Database {
    /// Create a database handle for the given base URL.
    ///
    /// The URL must be `http` or `https` and have a host. A path on the base
    /// URL is kept as a prefix and query parameters (such as an emulator
    /// namespace) are carried onto every request URI.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::from_url(Url::parse(base_url)?)
    }

    /// Create a database handle from a resolved configuration.
    pub fn from_config(config: &DatabaseConfig) -> Result<Self, Error> {
        Self::from_url(config.resolve_url()?)
    }

    fn from_url(mut base_url: Url) -> Result<Self, Error> {
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl {
                message: format!("unsupported scheme '{}'", base_url.scheme()),
            });
        }
        if base_url.host_str().map_or(true, str::is_empty) {
            return Err(Error::InvalidUrl {
                message: format!("'{}' has no host", base_url),
            });
        }
        base_url.set_fragment(None);

        tracing::debug!(url = %base_url, "opened database");
        Ok(Database {
            base_url: Arc::new(base_url),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// A reference to the root of the tree.
    pub fn root(&self) -> DatabaseReference {
        DatabaseReference::new(Arc::clone(&self.base_url), Path::root())
    }

    /// A reference to `path`, which must satisfy the store's path rules.
    pub fn reference(&self, path: &str) -> Result<DatabaseReference, Error> {
        let path = Path::parse(path)?;
        Ok(DatabaseReference::new(Arc::clone(&self.base_url), path))
    }
}
