//! The addressing collaborator a query and a snapshot are bound to.

use url::Url;

use crate::Path;

/// An addressable location in the remote tree.
///
/// A reference is an opaque, cheaply cloned handle. The query core only asks
/// it for its path, its request URI and derived child references; it never
/// inspects transport state.
pub trait Reference: Clone {
    /// The path this reference addresses.
    fn path(&self) -> &Path;

    /// The request URI for this location, before any query parameters.
    fn uri(&self) -> Url;

    /// The last path segment, or `None` at the root.
    fn key(&self) -> Option<&str> {
        self.path().key()
    }

    /// A reference to a descendant.
    ///
    /// Derivation never fails. The joined path is validated when a query is
    /// built for the child.
    fn child(&self, relative: &Path) -> Self;
}
