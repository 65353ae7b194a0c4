//! Query core for a realtime tree database reached over a JSON REST API.
//!
//! This crate is the part of the client that has to be exactly right:
//! - `Path`: the structural rules every location must satisfy
//! - `Filter` / `Sorter`: query modifiers and their query-string encoding
//! - `Query`: composes modifiers onto a reference's URI
//! - `Snapshot`: total, read-only navigation over a JSON result
//!
//! It performs no I/O. A transport takes the URI from [`Query::uri`], fetches
//! the JSON body, and hands it back to [`Query::snapshot`].
//!
//! # Example
//!
//! ```rust,ignore
//! use rtdb_core::{Query, Reference};
//!
//! let query = Query::new(reference).order_by_key()?.limit_to_first(10)?;
//! let uri = query.uri()?;
//! let body = transport.get(uri)?;
//! let snapshot = query.snapshot(body);
//! ```

mod error;
mod filter;
mod modifier;
mod path;
mod query;
mod reference;
mod snapshot;
mod sorter;
mod value;

pub use error::Error;
pub use filter::Filter;
pub use modifier::{append_query_param, Modifier};
pub use path::{validate, Path, PathError, MAX_DEPTH, MAX_PATH_BYTES, RESERVED_CHARACTERS};
pub use query::{attach, post_process, Query, QueryModifier};
pub use reference::Reference;
pub use snapshot::Snapshot;
pub use sorter::Sorter;
pub use value::{compare, FilterValue};

// Re-export the types that appear in the public API
pub use serde_json::Value as JsonValue;
pub use url::Url;
