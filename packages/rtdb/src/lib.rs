//! rtdb: query building and snapshot navigation for a realtime tree database.
//!
//! Re-exports the query core (`rtdb-core`) and the URL-backed references
//! (`rtdb-database`) under one crate.

pub use rtdb_core::*;
pub use rtdb_database::{Database, DatabaseConfig, DatabaseReference};

pub use rtdb_database::Error as DatabaseError;
