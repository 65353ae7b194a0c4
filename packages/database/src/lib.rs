//! # rtdb-database
//!
//! URL-backed references for the rtdb query core.
//!
//! A [`Database`] is created from a base URL (or a [`DatabaseConfig`]) and
//! hands out [`DatabaseReference`]s. A reference knows its REST endpoint and
//! starts queries; fetching the endpoint is left to whichever HTTP client the
//! application already uses.
//!
//! ```rust
//! use rtdb_database::Database;
//! use serde_json::json;
//!
//! let db = Database::new("https://demo.firebaseio.com")?;
//! let query = db.reference("dinosaurs")?.query().order_by_key()?.limit_to_first(2)?;
//!
//! assert_eq!(
//!     query.uri()?.as_str(),
//!     "https://demo.firebaseio.com/dinosaurs.json?orderBy=%22%24key%22&limitToFirst=2"
//! );
//!
//! let snapshot = query.snapshot(json!({"stegosaurus": {"height": 4}, "lambeosaurus": {"height": 2.1}}));
//! assert_eq!(snapshot.children().next().unwrap().key(), Some("lambeosaurus"));
//! # Ok::<(), rtdb_database::Error>(())
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod reference;

pub use config::DatabaseConfig;
pub use database::Database;
pub use error::Error;
pub use reference::DatabaseReference;
