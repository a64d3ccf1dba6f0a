//! # folio-store
//!
//! Document store for the portfolio content, backed by SQLite.
//!
//! Each record is kept as a JSON document in a named collection, the way a
//! document database would hold it. The crate exposes a synchronous
//! [`Database`] handle with typed document helpers, and the async
//! [`ContentRepository`] seam that the API server is built against.

pub mod database;
pub mod documents;
pub mod migrations;
pub mod repository;

mod error;

pub use database::Database;
pub use documents::Collection;
pub use error::{Result, StoreError};
pub use repository::{ContentRepository, SqliteRepository};
