//! Row-store layer for characters.
//!
//! Resolvers never talk to SQLite directly. They go through the
//! [`CharacterStore`] trait, whose five primitives are the only way state is
//! read or written.
//!
//! ## Components
//!
//! - [`CharacterStore`]: async CRUD primitives over the `characters` table
//! - [`SqliteStore`]: file-backed implementation on a single serialized connection
//! - [`schema`]: table DDL

pub mod schema;
mod sqlite;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::Character;

pub use sqlite::SqliteStore;

/// Asynchronous primitives over the single `characters` table.
///
/// `update` and `delete` are unconditional and do not report whether a row
/// matched. A missing row is `Ok(None)` from `get_by_id`, never an error.
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// Look up one row by id.
    async fn get_by_id(&self, id: i64) -> Result<Option<Character>>;

    /// Full snapshot of the table, in no particular order.
    async fn list(&self) -> Result<Vec<Character>>;

    /// Insert a row and return the id the store generated for it.
    async fn insert(&self, name: Option<String>, movie: Option<String>) -> Result<i64>;

    /// Overwrite both `name` and `movie` for `id`.
    async fn update(&self, id: i64, name: Option<String>, movie: Option<String>) -> Result<()>;

    async fn delete(&self, id: i64) -> Result<()>;
}
