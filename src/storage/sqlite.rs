//! SQLite storage implementation

use std::path::Path;

use async_trait::async_trait;
use rusqlite::{OptionalExtension, Row, params};
use tokio_rusqlite::Connection;

use super::{CharacterStore, schema};
use crate::error::Result;
use crate::model::Character;

/// SQLite-backed character store.
///
/// Wraps one `tokio_rusqlite` connection: a background thread that owns the
/// `rusqlite::Connection` and runs queued calls one at a time, in submission
/// order. Clones share that same connection.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates it and the table if missing)
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::debug!(path = %path.display(), "Opening character store");
        let conn = Connection::open(path).await?;
        let store = Self { conn };
        store.initialize_schema().await?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().await?;
        let store = Self { conn };
        store.initialize_schema().await?;
        Ok(store)
    }

    async fn initialize_schema(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                for stmt in schema::all_schema_statements() {
                    conn.execute(stmt, [])?;
                }
                Ok(())
            })
            .await?;
        Ok(())
    }

    /// Close the connection. Calls queued before this one still run;
    /// any clone used afterwards fails with a storage error.
    pub async fn close(self) -> Result<()> {
        tracing::debug!("Closing character store");
        self.conn.close().await?;
        Ok(())
    }
}

fn row_to_character(row: &Row<'_>) -> rusqlite::Result<Character> {
    Ok(Character {
        id: row.get("id")?,
        name: row.get("name")?,
        movie: row.get("movie")?,
    })
}

#[async_trait]
impl CharacterStore for SqliteStore {
    async fn get_by_id(&self, id: i64) -> Result<Option<Character>> {
        let row = self
            .conn
            .call(move |conn| {
                let row = conn
                    .query_row(schema::SELECT_BY_ID, [id], row_to_character)
                    .optional()?;
                Ok(row)
            })
            .await?;
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Character>> {
        let rows = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL)?;
                let rows = stmt
                    .query_map([], row_to_character)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(rows)
            })
            .await?;
        Ok(rows)
    }

    async fn insert(&self, name: Option<String>, movie: Option<String>) -> Result<i64> {
        // The rowid must be read in the same queued call as the INSERT,
        // otherwise another caller's insert could run in between.
        let id = self
            .conn
            .call(move |conn| {
                conn.execute(schema::INSERT, params![name, movie])?;
                Ok(conn.last_insert_rowid())
            })
            .await?;
        tracing::info!(id, "Inserted character");
        Ok(id)
    }

    async fn update(&self, id: i64, name: Option<String>, movie: Option<String>) -> Result<()> {
        let changed = self
            .conn
            .call(move |conn| Ok(conn.execute(schema::UPDATE, params![name, movie, id])?))
            .await?;
        tracing::info!(id, changed, "Updated character");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let changed = self
            .conn
            .call(move |conn| Ok(conn.execute(schema::DELETE, [id])?))
            .await?;
        tracing::info!(id, changed, "Deleted character");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let id = store
            .insert(Some("Buzz".to_string()), Some("Toy Story".to_string()))
            .await
            .unwrap();

        let row = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(row, Character::new(id).with_name("Buzz").with_movie("Toy Story"));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        assert!(store.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_increase() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let first = store.insert(None, None).await.unwrap();
        let second = store.insert(None, None).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let first = store.insert(None, None).await.unwrap();
        store.delete(first).await.unwrap();
        let second = store.insert(None, None).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_update_overwrites_with_null() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let id = store
            .insert(Some("Rex".to_string()), Some("Toy Story".to_string()))
            .await
            .unwrap();

        store.update(id, Some("Hamm".to_string()), None).await.unwrap();

        let row = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(row.name.as_deref(), Some("Hamm"));
        assert_eq!(row.movie, None);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_row_succeed() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        store.update(99, Some("x".to_string()), None).await.unwrap();
        store.delete(99).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_all_rows() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        for name in ["Nemo", "Dory", "Marlin"] {
            store
                .insert(Some(name.to_string()), Some("Finding Nemo".to_string()))
                .await
                .unwrap();
        }

        let mut names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|c| c.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Dory", "Marlin", "Nemo"]);
    }

    #[tokio::test]
    async fn test_reopen_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("characters.db");

        let store = SqliteStore::open(&path).await.unwrap();
        let id = store.insert(Some("Sulley".to_string()), None).await.unwrap();
        store.close().await.unwrap();

        // Table creation must tolerate an existing table
        let store = SqliteStore::open(&path).await.unwrap();
        let row = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(row.name.as_deref(), Some("Sulley"));
    }

    #[tokio::test]
    async fn test_closed_store_reports_error() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let handle = store.clone();
        store.close().await.unwrap();
        assert!(handle.list().await.is_err());
    }
}
