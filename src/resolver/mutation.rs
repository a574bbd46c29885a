use crate::error::Result;
use crate::model::Character;
use crate::storage::CharacterStore;

use super::Operation;

/// Insert a character and return it as stored.
///
/// The insert only yields the generated id, so the row is read back in a
/// second call. If the row is gone by then, the result is `None`.
pub async fn add_character(
    store: &dyn CharacterStore,
    name: Option<String>,
    movie: Option<String>,
) -> Result<Option<Character>> {
    let id = store.insert(name, movie).await?;
    tracing::debug!(operation = %Operation::Add, id, "Inserted, re-fetching");
    store.get_by_id(id).await
}

/// Overwrite `name` and `movie` of a character and return the new state.
///
/// Both fields are replaced; an absent argument clears the stored value.
/// Returns `None` when no row has that id.
pub async fn update_character(
    store: &dyn CharacterStore,
    id: Option<i64>,
    name: Option<String>,
    movie: Option<String>,
) -> Result<Option<Character>> {
    let Some(id) = id else {
        tracing::debug!(operation = %Operation::Update, "No usable id, nothing to update");
        return Ok(None);
    };
    store.update(id, name, movie).await?;
    tracing::debug!(operation = %Operation::Update, id, "Updated, re-fetching");
    store.get_by_id(id).await
}

/// Delete a character and return what it held just before deletion.
///
/// Deleting an id with no row is not an error: the snapshot is `None` and
/// the delete is a no-op.
pub async fn delete_character(
    store: &dyn CharacterStore,
    id: Option<i64>,
) -> Result<Option<Character>> {
    let Some(id) = id else {
        tracing::debug!(operation = %Operation::Delete, "No usable id, nothing to delete");
        return Ok(None);
    };
    let snapshot = store.get_by_id(id).await?;
    store.delete(id).await?;
    tracing::debug!(operation = %Operation::Delete, id, existed = snapshot.is_some(), "Deleted");
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteStore;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[tokio::test]
    async fn test_add_returns_hydrated_row() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let added = add_character(&store, s("Wall-E"), s("WALL-E"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(added.name.as_deref(), Some("Wall-E"));
        assert_eq!(added.movie.as_deref(), Some("WALL-E"));
        assert_eq!(store.get_by_id(added.id).await.unwrap(), Some(added));
    }

    #[tokio::test]
    async fn test_add_without_fields() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let added = add_character(&store, None, None).await.unwrap().unwrap();
        assert_eq!(added, Character::new(added.id));
    }

    #[tokio::test]
    async fn test_update_is_full_replace() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let id = store.insert(s("Remy"), s("Ratatouille")).await.unwrap();

        let updated = update_character(&store, Some(id), s("Linguini"), None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated, Character::new(id).with_name("Linguini"));
    }

    #[tokio::test]
    async fn test_update_missing_row_returns_none() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let result = update_character(&store, Some(404), s("x"), s("y")).await.unwrap();
        assert!(result.is_none());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_without_id_touches_nothing() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let id = store.insert(s("Carl"), s("Up")).await.unwrap();

        assert!(update_character(&store, None, None, None).await.unwrap().is_none());

        let row = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(row.name.as_deref(), Some("Carl"));
    }

    #[tokio::test]
    async fn test_delete_returns_snapshot() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let id = store.insert(s("Russell"), s("Up")).await.unwrap();

        let deleted = delete_character(&store, Some(id)).await.unwrap().unwrap();
        assert_eq!(deleted, Character::new(id).with_name("Russell").with_movie("Up"));
        assert!(store.get_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_ok() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        assert!(delete_character(&store, Some(999_999)).await.unwrap().is_none());
        assert!(delete_character(&store, None).await.unwrap().is_none());
    }
}
