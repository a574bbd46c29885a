use crate::error::Result;
use crate::model::Character;
use crate::storage::CharacterStore;

use super::Operation;

/// Fetch one character. An unknown or unusable id yields `None`.
pub async fn character(store: &dyn CharacterStore, id: Option<i64>) -> Result<Option<Character>> {
    let Some(id) = id else {
        tracing::debug!(operation = %Operation::GetById, "No usable id, matching nothing");
        return Ok(None);
    };
    tracing::debug!(operation = %Operation::GetById, id, "Resolving");
    store.get_by_id(id).await
}

/// Every stored character, unordered.
pub async fn characters(store: &dyn CharacterStore) -> Result<Vec<Character>> {
    tracing::debug!(operation = %Operation::List, "Resolving");
    store.list().await
}
