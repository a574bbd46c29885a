use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Request, Response, Schema, Variables};

use crate::error::Result;
use crate::resolver;
use crate::storage::CharacterStore;

use super::types::*;

pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Store handle shared by every resolver of a schema
pub type SharedStore = Arc<dyn CharacterStore>;

pub fn build_schema(store: SharedStore) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// SDL of the schema; needs no store since nothing is resolved
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

/// Execute one operation document against the schema.
///
/// `variables` is a JSON object, as sent by GraphQL clients.
pub async fn execute(
    schema: &RosterSchema,
    document: &str,
    variables: Option<&str>,
) -> Result<Response> {
    let vars: Variables = match variables {
        Some(v) => serde_json::from_str(v)?,
        None => Variables::default(),
    };
    let request = Request::new(document).variables(vars);
    Ok(schema.execute(request).await)
}

fn get_store<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

fn row_key(id: Option<&ID>) -> Option<i64> {
    resolver::parse_id(id.map(|id| id.as_str()))
}

pub struct QueryRoot;

#[Object(name = "RootQueryType")]
impl QueryRoot {
    /// Get a single character by ID
    async fn character(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
    ) -> async_graphql::Result<Option<Character>> {
        let store = get_store(ctx)?;
        let row = resolver::character(store.as_ref(), row_key(id.as_ref())).await?;
        Ok(row.map(Into::into))
    }

    /// List all characters
    async fn characters(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Character>>> {
        let store = get_store(ctx)?;
        let rows = resolver::characters(store.as_ref()).await?;
        Ok(Some(rows.into_iter().map(Into::into).collect()))
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create a new character
    async fn add_character(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        movie: Option<String>,
    ) -> async_graphql::Result<Option<Character>> {
        let store = get_store(ctx)?;
        let row = resolver::add_character(store.as_ref(), name, movie).await?;
        Ok(row.map(Into::into))
    }

    /// Replace a character's name and movie
    async fn update_character(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        name: Option<String>,
        movie: Option<String>,
    ) -> async_graphql::Result<Option<Character>> {
        let store = get_store(ctx)?;
        let row =
            resolver::update_character(store.as_ref(), row_key(id.as_ref()), name, movie).await?;
        Ok(row.map(Into::into))
    }

    /// Delete a character, returning its last state
    async fn delete_character(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
    ) -> async_graphql::Result<Option<Character>> {
        let store = get_store(ctx)?;
        let row = resolver::delete_character(store.as_ref(), row_key(id.as_ref())).await?;
        Ok(row.map(Into::into))
    }
}
