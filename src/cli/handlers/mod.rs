mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::graphql::{build_schema, execute};
use crate::storage::SqliteStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: RosterConfig,
    pub root: PathBuf,
    /// `--db` override, taken as given (relative to the working directory)
    pub db_override: Option<PathBuf>,
}

impl CommandContext {
    pub fn new(config: RosterConfig, root: PathBuf) -> Self {
        Self {
            config,
            root,
            db_override: None,
        }
    }

    pub fn with_db_override(mut self, db: Option<PathBuf>) -> Self {
        self.db_override = db;
        self
    }

    pub fn database_path(&self) -> PathBuf {
        self.db_override
            .clone()
            .unwrap_or_else(|| self.config.database_path(&self.root))
    }

    pub async fn open_store(&self) -> Result<SqliteStore> {
        SqliteStore::open(&self.database_path()).await
    }
}

/// Run one operation document against the project's store and print the
/// JSON response. Field errors are part of the response, not a failure.
fn run_document(ctx: &CommandContext, document: &str, variables: Option<&str>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let response = runtime.block_on(async {
        let store = ctx.open_store().await?;
        let schema = build_schema(Arc::new(store.clone()));
        let response = execute(&schema, document, variables).await?;
        store.close().await?;
        Ok::<_, RosterError>(response)
    })?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
