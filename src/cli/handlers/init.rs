use crate::config::{CONFIG_FILE_NAME, RosterConfig, ServerSettings, StoreSettings};
use crate::error::RosterError;
use crate::storage::SqliteStore;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(db_path: String, port: u16) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(RosterError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = RosterConfig {
        store: StoreSettings { path: db_path },
        server: ServerSettings {
            port,
            ..Default::default()
        },
        log: Default::default(),
    };

    // Create the database file and table before writing the config, so a
    // failed open leaves the directory uninitialized
    let db_path = config.database_path(&cwd);
    tokio::runtime::Runtime::new()?.block_on(async {
        let store = SqliteStore::open(&db_path).await?;
        store.close().await?;
        Ok::<(), RosterError>(())
    })?;

    config.save(&config_path)?;

    println!(
        "{} roster project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config:   {}", config_path.display());
    println!("  Database: {}", db_path.display());

    Ok(())
}
