use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use roster::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use roster::cli::{Cli, Commands};
use roster::config::RosterConfig;
use roster::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { db_path, port } => {
            logging::init(cli.verbose, None);
            handle_init(db_path, port)
        }
        Commands::Schema => handle_schema(),
        Commands::Serve { host, port } => {
            let ctx = load_context(cli.config, cli.db, cli.verbose)?;
            handle_serve(ctx, host, port)
        }
        Commands::Query { query, variables } => {
            let ctx = load_context(cli.config, cli.db, cli.verbose)?;
            handle_query(ctx, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let ctx = load_context(cli.config, cli.db, cli.verbose)?;
            handle_mutate(ctx, mutation, variables)
        }
    }
}

/// Locate the project, start logging with its settings and build the handler context
fn load_context(config: Option<String>, db: Option<String>, verbose: bool) -> Result<CommandContext> {
    let (config, root) = match config {
        Some(path) => {
            let path = PathBuf::from(path);
            let config = RosterConfig::load_file(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            let root = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            (config, root)
        }
        None => {
            let cwd = std::env::current_dir()?;
            RosterConfig::load(&cwd).context("Failed to load roster configuration")?
        }
    };

    logging::init(verbose, config.log_path(&root));
    Ok(CommandContext::new(config, root).with_db_override(db.map(PathBuf::from)))
}
