use crate::config::{ServerSettings, StoreSettings};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "roster")]
#[command(
    author,
    version,
    about = "A GraphQL service for movie characters, backed by SQLite"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for roster.toml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Path to the database file (overrides config)
    #[arg(long, global = true, env = "ROSTER_DB")]
    pub db: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new roster project in the current directory
    Init {
        /// Database file, relative to the project directory
        #[arg(long, default_value_t = StoreSettings::default().path)]
        db_path: String,

        /// Port the server listens on
        #[arg(long, default_value_t = ServerSettings::default().port)]
        port: u16,
    },

    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_mutate_with_globals() {
        let cli = Cli::try_parse_from([
            "roster",
            "mutate",
            "deleteCharacter(id: 1) { id }",
            "--db",
            "other.db",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.db.as_deref(), Some("other.db"));
        assert!(cli.verbose);
        match cli.command {
            Commands::Mutate {
                mutation,
                variables,
            } => {
                assert_eq!(mutation, "deleteCharacter(id: 1) { id }");
                assert!(variables.is_none());
            }
            _ => panic!("expected mutate"),
        }
    }
}
