//! # Roster - a GraphQL service for movie characters
//!
//! Roster keeps a single table of characters (`id`, `name`, `movie`) in a
//! SQLite file and exposes it through a GraphQL API, over HTTP or straight
//! from the command line.
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a new roster project (writes roster.toml and creates the database)
//! roster init
//!
//! # Add a character
//! roster mutate 'addCharacter(name: "Woody", movie: "Toy Story") { id name movie }'
//!
//! # List all characters
//! roster query '{ characters { id name movie } }'
//!
//! # Serve the API with GraphiQL on http://127.0.0.1:4000/graphql
//! roster serve
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, composition and HTTP endpoint
//! - [`model`]: The `Character` row
//! - [`resolver`]: Resolver algorithms behind each operation
//! - [`storage`]: Async row store over SQLite

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `roster.toml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `RosterError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and HTTP endpoint.
///
/// Provides the async-graphql schema for querying and mutating characters.
pub mod graphql;

pub mod logging;

/// Data models.
pub mod model;

/// Resolver algorithms, independent of the GraphQL binding.
pub mod resolver;

/// Storage layer.
///
/// The `CharacterStore` trait and its SQLite implementation.
pub mod storage;
