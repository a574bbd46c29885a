//! GraphQL schema, resolvers binding and HTTP endpoint for roster.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on GET /graphql)
//! roster serve --port 4000
//!
//! # Execute a query from CLI
//! roster query '{ characters { id name movie } }'
//!
//! # Execute a mutation from CLI
//! roster mutate 'addCharacter(name: "Woody", movie: "Toy Story") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries** (`RootQueryType`): `character`, `characters`
//! - **Mutations** (`Mutation`): `addCharacter`, `updateCharacter`, `deleteCharacter`
//!
//! Every root field is nullable. A field whose resolver fails comes back as
//! `null` with an entry in `errors`; the other fields of the same request
//! are unaffected.

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, RosterSchema, SharedStore, build_schema, execute, sdl};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::*;
