//! Data models for roster.
//!
//! - [`Character`]: the single persisted entity, one row of the `characters` table

mod character;

pub use character::Character;
