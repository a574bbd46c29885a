//! Resolver algorithms for the character operations.
//!
//! Each resolver maps one [`Operation`] and its arguments to a result by
//! calling the [`CharacterStore`](crate::storage::CharacterStore) primitives,
//! awaiting them one after another. A store failure is returned as-is; a
//! missing row is `Ok(None)`.
//!
//! Multi-step mutations are not atomic. Between two awaited store calls other
//! requests may run, so e.g. a concurrent delete can land between
//! `deleteCharacter`'s read and its delete.
//!
//! ## Id arguments
//!
//! The `id` argument is optional at the API level. When it is absent, or is
//! not a number with an integral value, it matches no row: reads return `None`
//! and `update`/`delete` are no-ops that return `None`. The store is not called
//! in that case. Integral decimal forms such as `"1.0"` or `"1e2"` address the
//! row with that integer key, as an integer column comparison in SQLite would.

mod mutation;
mod operation;
mod query;

pub use mutation::{add_character, delete_character, update_character};
pub use operation::Operation;
#[cfg(test)]
pub use operation::OperationKind;
pub use query::{character, characters};

/// Turn a client-supplied id into a row key, if it can match any row.
pub fn parse_id(id: Option<&str>) -> Option<i64> {
    let raw = id?.trim();
    if let Ok(key) = raw.parse::<i64>() {
        return Some(key);
    }
    let value = raw.parse::<f64>().ok()?;
    // Only values that survive the round trip to i64 unchanged
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}
