//! Database schema definitions

/// SQL to create the characters table
pub const CREATE_CHARACTERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS characters (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    movie TEXT
)
"#;

pub const SELECT_BY_ID: &str = "SELECT id, name, movie FROM characters WHERE id = ?1";
pub const SELECT_ALL: &str = "SELECT id, name, movie FROM characters";
pub const INSERT: &str = "INSERT INTO characters (name, movie) VALUES (?1, ?2)";
pub const UPDATE: &str = "UPDATE characters SET name = ?1, movie = ?2 WHERE id = ?3";
pub const DELETE: &str = "DELETE FROM characters WHERE id = ?1";

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_CHARACTERS_TABLE]
}
