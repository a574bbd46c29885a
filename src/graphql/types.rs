use crate::model::Character as ModelCharacter;
use async_graphql::{ID, SimpleObject};

/// A character from a movie
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct Character {
    pub id: Option<ID>,
    pub name: Option<String>,
    pub movie: Option<String>,
}

impl From<ModelCharacter> for Character {
    fn from(c: ModelCharacter) -> Self {
        Self {
            id: Some(ID::from(c.id.to_string())),
            name: c.name,
            movie: c.movie,
        }
    }
}
