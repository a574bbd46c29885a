use serde::{Deserialize, Serialize};

/// A stored character row.
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// `name` and `movie` are free-form and may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub movie: Option<String>,
}

impl Character {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: None,
            movie: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_movie(mut self, movie: impl Into<String>) -> Self {
        self.movie = Some(movie.into());
        self
    }
}
