use std::fmt;

/// Root type an operation is exposed on.
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// The fixed set of operations the schema dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetById,
    List,
    Add,
    Update,
    Delete,
}

impl Operation {
    #[cfg(test)]
    pub const ALL: [Operation; 5] = [
        Operation::GetById,
        Operation::List,
        Operation::Add,
        Operation::Update,
        Operation::Delete,
    ];

    /// GraphQL field name the operation is published under
    pub fn field_name(self) -> &'static str {
        match self {
            Operation::GetById => "character",
            Operation::List => "characters",
            Operation::Add => "addCharacter",
            Operation::Update => "updateCharacter",
            Operation::Delete => "deleteCharacter",
        }
    }

    #[cfg(test)]
    pub fn kind(self) -> OperationKind {
        match self {
            Operation::GetById | Operation::List => OperationKind::Query,
            Operation::Add | Operation::Update | Operation::Delete => OperationKind::Mutation,
        }
    }

    #[cfg(test)]
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.field_name() == name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_field_name(op.field_name()), Some(op));
        }
        assert_eq!(Operation::from_field_name("createCharacter"), None);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Operation::GetById.kind(), OperationKind::Query);
        assert_eq!(Operation::List.kind(), OperationKind::Query);
        assert_eq!(Operation::Add.kind(), OperationKind::Mutation);
        assert_eq!(Operation::Update.kind(), OperationKind::Mutation);
        assert_eq!(Operation::Delete.kind(), OperationKind::Mutation);
    }
}
