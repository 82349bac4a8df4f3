//! Typed failures returned by the workout store.

use std::fmt;

use thiserror::Error;

/// Which kind of record a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Program,
    Exercise,
    Set,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Program => "Program",
            Entity::Exercise => "Exercise",
            Entity::Set => "Set",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The referenced id does not exist in the current store state.
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },
    /// A set mutation was given a negative (or non-finite) weight or negative reps.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl StoreError {
    pub(crate) fn not_found(entity: Entity, id: &str) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// True when this is a `NotFound` for the given entity kind.
    pub fn is_not_found(&self, kind: Entity) -> bool {
        matches!(self, StoreError::NotFound { entity, .. } if *entity == kind)
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = StoreError::not_found(Entity::Exercise, "abc");
        assert_eq!(err.to_string(), "Exercise not found: abc");
        assert!(err.is_not_found(Entity::Exercise));
        assert!(!err.is_not_found(Entity::Set));
    }
}
