//! Opaque identifiers supplied by the caller.
//!
//! The engine never mints identifiers of its own; it only validates that the
//! caller handed it something non-empty, and derives child ids (companion
//! stars, secondary bodies) from the parent id it was given.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! define_id {
    ($name:ident, $field:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wrap a caller-supplied id, rejecting empty or blank strings.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_parameter($field, "id cannot be empty"));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(StarSystemId, "star_system_id");
define_id!(StarId, "star_id");
define_id!(WorldId, "world_id");
define_id!(BodyId, "body_id");

impl StarSystemId {
    /// Id of the system's primary star.
    pub fn primary_star(&self) -> StarId {
        StarId(format!("{}/primary", self.0))
    }

    /// Id of the n-th companion star (1-based) in this system.
    pub fn companion(&self, index: usize) -> StarId {
        StarId(format!("{}/companion-{}", self.0, index))
    }

    /// Id of the secondary body in the given orbit slot.
    pub fn body(&self, kind: &str, orbit: u8) -> BodyId {
        BodyId(format!("{}/{}-{}", self.0, kind, orbit))
    }
}

impl BodyId {
    /// Id of a moon orbiting this body.
    pub fn moon(&self, orbit: u8) -> BodyId {
        BodyId(format!("{}/moon-{}", self.0, orbit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_names_the_field() {
        let err = WorldId::new("   ").unwrap_err();
        assert_eq!(err.field(), Some("world_id"));

        let err = StarSystemId::new("").unwrap_err();
        assert_eq!(err.field(), Some("star_system_id"));
    }

    #[test]
    fn ids_are_trimmed() {
        let id = StarSystemId::new("  sol  ").unwrap();
        assert_eq!(id.as_str(), "sol");
        assert_eq!(id.to_string(), "sol");
    }

    #[test]
    fn derived_ids_are_scoped_to_parent() {
        let system = StarSystemId::new("sys-1").unwrap();
        assert_eq!(system.companion(2).as_str(), "sys-1/companion-2");

        let planet = system.body("planet", 5);
        assert_eq!(planet.as_str(), "sys-1/planet-5");
        assert_eq!(planet.moon(1).as_str(), "sys-1/planet-5/moon-1");
    }

    #[test]
    fn deserializing_empty_id_fails() {
        let parsed: Result<WorldId, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());

        let parsed: WorldId = serde_json::from_str("\"w-1\"").unwrap();
        assert_eq!(parsed.as_str(), "w-1");
    }
}
