//! Errors returned by the generators.

use starsmith_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
    #[error("No free orbit slot in star system {star_system_id} ({capacity} slots)")]
    NoAvailableOrbit { star_system_id: String, capacity: u8 },
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl GenerationError {
    pub fn invalid_parameter(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// True when a system ran out of orbit slots.
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::NoAvailableOrbit { .. })
    }

    /// The input field an error points at, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { field, .. } => Some(field),
            Self::Domain(err) => err.field(),
            Self::NoAvailableOrbit { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_is_read_through_domain_errors() {
        let err: GenerationError = DomainError::invalid_parameter("grade", "too high").into();
        assert_eq!(err.field(), Some("grade"));
        assert!(!err.is_capacity());
    }

    #[test]
    fn capacity_errors_are_distinguished() {
        let err = GenerationError::NoAvailableOrbit {
            star_system_id: "sys".to_string(),
            capacity: 12,
        };
        assert!(err.is_capacity());
        assert_eq!(err.field(), None);
        assert_eq!(
            err.to_string(),
            "No free orbit slot in star system sys (12 slots)"
        );
    }
}
