//! Squadron validation

use thiserror::Error;

/// Errors that can occur during squadron validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SquadronValidationError {
    #[error("Squadron name cannot be empty")]
    EmptyName,
}

/// Validate a squadron name
pub fn validate_squadron_name(name: &str) -> Result<(), SquadronValidationError> {
    if name.is_empty() {
        return Err(SquadronValidationError::EmptyName);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_squadron_name() {
        assert!(validate_squadron_name("JL").is_ok());
        assert!(validate_squadron_name("Justice League Dark").is_ok());
    }

    #[test]
    fn test_empty_squadron_name() {
        assert_eq!(
            validate_squadron_name(""),
            Err(SquadronValidationError::EmptyName)
        );
    }
}
