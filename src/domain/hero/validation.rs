//! Hero validation

use thiserror::Error;

/// Errors that can occur during hero validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeroValidationError {
    #[error("Hero alias cannot be empty")]
    EmptyAlias,
}

/// Validate a hero alias
///
/// Aliases are free text; only presence is checked.
pub fn validate_hero_alias(alias: &str) -> Result<(), HeroValidationError> {
    if alias.is_empty() {
        return Err(HeroValidationError::EmptyAlias);
    }

    Ok(())
}
