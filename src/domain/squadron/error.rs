//! Squadron operation errors

use thiserror::Error;

use super::validation::SquadronValidationError;
use crate::domain::DomainError;

/// Errors returned by squadron operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SquadronError {
    #[error("Invalid squadron name: {0}")]
    InvalidName(#[from] SquadronValidationError),

    #[error("Squadron '{0}' already exists")]
    DuplicateName(String),

    #[error("Squadron '{0}' not found")]
    NotFound(String),

    /// A proposed member alias does not name a known hero
    #[error("Squadron member '{0}' not found")]
    MemberNotFound(String),

    /// A proposed member is the archenemy of another member
    #[error("Squadron member '{0}' is the archenemy of another member")]
    ConflictingEnemy(String),

    #[error(transparent)]
    Storage(#[from] DomainError),
}

impl SquadronError {
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn member_not_found(alias: impl Into<String>) -> Self {
        Self::MemberNotFound(alias.into())
    }

    pub fn conflicting_enemy(alias: impl Into<String>) -> Self {
        Self::ConflictingEnemy(alias.into())
    }
}
