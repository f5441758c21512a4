//! Squadron entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_squadron_name, SquadronValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};

/// Squadron name - the unique key of a squadron
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SquadronName(String);

impl SquadronName {
    /// Create a new SquadronName after validation
    pub fn new(name: impl Into<String>) -> Result<Self, SquadronValidationError> {
        let name = name.into();
        validate_squadron_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SquadronName {
    type Error = SquadronValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SquadronName> for String {
    fn from(name: SquadronName) -> Self {
        name.0
    }
}

impl std::fmt::Display for SquadronName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for SquadronName {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Reference to a hero by alias.
///
/// Only checked against the hero store when the squadron is created; the
/// hero may be deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadronMember {
    alias: String,
}

impl SquadronMember {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }
}

/// Squadron entity. Membership is fixed once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Squadron {
    name: SquadronName,
    members: Vec<SquadronMember>,
}

impl Squadron {
    /// Create a squadron, keeping members in the given order
    pub fn new<I, S>(name: SquadronName, member_aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            members: member_aliases.into_iter().map(SquadronMember::new).collect(),
        }
    }

    pub fn name(&self) -> &SquadronName {
        &self.name
    }

    pub fn members(&self) -> &[SquadronMember] {
        &self.members
    }

    pub fn member_aliases(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(SquadronMember::alias)
    }

    pub fn has_member(&self, alias: &str) -> bool {
        self.member_aliases().any(|member| member == alias)
    }
}

impl StorageEntity for Squadron {
    type Key = SquadronName;

    fn key(&self) -> &Self::Key {
        &self.name
    }
}
