//! Hero entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_hero_alias, HeroValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};

/// Hero alias - the unique key of a hero record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HeroAlias(String);

impl HeroAlias {
    /// Create a new HeroAlias after validation
    pub fn new(alias: impl Into<String>) -> Result<Self, HeroValidationError> {
        let alias = alias.into();
        validate_hero_alias(&alias)?;
        Ok(Self(alias))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HeroAlias {
    type Error = HeroValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HeroAlias> for String {
    fn from(alias: HeroAlias) -> Self {
        alias.0
    }
}

impl std::fmt::Display for HeroAlias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for HeroAlias {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Hero entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    alias: HeroAlias,
    origin: Option<String>,
    approval_rate: Option<String>,
    /// Free text, conventionally another hero's alias
    archenemy: Option<String>,
}

impl Hero {
    /// Create a hero with only an alias
    pub fn new(alias: HeroAlias) -> Self {
        Self {
            alias,
            origin: None,
            approval_rate: None,
            archenemy: None,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_approval_rate(mut self, approval_rate: impl Into<String>) -> Self {
        self.approval_rate = Some(approval_rate.into());
        self
    }

    /// Set the archenemy without checking it names a known hero.
    /// An empty value leaves the hero without an archenemy.
    pub fn with_archenemy(mut self, archenemy: impl Into<String>) -> Self {
        let archenemy = archenemy.into();
        self.archenemy = (!archenemy.is_empty()).then_some(archenemy);
        self
    }

    // Getters

    pub fn alias(&self) -> &HeroAlias {
        &self.alias
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn approval_rate(&self) -> Option<&str> {
        self.approval_rate.as_deref()
    }

    pub fn archenemy(&self) -> Option<&str> {
        self.archenemy.as_deref()
    }

    // Mutators

    /// Point the archenemy at another hero
    pub fn set_archenemy(&mut self, villain: &HeroAlias) {
        self.archenemy = Some(villain.as_str().to_string());
    }
}

impl StorageEntity for Hero {
    type Key = HeroAlias;

    fn key(&self) -> &Self::Key {
        &self.alias
    }
}
