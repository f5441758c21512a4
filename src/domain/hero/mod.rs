//! Hero domain module
//!
//! A hero is identified by its alias. The archenemy field is free text and is
//! only checked against known heroes when changed through the store.

mod entity;
mod error;
mod repository;
mod validation;

pub use entity::{Hero, HeroAlias};
pub use error::HeroError;
pub use repository::HeroRepository;
pub use validation::{validate_hero_alias, HeroValidationError};

#[cfg(test)]
pub use repository::MockHeroRepository;
