//! Squadron domain module
//!
//! A squadron is a named, ordered group of hero references. No two members
//! may be archenemies of each other at creation time.

mod entity;
mod error;
mod repository;
mod validation;

pub use entity::{Squadron, SquadronMember, SquadronName};
pub use error::SquadronError;
pub use repository::SquadronRepository;
pub use validation::{validate_squadron_name, SquadronValidationError};

#[cfg(test)]
pub use repository::MockSquadronRepository;
