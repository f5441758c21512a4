//! Domain layer - Core business logic and entities

pub mod error;
pub mod hero;
pub mod squadron;
pub mod storage;

pub use error::DomainError;
pub use hero::{Hero, HeroAlias, HeroError, HeroRepository};
pub use squadron::{Squadron, SquadronError, SquadronMember, SquadronName, SquadronRepository};
pub use storage::{Storage, StorageEntity, StorageKey};
