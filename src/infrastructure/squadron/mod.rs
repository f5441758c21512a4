//! Squadron infrastructure - storage-backed repository and squadron service

mod repository;
mod service;

pub use repository::StorageSquadronRepository;
pub use service::{CreateSquadronRequest, SquadronService};
