//! Hero infrastructure - storage-backed repository and the hero store service

mod repository;
mod service;

pub use repository::StorageHeroRepository;
pub use service::{CreateHeroRequest, HeroService};
