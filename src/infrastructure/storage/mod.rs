//! Storage infrastructure - Storage implementations

mod in_memory;
mod lock;

pub use in_memory::InMemoryStorage;
pub use lock::RosterLock;
