//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod middleware;
pub mod roster;
pub mod router;
pub mod state;
pub mod types;

pub use router::create_router;
pub use state::AppState;
