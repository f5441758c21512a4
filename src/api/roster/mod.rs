//! Roster API: superhero and squadron endpoints

pub mod heroes;
pub mod squadrons;

use axum::{
    routing::{get, put},
    Router,
};

use super::state::AppState;

/// Create the roster router, mounted under `/api`
pub fn create_roster_router() -> Router<AppState> {
    Router::new()
        // Superheroes
        .route(
            "/superhero",
            get(heroes::list_heroes).post(heroes::create_hero),
        )
        .route(
            "/superhero/{alias}",
            get(heroes::get_hero).delete(heroes::delete_hero),
        )
        .route("/superhero/{alias}/{villain}", put(heroes::set_archenemy))
        // Squadrons
        .route(
            "/squadron",
            get(squadrons::list_squadrons).post(squadrons::create_squadron),
        )
        .route("/squadron/{name}", get(squadrons::get_squadron))
        .route(
            "/squadron/{name}/candidates",
            get(squadrons::list_candidates),
        )
}
