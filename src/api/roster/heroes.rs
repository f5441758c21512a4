//! Superhero endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, SuccessResponse};
use crate::domain::{Hero, HeroError};
use crate::infrastructure::hero::CreateHeroRequest;

/// Request to create a new hero. Field names match case-insensitively in
/// the two spellings clients use.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHeroApiRequest {
    #[serde(default, alias = "Alias")]
    pub alias: Option<String>,
    #[serde(default, alias = "Origin")]
    pub origin: Option<String>,
    #[serde(default, alias = "ApprovalRate")]
    pub approval_rate: Option<String>,
    #[serde(default, alias = "Archenemy")]
    pub archenemy: Option<String>,
}

/// Hero as rendered by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroResponse {
    pub alias: String,
    pub origin: Option<String>,
    pub approval_rate: Option<String>,
    pub archenemy: Option<String>,
}

impl From<&Hero> for HeroResponse {
    fn from(hero: &Hero) -> Self {
        Self {
            alias: hero.alias().to_string(),
            origin: hero.origin().map(String::from),
            approval_rate: hero.approval_rate().map(String::from),
            archenemy: hero.archenemy().map(String::from),
        }
    }
}

/// GET /api/superhero
pub async fn list_heroes(
    State(state): State<AppState>,
) -> Result<Json<Vec<HeroResponse>>, ApiError> {
    debug!("Listing heroes");

    let heroes = state.hero_service.list().await?;

    Ok(Json(heroes.iter().map(HeroResponse::from).collect()))
}

/// GET /api/superhero/{alias}
pub async fn get_hero(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Json<HeroResponse>, ApiError> {
    let hero = state.hero_service.find(&alias).await?;

    Ok(Json(HeroResponse::from(&hero)))
}

/// POST /api/superhero
pub async fn create_hero(
    State(state): State<AppState>,
    Json(request): Json<CreateHeroApiRequest>,
) -> Result<(StatusCode, Json<SuccessResponse>), ApiError> {
    let service_request = CreateHeroRequest {
        alias: request.alias.unwrap_or_default(),
        origin: request.origin,
        approval_rate: request.approval_rate,
        archenemy: request.archenemy,
    };

    state.hero_service.create(service_request).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new("New superhero successfully added")),
    ))
}

/// PUT /api/superhero/{alias}/{villain}
pub async fn set_archenemy(
    State(state): State<AppState>,
    Path((alias, villain)): Path<(String, String)>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state
        .hero_service
        .set_archenemy(&alias, &villain)
        .await
        .map_err(|err| match err {
            HeroError::NotFound(_) => ApiError::not_found("superhero alias could not be found"),
            other => ApiError::from(other),
        })?;

    Ok(Json(SuccessResponse::new(
        "superheros archenemy successfully updated",
    )))
}

/// DELETE /api/superhero/{alias}
pub async fn delete_hero(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.hero_service.delete(&alias).await?;

    Ok(Json(SuccessResponse::new("superhero successfully deleted")))
}
