//! Squadron endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, SuccessResponse};
use crate::domain::Squadron;
use crate::infrastructure::squadron::CreateSquadronRequest;

/// A squad entry: `{"Alias": "Batman"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadMember {
    #[serde(rename = "Alias", alias = "alias", default)]
    pub alias: String,
}

/// Request to create a squadron
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSquadronApiRequest {
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Squad")]
    pub squad: Vec<SquadMember>,
}

/// Squadron as rendered by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadronResponse {
    pub name: String,
    pub squad: Vec<SquadMember>,
}

impl From<&Squadron> for SquadronResponse {
    fn from(squadron: &Squadron) -> Self {
        Self {
            name: squadron.name().to_string(),
            squad: squadron
                .member_aliases()
                .map(|alias| SquadMember {
                    alias: alias.to_string(),
                })
                .collect(),
        }
    }
}

/// POST /api/squadron
pub async fn create_squadron(
    State(state): State<AppState>,
    Json(request): Json<CreateSquadronApiRequest>,
) -> Result<(StatusCode, Json<SuccessResponse>), ApiError> {
    let service_request = CreateSquadronRequest {
        name: request.name,
        members: request.squad.into_iter().map(|m| m.alias).collect(),
    };

    state.squadron_service.create(service_request).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new("squadron successfully created")),
    ))
}

/// GET /api/squadron
pub async fn list_squadrons(
    State(state): State<AppState>,
) -> Result<Json<Vec<SquadronResponse>>, ApiError> {
    debug!("Listing squadrons");

    let squadrons = state.squadron_service.list().await?;

    Ok(Json(squadrons.iter().map(SquadronResponse::from).collect()))
}

/// GET /api/squadron/{name}
pub async fn get_squadron(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SquadronResponse>, ApiError> {
    let squadron = state.squadron_service.find(&name).await?;

    Ok(Json(SquadronResponse::from(&squadron)))
}

/// GET /api/squadron/{name}/candidates
pub async fn list_candidates(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let candidates = state.squadron_service.candidates(&name).await?;

    Ok(Json(candidates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SquadronName;

    #[test]
    fn test_create_request_deserialization() {
        let json = r#"{
            "name": "test2",
            "squad": [{"Alias": "Batman"}, {"Alias": "Lex Luthor"}]
        }"#;

        let request: CreateSquadronApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "test2");
        assert_eq!(
            request.squad,
            vec![
                SquadMember {
                    alias: "Batman".to_string()
                },
                SquadMember {
                    alias: "Lex Luthor".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_create_request_lowercase_keys() {
        let json = r#"{"Name": "JL", "Squad": [{"alias": "Batman"}]}"#;

        let request: CreateSquadronApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "JL");
        assert_eq!(request.squad[0].alias, "Batman");
    }

    #[test]
    fn test_create_request_defaults() {
        let request: CreateSquadronApiRequest = serde_json::from_str("{}").unwrap();
        assert!(request.name.is_empty());
        assert!(request.squad.is_empty());
    }

    #[test]
    fn test_squadron_response_serialization() {
        let squadron = Squadron::new(
            SquadronName::new("JL").unwrap(),
            ["Batman", "Wonder Woman"],
        );

        let json = serde_json::to_value(SquadronResponse::from(&squadron)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "JL",
                "squad": [{"Alias": "Batman"}, {"Alias": "Wonder Woman"}]
            })
        );
    }
}
