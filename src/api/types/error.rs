//! Error responses for the roster API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{HeroError, SquadronError};

/// Machine-readable error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    DuplicateAlias,
    DuplicateName,
    NotFound,
    MemberNotFound,
    ConflictingEnemy,
    InvalidRequest,
    Internal,
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateAlias => write!(f, "duplicate_alias"),
            Self::DuplicateName => write!(f, "duplicate_name"),
            Self::NotFound => write!(f, "not_found"),
            Self::MemberNotFound => write!(f, "member_not_found"),
            Self::ConflictingEnemy => write!(f, "conflicting_enemy"),
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// Error body: `{"Error": "...", "code": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(rename = "Error")]
    pub error: String,
    pub code: ApiErrorCode,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: message.into(),
                code,
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorCode::InvalidRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorCode::NotFound, message)
    }

    pub fn conflict(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, code, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorCode::Internal, message)
    }
}

pub const DUPLICATE_ALIAS_MESSAGE: &str = "superhero name already in user";
pub const HERO_NOT_FOUND_MESSAGE: &str = "superhero could not be found";
pub const DUPLICATE_SQUADRON_MESSAGE: &str = "Squadron already exists";
pub const SQUADRON_NOT_FOUND_MESSAGE: &str = "squadron with that name not found";
pub const MEMBER_NOT_FOUND_MESSAGE: &str = "One or more of the superheros could not be found";
pub const CONFLICTING_ENEMY_MESSAGE: &str =
    "Could not create squadron becuase a superhero was assigned to the same squad as their archenemy";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<HeroError> for ApiError {
    fn from(err: HeroError) -> Self {
        match err {
            HeroError::DuplicateAlias(_) => {
                Self::conflict(ApiErrorCode::DuplicateAlias, DUPLICATE_ALIAS_MESSAGE)
            }
            HeroError::NotFound(_) => Self::not_found(HERO_NOT_FOUND_MESSAGE),
            HeroError::VillainNotFound(_) => Self::not_found("villain alias could not be found"),
            HeroError::Storage(e) => {
                error!(error = %e, "Hero store failure");
                Self::internal(e.to_string())
            }
        }
    }
}

impl From<SquadronError> for ApiError {
    fn from(err: SquadronError) -> Self {
        match err {
            SquadronError::InvalidName(e) => Self::bad_request(e.to_string()),
            SquadronError::DuplicateName(_) => {
                Self::conflict(ApiErrorCode::DuplicateName, DUPLICATE_SQUADRON_MESSAGE)
            }
            SquadronError::NotFound(_) => Self::not_found(SQUADRON_NOT_FOUND_MESSAGE),
            SquadronError::MemberNotFound(_) => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiErrorCode::MemberNotFound,
                MEMBER_NOT_FOUND_MESSAGE,
            ),
            SquadronError::ConflictingEnemy(_) => {
                Self::conflict(ApiErrorCode::ConflictingEnemy, CONFLICTING_ENEMY_MESSAGE)
            }
            SquadronError::Storage(e) => {
                error!(error = %e, "Squadron store failure");
                Self::internal(e.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.response.code, self.response.error)
    }
}

impl std::error::Error for ApiError {}
