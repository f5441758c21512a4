//! Request and response types shared by the API handlers

pub mod error;
pub mod json;
pub mod response;

pub use error::{ApiError, ApiErrorCode, ApiErrorResponse};
pub use json::Json;
pub use response::SuccessResponse;
