//! Success response body

use serde::{Deserialize, Serialize};

/// Success marker: `{"Success": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    #[serde(rename = "Success")]
    pub success: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serialization() {
        let json = serde_json::to_string(&SuccessResponse::new("squadron successfully created"))
            .unwrap();
        assert_eq!(json, r#"{"Success":"squadron successfully created"}"#);
    }
}
