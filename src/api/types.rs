// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Body of `POST /api/generate`. Flags travel as 0/1 integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Requested length; missing or out of range falls back to 12
    #[serde(default)]
    pub length: Option<i64>,
    #[serde(default)]
    pub include_uppercase: i64,
    #[serde(default)]
    pub include_lowercase: i64,
    #[serde(default)]
    pub include_numbers: i64,
    #[serde(default)]
    pub include_symbols: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Generated password
    pub password: String,
    /// Password strength score (0-100)
    pub score: i32,
    /// Recommendations for the generated password
    #[serde(default)]
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EvaluateRequest {
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EvaluateResponse {
    /// Password strength score (0-100)
    pub score: i32,
    /// Human-readable feedback, may contain markup
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StrengthenRequest {
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StrengthenResponse {
    pub strong_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn invalid_request() -> Self {
        Self { error: "Invalid request".to_string() }
    }
}
