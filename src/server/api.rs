//! Request, response and error types for the HTTP API

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tokenizer::Encoding;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizeRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizeResponse {
    pub ids: Vec<u32>,
    pub attention_mask: Vec<u32>,
}

impl From<Encoding> for TokenizeResponse {
    fn from(encoding: Encoding) -> Self {
        Self {
            ids: encoding.ids,
            attention_mask: encoding.attention_mask,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Failures surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("Input is {len} bytes, limit is {max}")]
    InputTooLarge { len: usize, max: usize },

    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) | ApiError::InputTooLarge { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Tokenization(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        if self.status().is_client_error() {
            "invalid_request_error"
        } else {
            "server_error"
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "invalid_body",
            ApiError::InputTooLarge { .. } => "input_too_large",
            ApiError::Tokenization(_) => "tokenization_error",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("Rejected request: {}", self);
        }

        let body = ErrorBody {
            error: ErrorDetail {
                message: self.to_string(),
                kind: self.kind().to_string(),
                code: self.code().to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_422() {
        assert_eq!(
            ApiError::InvalidRequest("missing field `text`".to_string()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::InputTooLarge { len: 10, max: 5 }.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_server_errors_map_to_500() {
        let err = ApiError::Tokenization("bad state".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), "server_error");
        assert_eq!(err.code(), "tokenization_error");
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: ErrorDetail {
                message: "m".to_string(),
                kind: "invalid_request_error".to_string(),
                code: "invalid_body".to_string(),
            },
        };
        let json = serde_json::to_value(&body).expect("serialize error body");
        assert_eq!(json["error"]["type"], "invalid_request_error");
        assert_eq!(json["error"]["code"], "invalid_body");
    }

    #[test]
    fn test_request_ignores_unknown_fields() {
        let req: TokenizeRequest =
            serde_json::from_str(r#"{"text": "hi", "extra": 1}"#).expect("parse request");
        assert_eq!(req.text, "hi");
    }

    #[test]
    fn test_request_rejects_non_string_text() {
        assert!(serde_json::from_str::<TokenizeRequest>(r#"{"text": 42}"#).is_err());
        assert!(serde_json::from_str::<TokenizeRequest>(r#"{}"#).is_err());
    }
}
