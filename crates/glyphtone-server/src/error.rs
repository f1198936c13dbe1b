use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use glyphtone_core::ConvertError;
use serde::Serialize;

/// Errors surfaced to HTTP clients as `{"error": <message>}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid code. Please provide a valid number.")]
    InvalidCode(#[from] ConvertError),
    #[error("Invalid character code. Please provide a valid hexadecimal or decimal code.")]
    InvalidCharacterCode(String),
    #[error("Not found.")]
    NotFound,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCode(_) | Self::InvalidCharacterCode(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidCode(source) => tracing::debug!("rejected conversion input: {source}"),
            Self::InvalidCharacterCode(input) => {
                tracing::debug!(input = input.as_str(), "rejected character code");
            }
            Self::NotFound => {}
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let invalid = ApiError::from(ConvertError::InvalidCodePoint("abc".into()));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        let bad_hex = ApiError::InvalidCharacterCode("zz".into());
        assert_eq!(bad_hex.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_messages_match_the_http_contract() {
        let bad_hex = ApiError::InvalidCharacterCode("zz".into());
        assert_eq!(
            bad_hex.to_string(),
            "Invalid character code. Please provide a valid hexadecimal or decimal code."
        );
        assert_eq!(ApiError::NotFound.to_string(), "Not found.");
    }
}
