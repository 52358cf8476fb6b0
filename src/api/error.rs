use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::advisor::AdviceError;
use crate::provider::ProviderError;

/// Stable codes clients can match on; messages may be reworded.
pub mod error_code {
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const NO_MODEL_DETECTED: &str = "NO_MODEL_DETECTED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const UPSTREAM_UNAVAILABLE: &str = "UPSTREAM_UNAVAILABLE";
    pub const UPSTREAM_AUTH_FAILED: &str = "UPSTREAM_AUTH_FAILED";
    pub const UPSTREAM_QUOTA_EXCEEDED: &str = "UPSTREAM_QUOTA_EXCEEDED";
}

/// Errors returned by HTTP handlers. The body is always
/// `{"code": ..., "message": ..., "hint": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Could not detect a Samsung phone model in your question.")]
    NoModelDetected,
    #[error("{0}")]
    NotFound(String),
    #[error("The review service is currently unavailable.")]
    UpstreamUnavailable,
    #[error("The review service rejected our credentials.")]
    UpstreamAuthFailed,
    #[error("The review service quota has been exceeded.")]
    UpstreamQuotaExceeded,
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => error_code::VALIDATION_FAILED,
            ApiError::NoModelDetected => error_code::NO_MODEL_DETECTED,
            ApiError::NotFound(_) => error_code::NOT_FOUND,
            ApiError::UpstreamUnavailable => error_code::UPSTREAM_UNAVAILABLE,
            ApiError::UpstreamAuthFailed => error_code::UPSTREAM_AUTH_FAILED,
            ApiError::UpstreamQuotaExceeded => error_code::UPSTREAM_QUOTA_EXCEEDED,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::NoModelDetected => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UpstreamQuotaExceeded => StatusCode::PAYMENT_REQUIRED,
            ApiError::UpstreamUnavailable | ApiError::UpstreamAuthFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "Send a JSON body like {\"question\": \"Tell me about the Galaxy S24 Ultra\"}.",
            ApiError::NoModelDetected => {
                "Please mention a specific model (e.g., S24 Ultra, Galaxy Z Fold 5)."
            }
            ApiError::NotFound(_) => {
                "Try another model or check the model name. GET /phones lists every phone in the catalog."
            }
            ApiError::UpstreamUnavailable => "Please try again in a moment.",
            ApiError::UpstreamAuthFailed => "The operator should check the provider API key.",
            ApiError::UpstreamQuotaExceeded => {
                "The provider account is out of credit or rate limited; try again later."
            }
        }
    }
}

impl From<AdviceError> for ApiError {
    fn from(err: AdviceError) -> Self {
        match err {
            AdviceError::EmptyQuestion => {
                ApiError::Validation("Question must not be empty.".to_string())
            }
            AdviceError::NoModelDetected => ApiError::NoModelDetected,
            AdviceError::ModelNotInCatalog(model) => ApiError::NotFound(format!(
                "Sorry, I couldn't find detailed information about the {} in my database.",
                model
            )),
            AdviceError::Provider(ProviderError::Unavailable { .. }) => ApiError::UpstreamUnavailable,
            AdviceError::Provider(ProviderError::AuthFailed { .. }) => ApiError::UpstreamAuthFailed,
            AdviceError::Provider(ProviderError::QuotaExceeded { .. }) => {
                ApiError::UpstreamQuotaExceeded
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
            "hint": self.hint(),
        });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_error(kind: fn(String, String) -> ProviderError) -> AdviceError {
        AdviceError::Provider(kind("OpenAI".to_string(), "sk-leaky detail".to_string()))
    }

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (AdviceError::EmptyQuestion, StatusCode::BAD_REQUEST),
            (AdviceError::NoModelDetected, StatusCode::BAD_REQUEST),
            (AdviceError::ModelNotInCatalog("Galaxy S99".into()), StatusCode::NOT_FOUND),
            (
                provider_error(|provider, detail| ProviderError::Unavailable { provider, detail }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                provider_error(|provider, detail| ProviderError::AuthFailed { provider, detail }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                provider_error(|provider, detail| ProviderError::QuotaExceeded { provider, detail }),
                StatusCode::PAYMENT_REQUIRED,
            ),
        ];

        for (advice_err, expected) in cases {
            assert_eq!(ApiError::from(advice_err).status_code(), expected);
        }
    }

    #[test]
    fn test_provider_detail_not_exposed() {
        let err = ApiError::from(provider_error(|provider, detail| ProviderError::AuthFailed {
            provider,
            detail,
        }));
        assert!(!err.to_string().contains("sk-leaky"));
        assert_eq!(err.error_code(), error_code::UPSTREAM_AUTH_FAILED);
    }
}
