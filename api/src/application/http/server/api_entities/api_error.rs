use axum::{
    Json,
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use oxalens_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid query parameters")]
    ValidationError(ValidationErrors),

    #[error("{0}")]
    InternalServerError(String),
}

/// Body of every error reply.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Not found".to_string()),
            CoreError::AlreadyExists => ApiError::BadRequest("Already exists".to_string()),
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::ExternalServiceError(_) | CoreError::InternalServerError => {
                tracing::error!("Unhandled core error: {}", error);
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) | ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        let errors = match self {
            ApiError::ValidationError(errors) => serde_json::to_value(errors).ok(),
            _ => None,
        };

        (status, Json(ApiErrorResponse { message, errors })).into_response()
    }
}

/// Query extractor that runs `validator` rules after deserializing.
#[derive(Debug, Clone)]
pub struct ValidateQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidateQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(ApiError::ValidationError)?;

        Ok(ValidateQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_of(error: ApiError) -> (StatusCode, ApiErrorResponse) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_shape() {
        let (status, body) = body_of(ApiError::NotFound("Food not found".to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Food not found");
        assert!(body.errors.is_none());
    }

    #[tokio::test]
    async fn test_internal_core_errors_are_generic() {
        let error = ApiError::from(CoreError::ExternalServiceError(
            "secret upstream detail".to_string(),
        ));
        let (status, body) = body_of(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal server error");
    }

    #[tokio::test]
    async fn test_invalid_core_error_is_bad_request() {
        let (status, _) = body_of(ApiError::from(CoreError::Invalid("bad".to_string()))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
