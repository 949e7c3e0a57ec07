//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use quicktodo_domain::error::{TodoError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps failures to an HTTP response with appropriate status code.
pub enum ApiError {
    /// An error raised by the application or domain layer.
    Domain(TodoError),
    /// The request body could not be decoded into the expected shape.
    /// Nothing has touched storage at this point.
    Payload(JsonRejection),
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Payload(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Domain(TodoError::Validation(err)) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Domain(TodoError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(TodoError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Payload(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quicktodo_domain::error::NotFoundError;

    #[test]
    fn should_map_not_found_to_404() {
        let err = ApiError::from(TodoError::from(NotFoundError {
            entity: "Todo",
            id: "9".to_string(),
        }));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_validation_to_400() {
        let err = ApiError::from(ValidationError::EmptyTitle);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_storage_to_500() {
        let err = ApiError::from(TodoError::Storage(Box::new(std::io::Error::other("boom"))));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
