use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

// ── ServiceError ────────────────────────────────────────────────────

/// Unified service error type shared by all modules.
///
/// Each variant maps to a fixed HTTP status code and a kind prefix for the
/// plain-text response body:
///
/// ```text
/// Resource not found: Student not found
/// ```
///
/// Validation failures on form input never reach this type — handlers
/// re-render the form with field-level errors instead (HTTP 200).
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Resource does not exist. HTTP 404.
    #[error("{0}")]
    NotFound(String),

    /// Input data is invalid. HTTP 400.
    #[error("{0}")]
    BadRequest(String),

    /// Missing or invalid credentials. HTTP 401.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but not allowed. HTTP 403.
    #[error("{0}")]
    Forbidden(String),

    /// Conflicting state, e.g. deleting a class that is still referenced.
    /// HTTP 409.
    #[error("{0}")]
    Conflict(String),

    /// Catch-all for storage and internal failures. HTTP 500.
    #[error("{0}")]
    Unexpected(String),
}

impl ServiceError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body prefix naming the error kind.
    pub fn kind_prefix(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "Resource not found: ",
            ServiceError::BadRequest(_) => "Bad request: ",
            ServiceError::Unauthorized(_) => "Unauthorized: ",
            ServiceError::Forbidden(_) => "Forbidden: ",
            ServiceError::Conflict(_) => "Conflict: ",
            ServiceError::Unexpected(_) => "An unexpected error occurred: ",
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = format!("{}{}", self.kind_prefix(), self);
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_mapping() {
        assert_eq!(ServiceError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ServiceError::BadRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ServiceError::Unauthorized("x".into()).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ServiceError::Forbidden("x".into()).status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ServiceError::Conflict("x".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(ServiceError::Unexpected("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn kind_prefix_mapping() {
        assert_eq!(ServiceError::NotFound("x".into()).kind_prefix(), "Resource not found: ");
        assert_eq!(ServiceError::BadRequest("x".into()).kind_prefix(), "Bad request: ");
        assert_eq!(ServiceError::Unauthorized("x".into()).kind_prefix(), "Unauthorized: ");
        assert_eq!(ServiceError::Forbidden("x".into()).kind_prefix(), "Forbidden: ");
        assert_eq!(ServiceError::Conflict("x".into()).kind_prefix(), "Conflict: ");
        assert_eq!(
            ServiceError::Unexpected("x".into()).kind_prefix(),
            "An unexpected error occurred: "
        );
    }

    #[test]
    fn response_status() {
        let resp = ServiceError::NotFound("Student not found".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_display_is_just_message() {
        assert_eq!(ServiceError::NotFound("Class not found".into()).to_string(), "Class not found");
        assert_eq!(ServiceError::Conflict("still referenced".into()).to_string(), "still referenced");
    }
}
