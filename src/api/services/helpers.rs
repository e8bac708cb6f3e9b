//! API helper functions

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;
use tracing::error;

use crate::errors::ScanlinkError;

use super::error_code::ErrorCode;
use super::types::ApiResponse;

/// Build a JSON envelope response
pub fn json_response<T: Serialize>(
    status: StatusCode,
    code: ErrorCode,
    message: impl Into<String>,
    data: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            code: code as i32,
            message: message.into(),
            data,
        })
}

pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, ErrorCode::Success, "OK", Some(data))
}

pub fn created_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::CREATED, ErrorCode::Success, "Created", Some(data))
}

pub fn error_response(status: StatusCode, error_code: ErrorCode, message: &str) -> HttpResponse {
    json_response::<()>(status, error_code, message, None)
}

/// Build an error response from a ScanlinkError.
///
/// Expected outcomes keep their message; everything else is logged for
/// operators and reported generically, without internal detail.
pub fn error_from_scanlink(err: &ScanlinkError) -> HttpResponse {
    let status = err.http_status();
    let error_code = ErrorCode::from(err);

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("[{}] {}", err.code(), err.format_simple());
        return error_response(status, error_code, "Internal server error");
    }

    error_response(status, error_code, err.message())
}

/// Unified Result -> HttpResponse conversion (200 OK on success)
pub fn api_result<T: Serialize>(result: crate::errors::Result<T>) -> HttpResponse {
    match result {
        Ok(data) => success_response(data),
        Err(e) => error_from_scanlink(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let response = success_response("data");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_created_response() {
        let response = created_response("data");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_error_response_statuses() {
        let validation = ScanlinkError::validation("bad label");
        assert_eq!(
            error_from_scanlink(&validation).status(),
            StatusCode::BAD_REQUEST
        );

        let not_found = ScanlinkError::not_found("no such owner");
        assert_eq!(
            error_from_scanlink(&not_found).status(),
            StatusCode::NOT_FOUND
        );

        let conflict = ScanlinkError::conflict("slug taken");
        assert_eq!(error_from_scanlink(&conflict).status(), StatusCode::CONFLICT);

        let database = ScanlinkError::database_operation("connection reset");
        assert_eq!(
            error_from_scanlink(&database).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
