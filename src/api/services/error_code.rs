//! Unified API error code definitions

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::ScanlinkError;

/// API error code enum
///
/// Serialized as a number via serde_repr. Banded by domain:
/// - 0: success
/// - 1000-1099: generic errors
/// - 2000-2099: authentication errors
/// - 3000-3099: link errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // Generic errors 1000-1099
    BadRequest = 1000,
    Unauthorized = 1001,
    NotFound = 1004,
    InternalServerError = 1005,

    // Authentication errors 2000-2099
    TokenExpired = 2001,
    TokenInvalid = 2002,

    // Link errors 3000-3099
    SlugConflict = 3001,
    LinkInvalidPayload = 3002,
}

impl From<&ScanlinkError> for ErrorCode {
    fn from(err: &ScanlinkError) -> Self {
        match err {
            ScanlinkError::Validation(_) => ErrorCode::LinkInvalidPayload,
            ScanlinkError::NotFound(_) => ErrorCode::NotFound,
            ScanlinkError::Conflict(_) => ErrorCode::SlugConflict,
            ScanlinkError::Unauthorized(_) => ErrorCode::Unauthorized,
            _ => ErrorCode::InternalServerError,
        }
    }
}
