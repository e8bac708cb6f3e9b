use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum ScanlinkError {
    Config(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Validation(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Serialization(String),
}

impl ScanlinkError {
    /// Stable error code for logs and operator tooling
    pub fn code(&self) -> &'static str {
        match self {
            ScanlinkError::Config(_) => "E000",
            ScanlinkError::DatabaseConfig(_) => "E001",
            ScanlinkError::DatabaseConnection(_) => "E002",
            ScanlinkError::DatabaseOperation(_) => "E003",
            ScanlinkError::Validation(_) => "E004",
            ScanlinkError::NotFound(_) => "E005",
            ScanlinkError::Conflict(_) => "E006",
            ScanlinkError::Unauthorized(_) => "E007",
            ScanlinkError::Serialization(_) => "E008",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ScanlinkError::Config(_) => "Configuration Error",
            ScanlinkError::DatabaseConfig(_) => "Database Configuration Error",
            ScanlinkError::DatabaseConnection(_) => "Database Connection Error",
            ScanlinkError::DatabaseOperation(_) => "Database Operation Error",
            ScanlinkError::Validation(_) => "Validation Error",
            ScanlinkError::NotFound(_) => "Resource Not Found",
            ScanlinkError::Conflict(_) => "Conflict",
            ScanlinkError::Unauthorized(_) => "Unauthorized",
            ScanlinkError::Serialization(_) => "Serialization Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ScanlinkError::Config(msg) => msg,
            ScanlinkError::DatabaseConfig(msg) => msg,
            ScanlinkError::DatabaseConnection(msg) => msg,
            ScanlinkError::DatabaseOperation(msg) => msg,
            ScanlinkError::Validation(msg) => msg,
            ScanlinkError::NotFound(msg) => msg,
            ScanlinkError::Conflict(msg) => msg,
            ScanlinkError::Unauthorized(msg) => msg,
            ScanlinkError::Serialization(msg) => msg,
        }
    }

    /// HTTP status the error maps to at the API boundary.
    ///
    /// The four expected outcomes (validation, not-found, conflict,
    /// unauthorized) keep their detail; everything else is reported as a
    /// generic 500 without internal detail.
    pub fn http_status(&self) -> StatusCode {
        match self {
            ScanlinkError::Validation(_) => StatusCode::BAD_REQUEST,
            ScanlinkError::NotFound(_) => StatusCode::NOT_FOUND,
            ScanlinkError::Conflict(_) => StatusCode::CONFLICT,
            ScanlinkError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ScanlinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ScanlinkError {}

impl ScanlinkError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        ScanlinkError::Config(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        ScanlinkError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        ScanlinkError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        ScanlinkError::DatabaseOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ScanlinkError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ScanlinkError::NotFound(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        ScanlinkError::Conflict(msg.into())
    }

    pub fn unauthorized<T: Into<String>>(msg: T) -> Self {
        ScanlinkError::Unauthorized(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ScanlinkError::Serialization(msg.into())
    }
}

impl From<sea_orm::DbErr> for ScanlinkError {
    fn from(err: sea_orm::DbErr) -> Self {
        ScanlinkError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ScanlinkError {
    fn from(err: serde_json::Error) -> Self {
        ScanlinkError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScanlinkError>;
