use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

/// Boundary error taxonomy. The core read/write path can only produce
/// `NotFound`; validation failures are raised before requests reach it, and
/// the access variants belong to the write-capability stub.
#[derive(Debug, Display)]
pub enum AppError {
    #[display("Validation failed")]
    ValidationError(Vec<FieldError>),

    #[display("Not found: {_0}")]
    NotFound(String),

    #[display("Unauthorized access")]
    UnauthorizedAccess,

    #[display("Forbidden access")]
    ForbiddenAccess,

    #[display("Internal server error: {_0}")]
    InternalError(String),
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "success": false,
                    "error": "Validation failed",
                    "details": errors
                })
            }
            _ => {
                serde_json::json!({
                    "success": false,
                    "error": self.to_string()
                })
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnauthorizedAccess => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenAccess => StatusCode::FORBIDDEN,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        AppError::ValidationError(field_errors)
    }
}
