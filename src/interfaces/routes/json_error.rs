use actix_web::{
    error::JsonPayloadError, http::StatusCode, web, HttpResponse, ResponseError,
};
use serde_json::json;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| JsonError::from(err).into()),
    );
}

#[derive(Debug)]
pub struct JsonError {
    message: String,
    status: StatusCode,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status).json(json!({
            "success": false,
            "error": self.message
        }))
    }
}

impl From<JsonPayloadError> for JsonError {
    fn from(err: JsonPayloadError) -> Self {
        let message = match &err {
            JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
            JsonPayloadError::Deserialize(e) => format!("Invalid JSON body: {}", e),
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                "JSON payload too large".to_string()
            }
            other => format!("JSON error: {}", other),
        };

        JsonError {
            message,
            status: StatusCode::BAD_REQUEST,
        }
    }
}
