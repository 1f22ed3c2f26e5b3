use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use event_admin_domain::ServiceError;

#[derive(serde::Serialize)]
struct JsonErrorResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    error: Option<String>,
}

impl ApiError {
    /// Maps a service failure to a response. Store failures get the
    /// endpoint's `failure_message` and carry the driver message in `error`.
    pub fn from_service(err: ServiceError, failure_message: &str) -> Self {
        match err {
            ServiceError::InvalidReference(msg) => Self {
                status: StatusCode::BAD_REQUEST,
                message: msg,
                error: None,
            },
            ServiceError::PersistenceFailure(msg) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: failure_message.to_string(),
                error: Some(msg),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl ApiError {
    fn invalid_body(error: String) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid request body".to_string(),
            error: Some(error),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_body(rejection.body_text())
    }
}

/// The body was valid JSON but its fields have the wrong shape.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_body(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = JsonErrorResponse {
            success: false,
            message: self.message,
            error: self.error,
        };
        (self.status, Json(body)).into_response()
    }
}
