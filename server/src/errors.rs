use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

/// Failure envelope. Every error body is `{"success": false, "message": ...}`;
/// business rejections keep HTTP 200 and signal failure through the envelope
/// alone, which is how the historical API behaved.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(json!({ "success": false, "message": self.message }));
        (self.status, body).into_response()
    }
}
