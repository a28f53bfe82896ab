use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Caller-level input errors, rendered as the `{"success": false}` shape
/// the client expects.
#[derive(Debug)]
pub struct ApiError(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "success": false, "error": self.0 })),
        )
            .into_response()
    }
}
