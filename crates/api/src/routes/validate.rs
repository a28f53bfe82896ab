use axum::{http::StatusCode, Json};
use plan_core::{validate, PlanRequest, ValidationError};
use serde::Serialize;

#[derive(Serialize, utoipa::ToSchema)]
pub struct ValidationReport {
    pub ok: bool,
    pub errors: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/v1/validate",
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Validation result", body = ValidationReport)
    )
)]
pub async fn validate_handler(Json(req): Json<PlanRequest>) -> (StatusCode, Json<ValidationReport>) {
    match validate(&req) {
        Ok(()) => (
            StatusCode::OK,
            Json(ValidationReport {
                ok: true,
                errors: vec![],
            }),
        ),
        Err(ValidationError::Msg(msg)) => {
            let errors = msg
                .split(';')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            (StatusCode::OK, Json(ValidationReport { ok: false, errors }))
        }
    }
}
