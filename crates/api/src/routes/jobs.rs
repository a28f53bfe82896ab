use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

#[utoipa::path(
    get,
    path = "/v1/jobs/{id}",
    params(("id" = String, Path, description = "Job ID")),
    responses((status = 200, description = "Job status", body = jobs::JobStatus))
)]
pub async fn status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    let st = state.jobs.get(&id);
    Json(match st {
        None => serde_json::json!({"status": "not_found"}),
        Some(s) => serde_json::to_value(s).unwrap_or_else(|_| serde_json::json!({"status": "error"})),
    })
}

#[utoipa::path(
    get,
    path = "/v1/jobs/{id}/result",
    params(("id" = String, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Schedule result (if ready)", body = ScheduleResult)
    )
)]
pub async fn result(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    let st = state.jobs.get(&id);
    Json(match st {
        Some(jobs::JobStatus::Done { result }) => {
            serde_json::to_value(result).unwrap_or_else(|_| serde_json::json!({"status": "error"}))
        }
        Some(_) => serde_json::json!({"status": "not_ready"}),
        None => serde_json::json!({"status": "not_found"}),
    })
}
