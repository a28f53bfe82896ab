use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, Json};
use plan_core::{validate, Planner};
use serde::Serialize;
use types::{AnalysisSummary, CandidateSubject, PlanRequest, Rejection};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct PlanOk {
    pub success: bool,
    pub schedule: Vec<CandidateSubject>,
    pub rejected: Vec<Rejection>,
    pub analysis: AnalysisSummary,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobCreated {
    pub job_id: String,
    pub status: &'static str,
}

#[utoipa::path(
    post,
    path = "/v1/plan",
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Generated schedule", body = PlanOk),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn plan(
    State(state): State<AppState>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<PlanOk>, ApiError> {
    validate(&req).map_err(|e| ApiError(e.to_string()))?;
    let result = state
        .planner
        .plan(req)
        .await
        .map_err(|e| ApiError(e.to_string()))?;
    Ok(Json(PlanOk {
        success: true,
        schedule: result.accepted,
        rejected: result.rejected,
        analysis: result.analysis,
    }))
}

#[utoipa::path(
    post,
    path = "/v1/plan/async",
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Plan job enqueued", body = JobCreated),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn plan_async(
    State(state): State<AppState>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<JobCreated>, ApiError> {
    validate(&req).map_err(|e| ApiError(e.to_string()))?;
    let id = state.jobs.enqueue(req);
    Ok(Json(JobCreated {
        job_id: id.0,
        status: "queued",
    }))
}
