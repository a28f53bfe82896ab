use axum::Json;
use plan_core::analysis;
use serde::Deserialize;
use types::{AnalysisSummary, CandidateSubject, DayAvailability};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeIn {
    pub schedule: Vec<CandidateSubject>,
    pub subject_count: u32,
    #[serde(default)]
    pub weekly_availability: Vec<DayAvailability>,
}

/// Re-runs the analyzer over a schedule the client already holds, e.g.
/// after it dropped a subject locally.
#[utoipa::path(
    post,
    path = "/v1/analyze",
    request_body = AnalyzeIn,
    responses(
        (status = 200, description = "Aggregate statistics for the provided schedule", body = AnalysisSummary)
    )
)]
pub async fn analyze(Json(input): Json<AnalyzeIn>) -> Json<AnalysisSummary> {
    Json(analysis::analyze(
        &input.schedule,
        input.subject_count,
        &input.weekly_availability,
    ))
}
