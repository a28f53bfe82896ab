mod error;
mod state;
mod telemetry;
pub mod routes {
    pub mod analyze;
    pub mod health;
    pub mod jobs;
    pub mod plan;
    pub mod validate;
}

use axum::{
    routing::{get, post},
    Router,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            routes::health::health,
            routes::plan::plan,
            routes::plan::plan_async,
            routes::jobs::status,
            routes::jobs::result,
            routes::validate::validate_handler,
            routes::analyze::analyze,
        ),
        components(schemas(
            types::PlanRequest, types::DayAvailability, types::RawSubject,
            types::CandidateSubject, types::InterestRating, types::Strategy,
            types::Weekday, types::ClockTime, types::TimeSlot, types::Meeting,
            types::SubjectSource, types::RejectReason, types::Rejection,
            types::AnalysisSummary, types::ScheduleResult,
            jobs::JobId, jobs::JobStatus,
            routes::validate::ValidationReport,
            routes::plan::PlanOk,
            routes::plan::JobCreated,
            routes::analyze::AnalyzeIn
        )),
        tags(
            (name = "gradeplan", description = "Term-plan scheduling API")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let app_state = state::AppState::new_default();

    let app = Router::new()
        .route("/v1/health", get(routes::health::health))
        .route("/v1/plan", post(routes::plan::plan))
        .route("/v1/plan/async", post(routes::plan::plan_async))
        .route("/v1/validate", post(routes::validate::validate_handler))
        .route("/v1/analyze", post(routes::analyze::analyze))
        .route("/v1/jobs/:id", get(routes::jobs::status))
        .route("/v1/jobs/:id/result", get(routes::jobs::result))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(telemetry::stack())
        .with_state(app_state);

    let port = std::env::var("GRADEPLAN__SERVER__PORT").unwrap_or_else(|_| "8080".into());
    let addr: std::net::SocketAddr = format!("0.0.0.0:{}", port)
        .parse()
        .expect("invalid listen addr");
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
