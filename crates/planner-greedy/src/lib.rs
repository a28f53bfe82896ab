pub mod filter;
pub mod rank;
pub mod resolve;

use async_trait::async_trait;
use plan_core::{analysis, normalize, Planner};
use types::{PlanRequest, ScheduleResult};

pub use rank::StudentContext;

/// Greedy schedule builder: normalize -> filter -> rank -> resolve ->
/// analyze. A pure function of the request; concurrent plans never share
/// state.
pub struct GreedyPlanner;

impl GreedyPlanner {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, req: &PlanRequest) -> ScheduleResult {
        let normalized = normalize::normalize(&req.catalog_subjects, &req.uploaded_subjects);
        tracing::debug!(
            candidates = normalized.candidates.len(),
            warnings = normalized.warnings.len(),
            "normalized candidate pool"
        );

        let (fits, excluded) =
            filter::filter_by_availability(normalized.candidates, &req.weekly_availability);
        tracing::debug!(fits = fits.len(), excluded = excluded.len(), "availability filter");

        let ctx = StudentContext::from_request(req);
        let ranked = rank::rank(fits, req.strategy, &ctx);

        let (accepted, resolver_rejections) = resolve::resolve(ranked, req.subject_count);
        tracing::debug!(
            accepted = accepted.len(),
            target = req.subject_count,
            "conflict resolution"
        );

        let mut rejected = excluded;
        rejected.extend(resolver_rejections);

        let mut analysis = analysis::analyze(&accepted, req.subject_count, &req.weekly_availability);
        let mut warnings = normalized.warnings;
        warnings.append(&mut analysis.warnings);
        analysis.warnings = warnings;

        ScheduleResult {
            accepted,
            rejected,
            analysis,
        }
    }
}

impl Default for GreedyPlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Planner for GreedyPlanner {
    async fn plan(&self, req: PlanRequest) -> anyhow::Result<ScheduleResult> {
        Ok(self.build(&req))
    }
}
