use jobs::InMemJobs;
use planner_greedy::GreedyPlanner;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<GreedyPlanner>,
    pub jobs: Arc<InMemJobs<GreedyPlanner>>,
}

impl AppState {
    pub fn new_default() -> Self {
        Self {
            planner: Arc::new(GreedyPlanner::new()),
            jobs: Arc::new(InMemJobs::new(GreedyPlanner::new())),
        }
    }
}
