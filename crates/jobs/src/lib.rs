use parking_lot::RwLock;
use plan_core::{PlanRequest, Planner, ScheduleResult};
use std::collections::HashMap;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, ToSchema)]
pub struct JobId(pub String);

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, ToSchema)]
#[serde(tag = "status")]
pub enum JobStatus {
    Queued,
    Running,
    Done { result: ScheduleResult },
    Failed { message: String },
}

/// In-memory registry of plan jobs: enqueue spawns the planner on a tokio
/// task and the status map is polled over HTTP. Nothing survives a restart.
#[derive(Clone)]
pub struct InMemJobs<P: Planner> {
    inner: std::sync::Arc<RwLock<HashMap<String, JobStatus>>>,
    planner: std::sync::Arc<P>,
}

impl<P: Planner> InMemJobs<P> {
    pub fn new(planner: P) -> Self {
        Self {
            inner: Default::default(),
            planner: std::sync::Arc::new(planner),
        }
    }

    pub fn enqueue(&self, req: PlanRequest) -> JobId {
        let id = Uuid::new_v4().to_string();
        self.inner.write().insert(id.clone(), JobStatus::Queued);

        let map = self.inner.clone();
        let planner = self.planner.clone();
        let id_for_task = id.clone();

        tokio::spawn(async move {
            {
                let mut w = map.write();
                w.insert(id_for_task.clone(), JobStatus::Running);
            }
            match planner.plan(req).await {
                Ok(result) => {
                    map.write()
                        .insert(id_for_task, JobStatus::Done { result });
                }
                Err(e) => {
                    error!(?e, "plan job failed");
                    map.write().insert(
                        id_for_task,
                        JobStatus::Failed {
                            message: e.to_string(),
                        },
                    );
                }
            }
        });

        JobId(id)
    }

    pub fn get(&self, id: &str) -> Option<JobStatus> {
        self.inner.read().get(id).cloned()
    }
}
