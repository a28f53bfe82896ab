pub mod analysis;
pub mod normalize;
pub mod time;

use async_trait::async_trait;
use thiserror::Error;

pub use types::{
    AnalysisSummary, CandidateSubject, DayAvailability, Meeting, PlanRequest, RawSubject,
    RejectReason, Rejection, ScheduleResult, Strategy, TimeSlot, Weekday,
};

/// Upper bound enforced at the request boundary; the engine itself only
/// guards the zero case.
pub const MAX_SUBJECT_COUNT: u32 = 12;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid request: {0}")]
    Msg(String),
}

pub fn validate(req: &PlanRequest) -> Result<(), ValidationError> {
    let mut errors: Vec<String> = Vec::new();

    if req.subject_count == 0 {
        errors.push("subjectCount must be at least 1".into());
    }
    if req.subject_count > MAX_SUBJECT_COUNT {
        errors.push(format!(
            "subjectCount {} exceeds maximum {}",
            req.subject_count, MAX_SUBJECT_COUNT
        ));
    }

    {
        use std::collections::HashSet;
        let mut seen = HashSet::new();
        for day in &req.weekly_availability {
            if !seen.insert(day.day) {
                errors.push(format!("duplicate availability entry for {}", day.day));
            }
        }
    }

    for day in &req.weekly_availability {
        if day.available && day.time_slots.is_empty() {
            errors.push(format!("{} is marked available but lists no time slots", day.day));
        }
        if !day.available && !day.time_slots.is_empty() {
            errors.push(format!("{} is marked unavailable but lists time slots", day.day));
        }
        for slot in &day.time_slots {
            if slot.start >= slot.end {
                errors.push(format!(
                    "{}: slot {}-{} has start >= end",
                    day.day, slot.start, slot.end
                ));
            }
        }
        for (i, a) in day.time_slots.iter().enumerate() {
            for b in day.time_slots.iter().skip(i + 1) {
                if a.overlaps(b) {
                    errors.push(format!(
                        "{}: availability slots {}-{} and {}-{} overlap",
                        day.day, a.start, a.end, b.start, b.end
                    ));
                }
            }
        }
    }

    for rating in &req.interests {
        if !(1..=5).contains(&rating.interest_level) {
            errors.push(format!(
                "interest level {} for '{}' is outside 1..=5",
                rating.interest_level, rating.subject_name
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Msg(errors.join("; ")))
    }
}

#[async_trait]
pub trait Planner: Send + Sync + 'static {
    async fn plan(&self, req: PlanRequest) -> anyhow::Result<ScheduleResult>;
}
