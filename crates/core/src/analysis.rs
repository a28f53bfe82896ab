use std::collections::HashSet;
use types::{AnalysisSummary, CandidateSubject, DayAvailability, Weekday};

/// Pure aggregation over the accepted schedule: totals, frequency maps,
/// threshold-triggered warnings and recommendations.
pub fn analyze(
    accepted: &[CandidateSubject],
    target_count: u32,
    availability: &[DayAvailability],
) -> AnalysisSummary {
    let mut summary = AnalysisSummary {
        total_subjects: accepted.len(),
        ..Default::default()
    };

    summary.total_credits = accepted.iter().map(|s| u32::from(s.credits)).sum();
    let total_minutes: u32 = accepted.iter().map(CandidateSubject::total_minutes).sum();
    summary.total_hours = round1(f64::from(total_minutes) / 60.0);

    let average_difficulty = if accepted.is_empty() {
        0.0
    } else {
        let sum: u32 = accepted.iter().map(|s| u32::from(s.difficulty)).sum();
        f64::from(sum) / accepted.len() as f64
    };
    summary.average_difficulty = round1(average_difficulty);

    for subject in accepted {
        *summary
            .difficulty_distribution
            .entry(subject.difficulty)
            .or_default() += 1;
        let category = subject
            .category
            .clone()
            .unwrap_or_else(|| "uncategorized".to_string());
        *summary.category_distribution.entry(category).or_default() += 1;
    }

    if accepted.is_empty() {
        summary
            .warnings
            .push("no subjects could be scheduled with the current constraints".to_string());
    } else {
        if (accepted.len() as u32) < target_count {
            summary.warnings.push(format!(
                "only {} subjects scheduled out of the requested {}",
                accepted.len(),
                target_count
            ));
        }
        if summary.total_hours > 40.0 {
            summary
                .warnings
                .push("schedule exceeds 40 hours per week".to_string());
        }
        if average_difficulty > 4.0 {
            summary
                .warnings
                .push("high average difficulty, plan extra study time".to_string());
        }

        let busy_days: HashSet<Weekday> = accepted
            .iter()
            .flat_map(|s| s.meetings.iter().map(|m| m.day))
            .collect();
        for day in availability.iter().filter(|d| d.available) {
            if !busy_days.contains(&day.day) {
                summary
                    .warnings
                    .push(format!("no subjects scheduled on {}", day.day));
            }
        }

        if summary.category_distribution.len() < 2 {
            summary.recommendations.push(
                "consider adding subjects from different categories for a balanced term"
                    .to_string(),
            );
        }
    }

    let unmet = (accepted.len() as u32) < target_count;
    let saturday_open = availability
        .iter()
        .any(|d| d.day == Weekday::Sat && d.available);
    if unmet && !saturday_open {
        summary.recommendations.push(
            "consider enabling Saturday availability to fit more subjects".to_string(),
        );
    }

    summary.efficiency = if target_count == 0 {
        0.0
    } else {
        (accepted.len() as f64 / f64::from(target_count)).min(1.0)
    };

    summary
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
