use std::collections::HashMap;
use types::{CandidateSubject, DayAvailability, RejectReason, Rejection, Weekday};

/// Splits the pool into candidates whose every meeting fits the student's
/// open windows and candidates excluded with a reason. A meeting must be
/// fully contained in a single window; spanning two adjacent windows is
/// an exclusion, not a merge.
pub fn filter_by_availability(
    candidates: Vec<CandidateSubject>,
    availability: &[DayAvailability],
) -> (Vec<CandidateSubject>, Vec<Rejection>) {
    let open: HashMap<Weekday, &DayAvailability> = availability
        .iter()
        .filter(|d| d.available)
        .map(|d| (d.day, d))
        .collect();

    let mut fits = Vec::new();
    let mut excluded = Vec::new();
    for candidate in candidates {
        match exclusion_reason(&candidate, &open) {
            None => fits.push(candidate),
            Some(reason) => excluded.push(Rejection {
                subject: candidate,
                reason,
            }),
        }
    }
    (fits, excluded)
}

fn exclusion_reason(
    candidate: &CandidateSubject,
    open: &HashMap<Weekday, &DayAvailability>,
) -> Option<RejectReason> {
    if candidate.meetings.is_empty() {
        return Some(RejectReason::UnparseableSchedule);
    }
    for meeting in &candidate.meetings {
        let Some(day) = open.get(&meeting.day) else {
            return Some(RejectReason::DayUnavailable);
        };
        if !day.time_slots.iter().any(|slot| slot.contains(&meeting.slot)) {
            return Some(RejectReason::OutsideAvailability);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{ClockTime, Meeting, SubjectSource, TimeSlot};

    fn slot(h0: u16, m0: u16, h1: u16, m1: u16) -> TimeSlot {
        TimeSlot {
            start: ClockTime::hm(h0, m0),
            end: ClockTime::hm(h1, m1),
        }
    }

    fn candidate(name: &str, meetings: Vec<Meeting>) -> CandidateSubject {
        CandidateSubject {
            name: name.into(),
            schedule: String::new(),
            credits: 4,
            difficulty: 3,
            category: None,
            prerequisites: vec![],
            teacher: None,
            source: SubjectSource::Catalog,
            meetings,
        }
    }

    fn monday(slots: Vec<TimeSlot>) -> DayAvailability {
        DayAvailability {
            day: Weekday::Mon,
            available: true,
            time_slots: slots,
        }
    }

    #[test]
    fn meeting_inside_window_fits() {
        let cand = candidate(
            "A",
            vec![Meeting {
                day: Weekday::Mon,
                slot: slot(9, 30, 10, 30),
            }],
        );
        let (fits, excluded) = filter_by_availability(vec![cand], &[monday(vec![slot(9, 0, 12, 0)])]);
        assert_eq!(fits.len(), 1);
        assert!(excluded.is_empty());
    }

    #[test]
    fn touching_boundary_is_not_containment() {
        // availability Monday 09:00-10:00, meeting 10:00-11:00
        let cand = candidate(
            "A",
            vec![Meeting {
                day: Weekday::Mon,
                slot: slot(10, 0, 11, 0),
            }],
        );
        let (fits, excluded) = filter_by_availability(vec![cand], &[monday(vec![slot(9, 0, 10, 0)])]);
        assert!(fits.is_empty());
        assert_eq!(excluded[0].reason, RejectReason::OutsideAvailability);
    }

    #[test]
    fn meeting_spanning_two_windows_is_excluded() {
        let cand = candidate(
            "A",
            vec![Meeting {
                day: Weekday::Mon,
                slot: slot(9, 30, 11, 30),
            }],
        );
        let windows = monday(vec![slot(9, 0, 10, 0), slot(10, 0, 12, 0)]);
        let (fits, excluded) = filter_by_availability(vec![cand], &[windows]);
        assert!(fits.is_empty());
        assert_eq!(excluded[0].reason, RejectReason::OutsideAvailability);
    }

    #[test]
    fn unavailable_day_excludes_candidate() {
        let cand = candidate(
            "A",
            vec![Meeting {
                day: Weekday::Tue,
                slot: slot(9, 0, 10, 0),
            }],
        );
        let (fits, excluded) = filter_by_availability(vec![cand], &[monday(vec![slot(9, 0, 12, 0)])]);
        assert!(fits.is_empty());
        assert_eq!(excluded[0].reason, RejectReason::DayUnavailable);
    }

    #[test]
    fn every_meeting_must_fit() {
        let cand = candidate(
            "A",
            vec![
                Meeting {
                    day: Weekday::Mon,
                    slot: slot(9, 0, 10, 0),
                },
                Meeting {
                    day: Weekday::Tue,
                    slot: slot(9, 0, 10, 0),
                },
            ],
        );
        let (fits, excluded) = filter_by_availability(vec![cand], &[monday(vec![slot(9, 0, 12, 0)])]);
        assert!(fits.is_empty());
        assert_eq!(excluded[0].reason, RejectReason::DayUnavailable);
    }

    #[test]
    fn unparseable_schedule_is_excluded_here() {
        let cand = candidate("A", vec![]);
        let (fits, excluded) = filter_by_availability(vec![cand], &[monday(vec![slot(9, 0, 12, 0)])]);
        assert!(fits.is_empty());
        assert_eq!(excluded[0].reason, RejectReason::UnparseableSchedule);
    }
}
