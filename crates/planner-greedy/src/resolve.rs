use types::{CandidateSubject, Meeting, RejectReason, Rejection};

/// Single greedy pass over the ranked list: a candidate is accepted iff
/// the target count is not yet reached and none of its meetings overlaps
/// an already-accepted meeting. Earlier rank always wins a conflict; no
/// backtracking or swapping.
pub fn resolve(
    ranked: Vec<CandidateSubject>,
    target_count: u32,
) -> (Vec<CandidateSubject>, Vec<Rejection>) {
    let mut accepted: Vec<CandidateSubject> = Vec::new();
    let mut rejected: Vec<Rejection> = Vec::new();
    let mut used: Vec<Meeting> = Vec::new();

    for candidate in ranked {
        if accepted.len() as u32 >= target_count {
            rejected.push(Rejection {
                subject: candidate,
                reason: RejectReason::TargetCountReached,
            });
            continue;
        }
        let conflict = candidate
            .meetings
            .iter()
            .any(|m| used.iter().any(|u| m.conflicts_with(u)));
        if conflict {
            rejected.push(Rejection {
                subject: candidate,
                reason: RejectReason::TimeConflict,
            });
            continue;
        }
        used.extend(candidate.meetings.iter().copied());
        accepted.push(candidate);
    }

    (accepted, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{ClockTime, SubjectSource, TimeSlot, Weekday};

    fn candidate(name: &str, day: Weekday, start: (u16, u16), end: (u16, u16)) -> CandidateSubject {
        CandidateSubject {
            name: name.into(),
            schedule: String::new(),
            credits: 4,
            difficulty: 3,
            category: None,
            prerequisites: vec![],
            teacher: None,
            source: SubjectSource::Catalog,
            meetings: vec![Meeting {
                day,
                slot: TimeSlot {
                    start: ClockTime::hm(start.0, start.1),
                    end: ClockTime::hm(end.0, end.1),
                },
            }],
        }
    }

    #[test]
    fn earlier_rank_wins_conflicts_and_scan_continues() {
        // A 09:00-10:00, B 09:30-10:30 (conflicts with A), C 11:00-12:00
        let ranked = vec![
            candidate("A", Weekday::Mon, (9, 0), (10, 0)),
            candidate("B", Weekday::Mon, (9, 30), (10, 30)),
            candidate("C", Weekday::Mon, (11, 0), (12, 0)),
        ];
        let (accepted, rejected) = resolve(ranked, 2);
        let accepted_names: Vec<&str> = accepted.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(accepted_names, ["A", "C"]);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].subject.name, "B");
        assert_eq!(rejected[0].reason, RejectReason::TimeConflict);
    }

    #[test]
    fn remaining_candidates_are_rejected_once_target_is_reached() {
        let ranked = vec![
            candidate("A", Weekday::Mon, (9, 0), (10, 0)),
            candidate("B", Weekday::Tue, (9, 0), (10, 0)),
            candidate("C", Weekday::Wed, (9, 0), (10, 0)),
        ];
        let (accepted, rejected) = resolve(ranked, 1);
        assert_eq!(accepted.len(), 1);
        assert_eq!(rejected.len(), 2);
        assert!(rejected
            .iter()
            .all(|r| r.reason == RejectReason::TargetCountReached));
    }

    #[test]
    fn zero_target_accepts_nothing() {
        let ranked = vec![candidate("A", Weekday::Mon, (9, 0), (10, 0))];
        let (accepted, rejected) = resolve(ranked, 0);
        assert!(accepted.is_empty());
        assert_eq!(rejected[0].reason, RejectReason::TargetCountReached);
    }

    #[test]
    fn same_interval_on_different_days_does_not_conflict() {
        let ranked = vec![
            candidate("A", Weekday::Mon, (9, 0), (10, 0)),
            candidate("B", Weekday::Tue, (9, 0), (10, 0)),
        ];
        let (accepted, rejected) = resolve(ranked, 5);
        assert_eq!(accepted.len(), 2);
        assert!(rejected.is_empty());
    }

    #[test]
    fn back_to_back_meetings_do_not_conflict() {
        let ranked = vec![
            candidate("A", Weekday::Mon, (9, 0), (10, 0)),
            candidate("B", Weekday::Mon, (10, 0), (11, 0)),
        ];
        let (accepted, _) = resolve(ranked, 5);
        assert_eq!(accepted.len(), 2);
    }

    #[test]
    fn resolve_is_deterministic() {
        let ranked = vec![
            candidate("A", Weekday::Mon, (9, 0), (10, 0)),
            candidate("B", Weekday::Mon, (9, 30), (10, 30)),
            candidate("C", Weekday::Tue, (9, 0), (10, 0)),
        ];
        let first = resolve(ranked.clone(), 2);
        let second = resolve(ranked, 2);
        let names = |r: &(Vec<CandidateSubject>, Vec<Rejection>)| {
            r.0.iter().map(|s| s.name.clone()).collect::<Vec<_>>()
        };
        assert_eq!(names(&first), names(&second));
    }
}
