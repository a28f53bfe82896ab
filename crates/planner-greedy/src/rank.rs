use std::collections::HashMap;
use types::{CandidateSubject, PlanRequest, Strategy};

pub const NEUTRAL_INTEREST: u8 = 3;

/// Per-student inputs that only some strategies consume.
#[derive(Clone, Debug, Default)]
pub struct StudentContext {
    pub interest: HashMap<String, u8>,
    pub prioritize_dependencies: bool,
}

impl StudentContext {
    pub fn from_request(req: &PlanRequest) -> Self {
        Self {
            interest: req
                .interests
                .iter()
                .map(|r| (r.subject_name.clone(), r.interest_level))
                .collect(),
            prioritize_dependencies: req.prioritize_dependencies,
        }
    }

    fn interest_for(&self, name: &str) -> u8 {
        self.interest.get(name).copied().unwrap_or(NEUTRAL_INTEREST)
    }
}

/// Produces a total order over the filtered pool. Every strategy breaks
/// remaining ties by ascending name so the output is deterministic.
pub fn rank(
    mut pool: Vec<CandidateSubject>,
    strategy: Strategy,
    ctx: &StudentContext,
) -> Vec<CandidateSubject> {
    match strategy {
        Strategy::MaximizeSubjects => {
            pool.sort_by(|a, b| {
                a.total_minutes()
                    .cmp(&b.total_minutes())
                    .then(b.credits.cmp(&a.credits))
                    .then_with(|| a.name.cmp(&b.name))
            });
            pool
        }
        Strategy::ClearDependencies => rank_clear_dependencies(pool, ctx),
        Strategy::BalancedDifficulty => rank_balanced_difficulty(pool),
        Strategy::InterestBased => {
            pool.sort_by(|a, b| {
                ctx.interest_for(&b.name)
                    .cmp(&ctx.interest_for(&a.name))
                    .then(b.credits.cmp(&a.credits))
                    .then_with(|| a.name.cmp(&b.name))
            });
            pool
        }
        Strategy::HighValueCredits => {
            pool.sort_by(|a, b| b.credits.cmp(&a.credits).then_with(|| a.name.cmp(&b.name)));
            pool
        }
    }
}

/// Ranks by how many pool candidates list the subject as a prerequisite,
/// so the biggest unblockers come first. The prioritizeDependencies hint
/// shifts the secondary emphasis from credit value to easy enablers.
fn rank_clear_dependencies(
    mut pool: Vec<CandidateSubject>,
    ctx: &StudentContext,
) -> Vec<CandidateSubject> {
    let mut dependents: HashMap<String, u32> = HashMap::new();
    for subject in &pool {
        for prereq in &subject.prerequisites {
            *dependents.entry(prereq.clone()).or_default() += 1;
        }
    }
    let score = |s: &CandidateSubject| dependents.get(&s.name).copied().unwrap_or(0);

    let prefer_easy = ctx.prioritize_dependencies;
    pool.sort_by(|a, b| {
        score(b)
            .cmp(&score(a))
            .then_with(|| {
                if prefer_easy {
                    a.difficulty.cmp(&b.difficulty)
                } else {
                    b.credits.cmp(&a.credits)
                }
            })
            .then_with(|| a.name.cmp(&b.name))
    });
    pool
}

/// Interleaves candidates around the pool's median difficulty: easier and
/// harder subjects alternate, each side ordered by distance to the median.
fn rank_balanced_difficulty(pool: Vec<CandidateSubject>) -> Vec<CandidateSubject> {
    if pool.is_empty() {
        return pool;
    }
    let mut difficulties: Vec<u8> = pool.iter().map(|s| s.difficulty).collect();
    difficulties.sort_unstable();
    let median = difficulties[difficulties.len() / 2];

    let (mut easier, mut harder): (Vec<_>, Vec<_>) =
        pool.into_iter().partition(|s| s.difficulty <= median);

    let distance = |s: &CandidateSubject| (i16::from(median) - i16::from(s.difficulty)).abs();
    let by_distance = |a: &CandidateSubject, b: &CandidateSubject| {
        distance(a)
            .cmp(&distance(b))
            .then(b.credits.cmp(&a.credits))
            .then_with(|| a.name.cmp(&b.name))
    };
    easier.sort_by(by_distance);
    harder.sort_by(by_distance);

    let mut out = Vec::with_capacity(easier.len() + harder.len());
    let mut easier = easier.into_iter();
    let mut harder = harder.into_iter();
    loop {
        match (easier.next(), harder.next()) {
            (None, None) => break,
            (e, h) => {
                if let Some(s) = e {
                    out.push(s);
                }
                if let Some(s) = h {
                    out.push(s);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{ClockTime, Meeting, SubjectSource, TimeSlot, Weekday};

    fn candidate(name: &str, credits: u8, difficulty: u8, minutes: u16) -> CandidateSubject {
        CandidateSubject {
            name: name.into(),
            schedule: String::new(),
            credits,
            difficulty,
            category: None,
            prerequisites: vec![],
            teacher: None,
            source: SubjectSource::Catalog,
            meetings: vec![Meeting {
                day: Weekday::Mon,
                slot: TimeSlot {
                    start: ClockTime(9 * 60),
                    end: ClockTime(9 * 60 + minutes),
                },
            }],
        }
    }

    fn names(pool: &[CandidateSubject]) -> Vec<&str> {
        pool.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn high_value_credits_orders_by_credits_then_name() {
        let pool = vec![
            candidate("Delta", 2, 3, 60),
            candidate("Charlie", 4, 3, 60),
            candidate("Alpha", 4, 3, 60),
            candidate("Bravo", 1, 3, 60),
        ];
        let ranked = rank(pool, Strategy::HighValueCredits, &StudentContext::default());
        assert_eq!(names(&ranked), ["Alpha", "Charlie", "Delta", "Bravo"]);
    }

    #[test]
    fn maximize_subjects_prefers_shorter_meetings() {
        let pool = vec![
            candidate("Long", 8, 3, 180),
            candidate("Short", 2, 3, 60),
            candidate("Mid", 5, 3, 120),
        ];
        let ranked = rank(pool, Strategy::MaximizeSubjects, &StudentContext::default());
        assert_eq!(names(&ranked), ["Short", "Mid", "Long"]);
    }

    #[test]
    fn maximize_subjects_ties_break_by_name() {
        let pool = vec![
            candidate("B", 3, 3, 60),
            candidate("A", 3, 3, 60),
        ];
        let ranked = rank(pool, Strategy::MaximizeSubjects, &StudentContext::default());
        assert_eq!(names(&ranked), ["A", "B"]);
    }

    #[test]
    fn clear_dependencies_puts_unblockers_first() {
        let mut intro = candidate("Intro", 2, 1, 60);
        intro.prerequisites = vec![];
        let mut advanced = candidate("Advanced", 6, 4, 60);
        advanced.prerequisites = vec!["Intro".into()];
        let mut capstone = candidate("Capstone", 6, 5, 60);
        capstone.prerequisites = vec!["Intro".into(), "Advanced".into()];

        let ranked = rank(
            vec![capstone, advanced, intro],
            Strategy::ClearDependencies,
            &StudentContext::default(),
        );
        assert_eq!(names(&ranked), ["Intro", "Advanced", "Capstone"]);
    }

    #[test]
    fn clear_dependencies_hint_switches_secondary_key() {
        // equal dependent counts; hint set -> easier first, unset -> more credits first
        let easy_cheap = candidate("Easy", 2, 1, 60);
        let hard_rich = candidate("Hard", 6, 5, 60);

        let by_credits = rank(
            vec![easy_cheap.clone(), hard_rich.clone()],
            Strategy::ClearDependencies,
            &StudentContext::default(),
        );
        assert_eq!(names(&by_credits), ["Hard", "Easy"]);

        let ctx = StudentContext {
            prioritize_dependencies: true,
            ..Default::default()
        };
        let by_difficulty = rank(vec![easy_cheap, hard_rich], Strategy::ClearDependencies, &ctx);
        assert_eq!(names(&by_difficulty), ["Easy", "Hard"]);
    }

    #[test]
    fn interest_based_falls_back_to_neutral() {
        let ctx = StudentContext {
            interest: HashMap::from([("Loved".to_string(), 5), ("Avoided".to_string(), 1)]),
            prioritize_dependencies: false,
        };
        let pool = vec![
            candidate("Avoided", 9, 3, 60),
            candidate("Unrated", 3, 3, 60),
            candidate("Loved", 1, 3, 60),
        ];
        let ranked = rank(pool, Strategy::InterestBased, &ctx);
        assert_eq!(names(&ranked), ["Loved", "Unrated", "Avoided"]);
    }

    #[test]
    fn balanced_difficulty_starts_at_the_median_and_alternates_sides() {
        let pool = vec![
            candidate("VeryHard", 3, 5, 60),
            candidate("Easy", 3, 1, 60),
            candidate("Median", 3, 3, 60),
            candidate("Hard", 3, 4, 60),
            candidate("Soft", 3, 2, 60),
        ];
        let ranked = rank(pool, Strategy::BalancedDifficulty, &StudentContext::default());
        assert_eq!(names(&ranked), ["Median", "Hard", "Soft", "VeryHard", "Easy"]);
    }

    #[test]
    fn balanced_difficulty_is_deterministic() {
        let pool = vec![
            candidate("B", 3, 2, 60),
            candidate("A", 3, 2, 60),
            candidate("C", 3, 4, 60),
        ];
        let first = rank(pool.clone(), Strategy::BalancedDifficulty, &StudentContext::default());
        let second = rank(pool, Strategy::BalancedDifficulty, &StudentContext::default());
        assert_eq!(names(&first), names(&second));
    }
}
