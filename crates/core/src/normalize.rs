use crate::time;
use serde_json::Value;
use std::collections::HashSet;
use types::{CandidateSubject, RawSubject, SubjectSource};

pub const DEFAULT_CREDITS: u8 = 3;
pub const DEFAULT_DIFFICULTY: u8 = 3;

#[derive(Debug, Default)]
pub struct Normalized {
    pub candidates: Vec<CandidateSubject>,
    pub warnings: Vec<String>,
}

/// Merges catalog and uploaded subjects into one validated pool. Catalog
/// records are processed first, so they win name collisions with uploads.
pub fn normalize(catalog: &[RawSubject], uploaded: &[RawSubject]) -> Normalized {
    let mut out = Normalized::default();
    let mut seen: HashSet<String> = HashSet::new();

    let sources = catalog
        .iter()
        .map(|raw| (raw, SubjectSource::Catalog))
        .chain(uploaded.iter().map(|raw| (raw, SubjectSource::Upload)));

    for (raw, source) in sources {
        normalize_one(raw, source, &mut seen, &mut out);
    }
    out
}

fn normalize_one(
    raw: &RawSubject,
    source: SubjectSource,
    seen: &mut HashSet<String>,
    out: &mut Normalized,
) {
    let label = match source {
        SubjectSource::Catalog => "catalog",
        SubjectSource::Upload => "uploaded",
    };

    let Some(name) = raw
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    else {
        out.warnings
            .push(format!("{label} subject without a name was dropped"));
        return;
    };

    let Some(schedule) = raw
        .schedule
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    else {
        out.warnings
            .push(format!("subject '{name}' has no schedule and was dropped"));
        return;
    };

    if !seen.insert(name.to_string()) {
        out.warnings
            .push(format!("duplicate subject '{name}' ignored ({label} copy)"));
        return;
    }

    let credits = coerce_level(
        raw.credits.as_ref(),
        1,
        10,
        DEFAULT_CREDITS,
        name,
        "credits",
        &mut out.warnings,
    );
    let difficulty = coerce_level(
        raw.difficulty.as_ref(),
        1,
        5,
        DEFAULT_DIFFICULTY,
        name,
        "difficulty",
        &mut out.warnings,
    );

    let meetings = match time::parse_schedule(schedule) {
        Ok(meetings) => meetings,
        Err(err) => {
            out.warnings.push(format!(
                "could not parse schedule '{schedule}' for '{name}': {err}"
            ));
            Vec::new()
        }
    };

    out.candidates.push(CandidateSubject {
        name: name.to_string(),
        schedule: schedule.to_string(),
        credits,
        difficulty,
        category: raw.category.clone(),
        prerequisites: parse_prerequisites(raw.prerequisites.as_ref()),
        teacher: raw.teacher.clone(),
        source,
        meetings,
    });
}

fn coerce_level(
    value: Option<&Value>,
    min: i64,
    max: i64,
    default: u8,
    name: &str,
    field: &str,
    warnings: &mut Vec<String>,
) -> u8 {
    let Some(value) = value else {
        return default;
    };
    match as_int(value) {
        Some(n) => n.clamp(min, max) as u8,
        None => {
            warnings.push(format!(
                "subject '{name}': non-numeric {field} {value}, defaulting to {default}"
            ));
            default
        }
    }
}

fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Prerequisites arrive either as a JSON array of names or as the legacy
/// delimited string form ("A, B" / "A; B" / "A | B").
fn parse_prerequisites(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) => {
            let delim = [',', ';', '|'].into_iter().find(|d| s.contains(*d));
            let parts: Vec<&str> = match delim {
                Some(d) => s.split(d).collect(),
                None => vec![s.as_str()],
            };
            parts
                .into_iter()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect()
        }
        Some(_) => Vec::new(),
    }
}
