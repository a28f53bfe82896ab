use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, ToSchema, JsonSchema, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn short(self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
            Weekday::Sun => "sun",
        }
    }

    /// Matches Portuguese and English weekday names, full or abbreviated,
    /// case- and accent-insensitive ("Terça", "segunda-feira", "Wed", ...).
    pub fn from_name(raw: &str) -> Option<Weekday> {
        let folded = fold_name(raw);
        let name = folded.strip_suffix("-feira").unwrap_or(&folded);
        match name {
            "segunda" | "seg" | "monday" | "mon" => Some(Weekday::Mon),
            "terca" | "ter" | "tuesday" | "tue" => Some(Weekday::Tue),
            "quarta" | "qua" | "wednesday" | "wed" => Some(Weekday::Wed),
            "quinta" | "qui" | "thursday" | "thu" => Some(Weekday::Thu),
            "sexta" | "sex" | "friday" | "fri" => Some(Weekday::Fri),
            "sabado" | "sab" | "saturday" | "sat" => Some(Weekday::Sat),
            "domingo" | "dom" | "sunday" | "sun" => Some(Weekday::Sun),
            _ => None,
        }
    }
}

fn fold_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}

impl Serialize for Weekday {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.short())
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Weekday::from_name(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized day: {raw}")))
    }
}

/// Minutes since midnight, wire format "HH:MM".
#[derive(Clone, Copy, Debug, ToSchema, JsonSchema, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ClockTime(pub u16);

impl ClockTime {
    pub fn hm(hours: u16, minutes: u16) -> ClockTime {
        ClockTime(hours * 60 + minutes)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for ClockTime {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let bad = || format!("unrecognized time: {raw}");
        let (h, m) = raw.trim().split_once(':').ok_or_else(bad)?;
        let h: u16 = h.trim().parse().map_err(|_| bad())?;
        let m: u16 = m.trim().parse().map_err(|_| bad())?;
        if h > 23 || m > 59 {
            return Err(bad());
        }
        Ok(ClockTime::hm(h, m))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash)]
pub struct TimeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeSlot {
    /// Half-open semantics: touching endpoints do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, other: &TimeSlot) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.0.saturating_sub(self.start.0)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash)]
pub struct Meeting {
    pub day: Weekday,
    pub slot: TimeSlot,
}

impl Meeting {
    pub fn conflicts_with(&self, other: &Meeting) -> bool {
        self.day == other.day && self.slot.overlaps(&other.slot)
    }

    pub fn duration_minutes(&self) -> u16 {
        self.slot.duration_minutes()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    pub day: Weekday,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SubjectSource {
    Catalog,
    Upload,
}

/// Untrusted inbound subject record, catalog or upload. Numeric fields
/// arrive as arbitrary JSON so the normalizer can coerce instead of the
/// deserializer rejecting the whole request.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct RawSubject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub credits: Option<serde_json::Value>,
    #[serde(default)]
    pub difficulty: Option<serde_json::Value>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub prerequisites: Option<serde_json::Value>,
    #[serde(default)]
    pub teacher: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct CandidateSubject {
    pub name: String,
    pub schedule: String,
    pub credits: u8,
    pub difficulty: u8,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub teacher: Option<String>,
    pub source: SubjectSource,
    /// Empty only when the schedule string failed to parse; such
    /// candidates are excluded by the availability filter.
    #[serde(default)]
    pub meetings: Vec<Meeting>,
}

impl CandidateSubject {
    pub fn total_minutes(&self) -> u32 {
        self.meetings
            .iter()
            .map(|m| u32::from(m.duration_minutes()))
            .sum()
    }

    pub fn duration_hours(&self) -> f64 {
        f64::from(self.total_minutes()) / 60.0
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    MaximizeSubjects,
    ClearDependencies,
    BalancedDifficulty,
    InterestBased,
    HighValueCredits,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterestRating {
    pub subject_name: String,
    pub interest_level: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[serde(default)]
    pub weekly_availability: Vec<DayAvailability>,
    pub subject_count: u32,
    pub strategy: Strategy,
    #[serde(default)]
    pub prioritize_dependencies: bool,
    #[serde(default)]
    pub catalog_subjects: Vec<RawSubject>,
    #[serde(default)]
    pub uploaded_subjects: Vec<RawSubject>,
    #[serde(default)]
    pub interests: Vec<InterestRating>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
pub enum RejectReason {
    #[serde(rename = "unparseable schedule")]
    UnparseableSchedule,
    #[serde(rename = "day not available")]
    DayUnavailable,
    #[serde(rename = "outside availability")]
    OutsideAvailability,
    #[serde(rename = "time conflict")]
    TimeConflict,
    #[serde(rename = "target count reached")]
    TargetCountReached,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RejectReason::UnparseableSchedule => "unparseable schedule",
            RejectReason::DayUnavailable => "day not available",
            RejectReason::OutsideAvailability => "outside availability",
            RejectReason::TimeConflict => "time conflict",
            RejectReason::TargetCountReached => "target count reached",
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct Rejection {
    pub subject: CandidateSubject,
    pub reason: RejectReason,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct AnalysisSummary {
    pub total_subjects: usize,
    pub total_credits: u32,
    pub total_hours: f64,
    pub average_difficulty: f64,
    pub difficulty_distribution: BTreeMap<u8, u32>,
    pub category_distribution: BTreeMap<String, u32>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    pub efficiency: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct ScheduleResult {
    pub accepted: Vec<CandidateSubject>,
    pub rejected: Vec<Rejection>,
    pub analysis: AnalysisSummary,
}
