use thiserror::Error;
use types::{ClockTime, Meeting, TimeSlot, Weekday};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognized day: {0}")]
    UnknownDay(String),
    #[error("unrecognized time: {0}")]
    UnknownTime(String),
    #[error("invalid range (start >= end): {0}")]
    InvalidRange(String),
    #[error("empty schedule")]
    Empty,
}

/// Parses a raw schedule description into meetings. Accepts the catalog's
/// format "Segunda (19:00-20:40), Quarta (20:50-22:30)" as well as plainer
/// variants like "Mon 09:00-11:00" or "sexta 19:00 22:30".
pub fn parse_schedule(raw: &str) -> Result<Vec<Meeting>, ParseError> {
    let mut meetings = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        meetings.push(parse_meeting(part)?);
    }
    if meetings.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(meetings)
}

fn parse_meeting(part: &str) -> Result<Meeting, ParseError> {
    let cleaned: String = part
        .chars()
        .map(|c| if c == '(' || c == ')' { ' ' } else { c })
        .collect();

    let mut day_tokens: Vec<&str> = Vec::new();
    let mut bare_times: Vec<ClockTime> = Vec::new();
    let mut range: Option<(ClockTime, ClockTime)> = None;

    for token in cleaned.split_whitespace() {
        if token.contains(':') {
            match split_range(token) {
                Some((a, b)) => range = Some((parse_time(a)?, parse_time(b)?)),
                None => bare_times.push(parse_time(token)?),
            }
        } else if bare_times.is_empty() && range.is_none() {
            day_tokens.push(token);
        }
    }

    let day_name = day_tokens.join(" ");
    let day = Weekday::from_name(&day_name)
        .ok_or_else(|| ParseError::UnknownDay(day_name.clone()))?;

    let (start, end) = match (range, bare_times.as_slice()) {
        (Some(r), _) => r,
        (None, [s, e]) => (*s, *e),
        _ => return Err(ParseError::UnknownTime(part.to_string())),
    };
    if start >= end {
        return Err(ParseError::InvalidRange(format!("{start}-{end}")));
    }

    Ok(Meeting {
        day,
        slot: TimeSlot { start, end },
    })
}

fn split_range(token: &str) -> Option<(&str, &str)> {
    for sep in ['-', '–'] {
        if let Some((a, b)) = token.split_once(sep) {
            if a.contains(':') && b.contains(':') {
                return Some((a, b));
            }
        }
    }
    None
}

fn parse_time(raw: &str) -> Result<ClockTime, ParseError> {
    raw.trim()
        .parse()
        .map_err(|_| ParseError::UnknownTime(raw.trim().to_string()))
}
