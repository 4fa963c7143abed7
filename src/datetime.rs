use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::models::PlayTimestamp;

lazy_static! {
    static ref DATE_REGEX: Regex = Regex::new(r"([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})").unwrap();
    static ref TIME_REGEX: Regex = Regex::new(r"([0-9]{1,2}):([0-9]{1,2}):([0-9]{1,2})").unwrap();
    // Both patterns are anchored on the whole field, trailing text fails the stage
    static ref DATETIME_FORMAT: Regex = Regex::new(&format!("^{} {}$", DATE_REGEX.as_str(), TIME_REGEX.as_str())).unwrap();
    static ref DATE_FORMAT: Regex = Regex::new(&format!("^{}$", DATE_REGEX.as_str())).unwrap();
}

/// Reads capture group `index` as a number. Every group is a short run of
/// digits, so this only fails when the group did not participate.
fn capture_u32(caps: &Captures, index: usize) -> Option<u32> {
    caps.get(index)?.as_str().parse().ok()
}

/// Builds a calendar date from `day`, `month`, `year` capture groups starting
/// at `first`. Out of range values such as `31/02/2020` give `None`.
fn date_from_captures(caps: &Captures, first: usize) -> Option<NaiveDate> {
    let day = capture_u32(caps, first)?;
    let month = capture_u32(caps, first + 1)?;
    let year = capture_u32(caps, first + 2)?;
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// Parses `PLAY_TS` against `DD/MM/YYYY HH:MM:SS`.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let caps = DATETIME_FORMAT.captures(raw)?;
    let date = date_from_captures(&caps, 1)?;
    let time = NaiveTime::from_hms_opt(
        capture_u32(&caps, 4)?,
        capture_u32(&caps, 5)?,
        capture_u32(&caps, 6)?,
    )?;
    Some(date.and_time(time))
}

/// Parses `PLAY_TS` against the date-only format `DD/MM/YYYY`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let caps = DATE_FORMAT.captures(raw)?;
    date_from_captures(&caps, 1)
}

/// Two-stage parse of a play timestamp.
///
/// The date-only format is only tried when the full datetime format failed,
/// so a value that parses as a datetime always keeps its time component.
/// Values matching neither format come back as [`PlayTimestamp::Unparseable`]
/// carrying the raw text; this function never fails.
pub fn parse_play_timestamp(raw: &str) -> PlayTimestamp {
    if let Some(datetime) = parse_datetime(raw) {
        return PlayTimestamp::DateTime(datetime);
    }
    match parse_date(raw) {
        Some(date) => PlayTimestamp::Date(date),
        None => PlayTimestamp::Unparseable(raw.to_string()),
    }
}
