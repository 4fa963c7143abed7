use chrono::{NaiveDate, NaiveDateTime};

/// One row of the play log, as read from the `CLIENT_ID`, `SONG_ID` and
/// `PLAY_TS` columns.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlay {
    pub client_id: String,
    pub song_id: String,
    pub play_ts: String,
}

/// Outcome of parsing `PLAY_TS`.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayTimestamp {
    /// Matched `DD/MM/YYYY HH:MM:SS`.
    DateTime(NaiveDateTime),
    /// Only matched the date-only fallback `DD/MM/YYYY`.
    Date(NaiveDate),
    /// Matched neither format. Holds the raw text.
    Unparseable(String),
}

impl PlayTimestamp {
    /// The full timestamp, only present when the primary format matched.
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        match self {
            PlayTimestamp::DateTime(datetime) => Some(*datetime),
            _ => None,
        }
    }

    /// The calendar day of the play.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            PlayTimestamp::DateTime(datetime) => Some(datetime.date()),
            PlayTimestamp::Date(date) => Some(*date),
            PlayTimestamp::Unparseable(_) => None,
        }
    }
}

/// A play log row enriched with its parsed timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Play {
    pub client_id: String,
    pub song_id: String,
    pub play_ts: String,
    pub timestamp: PlayTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DailyKey {
    pub client_id: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySongCount {
    pub key: DailyKey,
    /// Number of unique `SONG_ID`s played under `key`.
    pub distinct_songs: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyAggregation {
    /// One entry per (user, date). Order is unspecified.
    pub counts: Vec<DailySongCount>,
    /// Plays left out of the grouping because their timestamp had no date.
    pub unparseable: usize,
    /// Plays left out of the grouping because `CLIENT_ID` was empty.
    pub missing_client_id: usize,
    /// Grouped plays whose empty `SONG_ID` was not counted as a song.
    pub missing_song_id: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// The exact distinct song count whose (user, date) aggregates are
    /// counted in [`PlayReport::users_at_target`].
    pub target_distinct_songs: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            target_distinct_songs: 346,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayReport {
    pub target_distinct_songs: usize,
    pub users_at_target: usize,
    pub max_distinct_songs: usize,
    /// Number of (user, date) aggregates the statistics were computed over.
    pub groups: usize,
    pub unparseable: usize,
}
