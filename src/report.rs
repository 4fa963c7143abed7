use crate::error::PlayLogError;
use crate::models::{DailyAggregation, PlayReport, ReportOptions};
use std::fmt;

/// Computes how many (user, date) aggregates hit the target distinct song
/// count exactly, and the largest distinct song count overall.
///
/// Fails with [`PlayLogError::NoAggregates`] when there is nothing to take a
/// maximum over, e.g. a header-only log or one where no timestamp parsed.
pub fn summarize(
    aggregation: &DailyAggregation,
    options: &ReportOptions,
) -> Result<PlayReport, PlayLogError> {
    let max_distinct_songs = aggregation
        .counts
        .iter()
        .map(|c| c.distinct_songs)
        .max()
        .ok_or(PlayLogError::NoAggregates)?;

    let users_at_target = aggregation
        .counts
        .iter()
        .filter(|c| c.distinct_songs == options.target_distinct_songs)
        .count();

    Ok(PlayReport {
        target_distinct_songs: options.target_distinct_songs,
        users_at_target,
        max_distinct_songs,
        groups: aggregation.counts.len(),
        unparseable: aggregation.unparseable,
    })
}

impl fmt::Display for PlayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Number of users who played {} distinct songs: {}",
            self.target_distinct_songs, self.users_at_target
        )?;
        write!(
            f,
            "Maximum number of distinct songs played by a user: {}",
            self.max_distinct_songs
        )
    }
}
