pub mod aggregate;
pub mod cli;
pub mod datetime;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;

use crate::aggregate::distinct_songs_per_day;
use crate::error::PlayLogError;
use crate::models::{Play, PlayReport, ReportOptions};
use crate::report::summarize;

pub use crate::loader::load_plays_from_str;

use log::{info, warn};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Memory-maps a play log and loads it without copying its contents into an
/// intermediate `String`. The mapping is dropped before this returns.
pub fn load_plays<P: AsRef<Path>>(path: P) -> Result<Vec<Play>, PlayLogError> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return load_plays_from_str("");
    }
    let mmap = unsafe { Mmap::map(&file)? };
    let text = std::str::from_utf8(&mmap)?;
    load_plays_from_str(text)
}

/// Loads the play log at `path` and computes its distinct song report.
pub fn report_file<P: AsRef<Path>>(path: P, options: &ReportOptions) -> Result<PlayReport, PlayLogError> {
    let plays = load_plays(path)?;
    let aggregation = distinct_songs_per_day(&plays);
    info!(
        "{} plays grouped into {} (user, date) aggregates, {} without a date",
        plays.len(),
        aggregation.counts.len(),
        aggregation.unparseable
    );
    if aggregation.missing_client_id > 0 || aggregation.missing_song_id > 0 {
        warn!(
            "{} plays have an empty CLIENT_ID and {} an empty SONG_ID",
            aggregation.missing_client_id, aggregation.missing_song_id
        );
    }
    summarize(&aggregation, options)
}
