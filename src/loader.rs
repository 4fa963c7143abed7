use crate::datetime::parse_play_timestamp;
use crate::error::PlayLogError;
use crate::models::{Play, PlayTimestamp, RawPlay};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};

const CLIENT_ID: &str = "CLIENT_ID";
const SONG_ID: &str = "SONG_ID";
const PLAY_TS: &str = "PLAY_TS";

/// Positions of the columns we need within the header row.
struct ColumnIndexes {
    client_id: usize,
    song_id: usize,
    play_ts: usize,
}

impl ColumnIndexes {
    fn from_headers(headers: &StringRecord) -> Result<Self, PlayLogError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or(PlayLogError::MissingColumn(name))
        };

        Ok(ColumnIndexes {
            client_id: find(CLIENT_ID)?,
            song_id: find(SONG_ID)?,
            play_ts: find(PLAY_TS)?,
        })
    }

    fn raw_play(&self, record: &StringRecord) -> RawPlay {
        let field = |index: usize| record.get(index).unwrap_or_default().to_string();
        RawPlay {
            client_id: field(self.client_id),
            song_id: field(self.song_id),
            play_ts: field(self.play_ts),
        }
    }
}

/// Reads the rows of a tab-delimited play log. The first row is the header;
/// any column besides `CLIENT_ID`, `SONG_ID` and `PLAY_TS` is ignored.
///
/// Every row must have as many fields as the header, otherwise the whole read
/// fails with [`PlayLogError::Csv`].
pub fn read_raw_plays(text: &str) -> Result<Vec<RawPlay>, PlayLogError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let columns = ColumnIndexes::from_headers(reader.headers()?)?;

    let mut plays = Vec::new();
    for record in reader.records() {
        plays.push(columns.raw_play(&record?));
    }
    Ok(plays)
}

/// Attaches the parsed `PLAY_TS` to a raw row.
pub fn enrich(raw: RawPlay) -> Play {
    let timestamp = parse_play_timestamp(&raw.play_ts);
    Play {
        client_id: raw.client_id,
        song_id: raw.song_id,
        play_ts: raw.play_ts,
        timestamp,
    }
}

/// Reads and enriches a whole play log.
///
/// Timestamps that match neither accepted format do not fail the load: the
/// play is kept with [`PlayTimestamp::Unparseable`] and reported in the log.
pub fn load_plays_from_str(text: &str) -> Result<Vec<Play>, PlayLogError> {
    let plays: Vec<Play> = read_raw_plays(text)?.into_iter().map(enrich).collect();

    let mut fallback = 0;
    let mut unparseable = 0;
    for (row, play) in plays.iter().enumerate() {
        match &play.timestamp {
            PlayTimestamp::DateTime(_) => {}
            PlayTimestamp::Date(_) => fallback += 1,
            PlayTimestamp::Unparseable(raw) => {
                unparseable += 1;
                debug!("Row {}: unparseable PLAY_TS {:?}", row + 1, raw);
            }
        }
    }

    debug!(
        "Loaded {} plays ({} with date-only timestamps)",
        plays.len(),
        fallback
    );
    if unparseable > 0 {
        warn!("{} plays have a PLAY_TS in neither accepted format", unparseable);
    }

    Ok(plays)
}
