use crate::models::{DailyAggregation, DailyKey, DailySongCount, Play};
use std::collections::{HashMap, HashSet};

/// Groups plays by (`CLIENT_ID`, date) and counts the distinct `SONG_ID`s in
/// each group.
///
/// Empty fields are missing values, not identifiers. Plays whose timestamp
/// has no date, or whose `CLIENT_ID` is empty, do not form a group of their
/// own; they are only counted in [`DailyAggregation::unparseable`] and
/// [`DailyAggregation::missing_client_id`]. An empty `SONG_ID` still places the
/// play in its (user, date) group but is never counted as a song, so a group
/// made only of such plays has a distinct count of zero.
pub fn distinct_songs_per_day(plays: &[Play]) -> DailyAggregation {
    let mut songs_by_key: HashMap<DailyKey, HashSet<&str>> = HashMap::new();
    let mut unparseable = 0;
    let mut missing_client_id = 0;
    let mut missing_song_id = 0;

    for play in plays {
        let Some(date) = play.timestamp.date() else {
            unparseable += 1;
            continue;
        };
        if play.client_id.is_empty() {
            missing_client_id += 1;
            continue;
        }
        let key = DailyKey {
            client_id: play.client_id.clone(),
            date,
        };
        let songs = songs_by_key.entry(key).or_default();
        if play.song_id.is_empty() {
            missing_song_id += 1;
        } else {
            songs.insert(play.song_id.as_str());
        }
    }

    let counts = songs_by_key
        .into_iter()
        .map(|(key, songs)| DailySongCount {
            key,
            distinct_songs: songs.len(),
        })
        .collect();

    DailyAggregation {
        counts,
        unparseable,
        missing_client_id,
        missing_song_id,
    }
}
