//! Record sources.
//!
//! A [`RecordSource`] yields the ordered collection a matcher runs over. The
//! crate ships an in-memory [`StaticSource`] and, with the `json` feature, a
//! [`JsonSource`] decoding a JSON array of player objects from any reader.

use crate::error::SourceError;
use crate::record::Record;

#[cfg(feature = "json")]
pub use self::json::JsonSource;

/// Supplies an ordered collection of records.
pub trait RecordSource {
    /// The record type produced.
    type Record: Record;

    /// Returns the records in source order.
    fn records(&mut self) -> Result<Vec<Self::Record>, SourceError>;
}

/// An in-memory fixture source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticSource<R> {
    records: Vec<R>,
}

impl<R> StaticSource<R> {
    /// Wraps a fixed collection.
    pub fn new(records: Vec<R>) -> Self {
        StaticSource { records }
    }
}

impl<R> FromIterator<R> for StaticSource<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        StaticSource::new(iter.into_iter().collect())
    }
}

impl<R: Record + Clone> RecordSource for StaticSource<R> {
    type Record = R;

    fn records(&mut self) -> Result<Vec<R>, SourceError> {
        Ok(self.records.clone())
    }
}

#[cfg(feature = "json")]
mod json {
    use std::io::Read;

    use serde::Deserialize;
    use tracing::debug;

    use super::RecordSource;
    use crate::error::SourceError;
    use crate::record::Player;

    /// Wire shape of one player object. Missing counters read as zero and
    /// missing points fall back to goals plus assists.
    #[derive(Debug, Deserialize)]
    struct PlayerRow {
        name: String,
        team: String,
        #[serde(default)]
        nationality: String,
        #[serde(default)]
        games: u32,
        #[serde(default)]
        goals: u32,
        #[serde(default)]
        assists: u32,
        #[serde(default)]
        points: Option<u32>,
    }

    impl From<PlayerRow> for Player {
        fn from(row: PlayerRow) -> Self {
            Player {
                points: row
                    .points
                    .unwrap_or_else(|| row.goals.saturating_add(row.assists)),
                name: row.name,
                team: row.team,
                nationality: row.nationality,
                games: row.games,
                goals: row.goals,
                assists: row.assists,
            }
        }
    }

    /// Decodes players from a JSON array.
    ///
    /// The reader is consumed on the first call to
    /// [`records`](RecordSource::records); later calls return the decoded
    /// players again without touching it.
    ///
    /// ```
    /// use rinkstat_query::{JsonSource, RecordSource};
    ///
    /// let payload = r#"[{"name": "Kurri", "team": "EDM", "goals": 37, "assists": 53}]"#;
    /// let mut source = JsonSource::new(payload.as_bytes());
    /// let players = source.records().unwrap();
    /// assert_eq!(players[0].points, 90);
    /// ```
    #[derive(Debug)]
    pub struct JsonSource<Rd> {
        reader: Option<Rd>,
        decoded: Vec<Player>,
    }

    impl<Rd: Read> JsonSource<Rd> {
        /// Creates a source over a reader. Nothing is read until
        /// [`records`](RecordSource::records) is called.
        pub fn new(reader: Rd) -> Self {
            JsonSource {
                reader: Some(reader),
                decoded: Vec::new(),
            }
        }
    }

    impl<Rd: Read> RecordSource for JsonSource<Rd> {
        type Record = Player;

        fn records(&mut self) -> Result<Vec<Player>, SourceError> {
            if let Some(reader) = self.reader.take() {
                let rows: Vec<PlayerRow> = serde_json::from_reader(reader)?;
                self.decoded = rows.into_iter().map(Player::from).collect();
                debug!(records = self.decoded.len(), "decoded player records");
            }
            Ok(self.decoded.clone())
        }
    }
}
