//! A loaded record collection with query helpers.

use tracing::debug;

use crate::engine::matches;
use crate::error::SourceError;
use crate::matcher::Matcher;
use crate::record::Record;
use crate::source::RecordSource;

/// Records loaded once from a source, queried many times.
///
/// ```
/// use rinkstat_query::{Matcher, Player, QueryBuilder, Statistics};
///
/// let stats = Statistics::new(vec![
///     Player::new("Semenko", "EDM").scoring(4, 12),
///     Player::new("Lemieux", "PIT").scoring(45, 54),
/// ]);
///
/// let matcher = QueryBuilder::new().plays_in("PIT").build();
/// assert_eq!(stats.matches(&matcher)[0].name, "Lemieux");
/// assert_eq!(stats.count(&Matcher::All), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics<R> {
    records: Vec<R>,
}

impl<R: Record> Statistics<R> {
    /// Wraps an already loaded collection.
    pub fn new(records: Vec<R>) -> Self {
        Statistics { records }
    }

    /// Loads every record from a source.
    pub fn from_source<S>(source: &mut S) -> Result<Self, SourceError>
    where
        S: RecordSource<Record = R>,
    {
        let records = source.records()?;
        debug!(records = records.len(), "loaded statistics");
        Ok(Statistics::new(records))
    }

    /// Returns the records in source order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Returns the number of loaded records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records the matcher accepts, in source order.
    pub fn matches(&self, matcher: &Matcher) -> Vec<&R> {
        matches(matcher, &self.records)
    }

    /// Counts the records the matcher accepts.
    pub fn count(&self, matcher: &Matcher) -> usize {
        matcher.count(&self.records)
    }

    /// Returns the first record whose name contains `fragment`.
    pub fn search(&self, fragment: &str) -> Option<&R> {
        self.records
            .iter()
            .find(|record| record.name().contains(fragment))
    }

    /// Returns the records of one group, in source order.
    pub fn team(&self, group: &str) -> Vec<&R> {
        self.matches(&Matcher::group_equals(group))
    }
}
