//! Applying matchers to collections.
//!
//! Every operation here is a single read-only pass over the input slice.
//! Results keep the relative order of the input.

use tracing::debug;

use crate::matcher::Matcher;
use crate::record::Record;

/// Returns references to the records the matcher accepts, in input order.
///
/// ```
/// use rinkstat_query::{matches, Matcher, Player};
///
/// let players = vec![Player::new("A", "EDM"), Player::new("B", "PIT")];
/// assert_eq!(matches(&Matcher::All, &players).len(), 2);
/// assert!(matches(&Matcher::All, &Vec::<Player>::new()).is_empty());
/// ```
pub fn matches<'a, R: Record>(matcher: &Matcher, records: &'a [R]) -> Vec<&'a R> {
    matcher.filter(records)
}

impl Matcher {
    /// Filters a slice, returning references to matching records.
    pub fn filter<'a, R: Record>(&self, records: &'a [R]) -> Vec<&'a R> {
        let results: Vec<&'a R> = records
            .iter()
            .filter(|record| self.evaluate(*record))
            .collect();

        debug!(
            scanned = records.len(),
            matched = results.len(),
            "matcher pass complete"
        );
        results
    }

    /// Filters and clones matching records.
    pub fn filter_cloned<R: Record + Clone>(&self, records: &[R]) -> Vec<R> {
        self.filter(records).into_iter().cloned().collect()
    }

    /// Counts the matching records.
    pub fn count<R: Record>(&self, records: &[R]) -> usize {
        records.iter().filter(|record| self.evaluate(*record)).count()
    }

    /// Returns `true` if any record matches.
    pub fn any<R: Record>(&self, records: &[R]) -> bool {
        records.iter().any(|record| self.evaluate(record))
    }

    /// Returns `true` if every record matches. Vacuously true when empty.
    pub fn all<R: Record>(&self, records: &[R]) -> bool {
        records.iter().all(|record| self.evaluate(record))
    }

    /// Finds the first matching record.
    pub fn find<'a, R: Record>(&self, records: &'a [R]) -> Option<&'a R> {
        records.iter().find(|record| self.evaluate(*record))
    }

    /// Finds the index of the first matching record.
    pub fn position<R: Record>(&self, records: &[R]) -> Option<usize> {
        records.iter().position(|record| self.evaluate(record))
    }
}
