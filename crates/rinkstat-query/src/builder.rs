//! Fluent query assembly.
//!
//! [`QueryBuilder`] accumulates a chain of field constraints and, optionally,
//! a set of alternative chains, then collapses everything into one
//! [`Matcher`] on [`build`](QueryBuilder::build).

use tracing::{debug, trace};

use crate::error::{QueryError, Result};
use crate::matcher::Matcher;
use crate::stat::Stat;

/// A fluent builder producing a [`Matcher`].
///
/// Constraints appended with [`plays_in`](Self::plays_in),
/// [`has_at_least`](Self::has_at_least) and
/// [`has_fewer_than`](Self::has_fewer_than) form the current chain, which
/// is a conjunction. [`one_of`](Self::one_of) turns the builder into a
/// disjunction of alternatives:
///
/// ```text
/// ungrouped: build = And(chain)                (All when the chain is empty)
/// grouped:   build = Or(alternatives)
///            alternatives = [own chain, if any] ++ one_of arguments ++ [later chain, if any]
/// ```
///
/// # Example
///
/// ```
/// use rinkstat_query::{matches, Player, QueryBuilder, Stat};
///
/// # fn main() -> rinkstat_query::Result<()> {
/// let matcher = QueryBuilder::new()
///     .one_of([
///         QueryBuilder::new()
///             .plays_in("PHI")
///             .has_at_least(10, "assists")?
///             .has_fewer_than(10, "goals")?,
///         QueryBuilder::new()
///             .plays_in("EDM")
///             .has_at_least(50, "points")?,
///     ])?
///     .build();
///
/// let players = vec![Player::new("A", "EDM").with(Stat::Points, 55)];
/// assert_eq!(matches(&matcher, &players).len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryBuilder {
    chain: Vec<Matcher>,
    alternatives: Option<Vec<Matcher>>,
}

impl QueryBuilder {
    /// Creates an empty builder.
    ///
    /// An empty builder builds [`Matcher::All`].
    pub fn new() -> Self {
        QueryBuilder::default()
    }

    // ========================================================================
    // Chain extension
    // ========================================================================

    /// Appends a `GroupEquals` constraint to the current chain.
    pub fn plays_in(mut self, group: impl Into<String>) -> Self {
        self.chain.push(Matcher::group_equals(group));
        self
    }

    /// Appends a `FieldAtLeast` constraint to the current chain.
    ///
    /// Returns [`QueryError::UnknownField`] if `field` is not a counter.
    pub fn has_at_least(self, threshold: i64, field: &str) -> Result<Self> {
        Ok(self.at_least(Stat::from_name(field)?, threshold))
    }

    /// Appends a `FieldFewerThan` constraint to the current chain.
    ///
    /// Returns [`QueryError::UnknownField`] if `field` is not a counter.
    pub fn has_fewer_than(self, threshold: i64, field: &str) -> Result<Self> {
        Ok(self.fewer_than(Stat::from_name(field)?, threshold))
    }

    /// Appends a `FieldAtLeast` constraint for a known counter.
    pub fn at_least(mut self, stat: Stat, threshold: i64) -> Self {
        self.chain.push(Matcher::at_least(stat, threshold));
        self
    }

    /// Appends a `FieldFewerThan` constraint for a known counter.
    pub fn fewer_than(mut self, stat: Stat, threshold: i64) -> Self {
        self.chain.push(Matcher::fewer_than(stat, threshold));
        self
    }

    // ========================================================================
    // Grouping
    // ========================================================================

    /// Makes the built matcher a disjunction of alternatives.
    ///
    /// Each argument is finalized on its own and becomes one alternative, in
    /// the order given. If this builder has a non-empty chain, that chain is
    /// finalized first and becomes the leading alternative. Constraints added
    /// after this call start a new chain, which joins the alternatives at the
    /// next `one_of` or at [`build`](Self::build).
    ///
    /// Returns [`QueryError::EmptyQuery`] when there are no arguments, the
    /// current chain is empty and no earlier `one_of` collected alternatives.
    pub fn one_of<I>(mut self, builders: I) -> Result<Self>
    where
        I: IntoIterator<Item = QueryBuilder>,
    {
        let supplied: Vec<Matcher> = builders.into_iter().map(QueryBuilder::build).collect();

        if supplied.is_empty() && self.chain.is_empty() && self.alternatives.is_none() {
            return Err(QueryError::EmptyQuery);
        }

        let own = self.take_chain();
        let alternatives = self.alternatives.get_or_insert_with(Vec::new);
        alternatives.extend(own);
        alternatives.extend(supplied);

        trace!(alternatives = alternatives.len(), "grouped query alternatives");
        Ok(self)
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Finalizes the builder into a matcher.
    pub fn build(mut self) -> Matcher {
        let matcher = match self.alternatives.take() {
            None if self.chain.is_empty() => Matcher::All,
            None => Matcher::And(self.chain),
            Some(mut alternatives) => {
                alternatives.extend(self.take_chain());
                Matcher::Or(alternatives)
            }
        };

        debug!(query = %matcher, "built query");
        matcher
    }

    // Moves a non-empty chain out as one finalized `And` alternative.
    fn take_chain(&mut self) -> Option<Matcher> {
        if self.chain.is_empty() {
            None
        } else {
            Some(Matcher::And(std::mem::take(&mut self.chain)))
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns `true` if no constraint or alternative has been added.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty() && self.alternatives.is_none()
    }

    /// Returns the number of constraints in the current chain.
    pub fn chain_len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` once [`one_of`](Self::one_of) has succeeded.
    pub fn is_grouped(&self) -> bool {
        self.alternatives.is_some()
    }
}
