//! The predicate tree.
//!
//! A [`Matcher`] is either a leaf test against one record field or a
//! composite owning its children. Trees are immutable once built; combining
//! matchers always produces a new node.

use std::fmt;

use crate::error::Result;
use crate::record::Record;
use crate::stat::Stat;

/// A node in a predicate tree.
///
/// # Example
///
/// ```
/// use rinkstat_query::{Matcher, Player, Stat};
///
/// let matcher = Matcher::all_of([
///     Matcher::group_equals("EDM"),
///     Matcher::at_least(Stat::Points, 50),
/// ]);
///
/// assert!(matcher.evaluate(&Player::new("A", "EDM").with(Stat::Points, 60)));
/// assert!(!matcher.evaluate(&Player::new("B", "PIT").with(Stat::Points, 90)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Matcher {
    /// Matches every record.
    #[default]
    All,
    /// Matches when `record[stat] >= threshold`.
    FieldAtLeast { stat: Stat, threshold: i64 },
    /// Matches when `record[stat] < threshold`.
    FieldFewerThan { stat: Stat, threshold: i64 },
    /// Matches when the record's group equals the value exactly.
    GroupEquals(String),
    /// Matches when the child does not.
    Not(Box<Matcher>),
    /// Matches when every child matches. Empty matches everything.
    And(Vec<Matcher>),
    /// Matches when at least one child matches. Empty matches nothing.
    Or(Vec<Matcher>),
}

impl Matcher {
    // ========================================================================
    // Leaf constructors
    // ========================================================================

    /// Creates a `FieldAtLeast` leaf for a known counter.
    pub fn at_least(stat: Stat, threshold: i64) -> Self {
        Matcher::FieldAtLeast { stat, threshold }
    }

    /// Creates a `FieldFewerThan` leaf for a known counter.
    pub fn fewer_than(stat: Stat, threshold: i64) -> Self {
        Matcher::FieldFewerThan { stat, threshold }
    }

    /// Creates a `FieldAtLeast` leaf from a field name.
    ///
    /// Returns [`QueryError::UnknownField`](crate::QueryError::UnknownField)
    /// if the name is not a counter.
    pub fn field_at_least(field: &str, threshold: i64) -> Result<Self> {
        Ok(Matcher::at_least(Stat::from_name(field)?, threshold))
    }

    /// Creates a `FieldFewerThan` leaf from a field name.
    pub fn field_fewer_than(field: &str, threshold: i64) -> Result<Self> {
        Ok(Matcher::fewer_than(Stat::from_name(field)?, threshold))
    }

    /// Creates a `GroupEquals` leaf.
    pub fn group_equals(group: impl Into<String>) -> Self {
        Matcher::GroupEquals(group.into())
    }

    // ========================================================================
    // Composition
    // ========================================================================

    /// Wraps a matcher in `Not`.
    pub fn negate(inner: Matcher) -> Self {
        Matcher::Not(Box::new(inner))
    }

    /// Combines matchers with `And`, preserving order.
    pub fn all_of(children: impl IntoIterator<Item = Matcher>) -> Self {
        Matcher::And(children.into_iter().collect())
    }

    /// Combines matchers with `Or`, preserving order.
    pub fn any_of(children: impl IntoIterator<Item = Matcher>) -> Self {
        Matcher::Or(children.into_iter().collect())
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Tests a single record.
    ///
    /// Composites evaluate children left to right and stop at the first
    /// child that decides the result.
    pub fn evaluate<R: Record + ?Sized>(&self, record: &R) -> bool {
        match self {
            Matcher::All => true,
            Matcher::FieldAtLeast { stat, threshold } => {
                i64::from(record.counter(*stat)) >= *threshold
            }
            Matcher::FieldFewerThan { stat, threshold } => {
                i64::from(record.counter(*stat)) < *threshold
            }
            Matcher::GroupEquals(group) => record.group() == group.as_str(),
            Matcher::Not(inner) => !inner.evaluate(record),
            Matcher::And(children) => children.iter().all(|child| child.evaluate(record)),
            Matcher::Or(children) => children.iter().any(|child| child.evaluate(record)),
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns `true` for the unconditional `All` matcher.
    pub fn is_all(&self) -> bool {
        matches!(self, Matcher::All)
    }

    /// Returns `true` for `And` and `Or` nodes.
    pub fn is_composite(&self) -> bool {
        matches!(self, Matcher::And(_) | Matcher::Or(_))
    }

    /// Returns the number of levels in the tree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Matcher::All
            | Matcher::FieldAtLeast { .. }
            | Matcher::FieldFewerThan { .. }
            | Matcher::GroupEquals(_) => 1,
            Matcher::Not(inner) => 1 + inner.depth(),
            Matcher::And(children) | Matcher::Or(children) => {
                1 + children.iter().map(Matcher::depth).max().unwrap_or(0)
            }
        }
    }
}

impl std::ops::Not for Matcher {
    type Output = Matcher;

    fn not(self) -> Matcher {
        Matcher::negate(self)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::All => write!(f, "all"),
            Matcher::FieldAtLeast { stat, threshold } => write!(f, "{stat} >= {threshold}"),
            Matcher::FieldFewerThan { stat, threshold } => write!(f, "{stat} < {threshold}"),
            Matcher::GroupEquals(group) => write!(f, "group == {group:?}"),
            Matcher::Not(inner) => {
                write!(f, "not ")?;
                write_operand(f, inner)
            }
            Matcher::And(children) => write_joined(f, children, "and", "true"),
            Matcher::Or(children) => write_joined(f, children, "or", "false"),
        }
    }
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    children: &[Matcher],
    keyword: &str,
    empty: &str,
) -> fmt::Result {
    if children.is_empty() {
        return write!(f, "{empty}");
    }
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " {keyword} ")?;
        }
        write_operand(f, child)?;
    }
    Ok(())
}

// Multi-child composites are parenthesized so the output reads unambiguously.
fn write_operand(f: &mut fmt::Formatter<'_>, matcher: &Matcher) -> fmt::Result {
    match matcher {
        Matcher::And(children) | Matcher::Or(children) if children.len() > 1 => {
            write!(f, "({matcher})")
        }
        _ => write!(f, "{matcher}"),
    }
}
