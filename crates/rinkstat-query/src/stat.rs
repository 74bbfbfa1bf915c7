//! Counter field identifiers.
//!
//! The [`Stat`] enum is the closed set of numeric fields a matcher may
//! constrain. Field names coming from callers are resolved against it once,
//! when the matcher is constructed.

use std::str::FromStr;

use crate::error::QueryError;

/// A numeric counter on a statistics record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stat {
    /// Games played.
    Games,
    /// Goals scored.
    Goals,
    /// Assists credited.
    Assists,
    /// Points as reported by the source.
    Points,
}

impl Stat {
    /// Every counter, in declaration order.
    pub const ALL: [Stat; 4] = [Stat::Games, Stat::Goals, Stat::Assists, Stat::Points];

    /// Returns the canonical field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Games => "games",
            Stat::Goals => "goals",
            Stat::Assists => "assists",
            Stat::Points => "points",
        }
    }

    /// Returns every canonical name, comma separated.
    pub(crate) fn expected_names() -> String {
        Stat::ALL.map(Stat::as_str).join(", ")
    }

    /// Resolves a field name, failing with [`QueryError::UnknownField`].
    ///
    /// Matching is exact: `"Points"` is not `"points"`.
    pub fn from_name(name: &str) -> Result<Stat, QueryError> {
        Stat::ALL
            .into_iter()
            .find(|stat| stat.as_str() == name)
            .ok_or_else(|| QueryError::UnknownField {
                field: name.to_string(),
            })
    }
}

impl FromStr for Stat {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stat::from_name(s)
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
