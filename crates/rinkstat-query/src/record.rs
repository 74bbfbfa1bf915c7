//! The records matchers are evaluated against.
//!
//! The engine is generic over the [`Record`] trait, which exposes the group
//! label and the closed set of [`Stat`] counters. [`Player`] is the concrete
//! record produced by the bundled sources.

use crate::stat::Stat;

/// Trait for types a [`Matcher`](crate::Matcher) can evaluate.
///
/// # Manual Implementation
///
/// ```
/// use rinkstat_query::{Record, Stat};
///
/// struct Line {
///     skater: String,
///     club: String,
///     goals: u32,
/// }
///
/// impl Record for Line {
///     fn name(&self) -> &str {
///         &self.skater
///     }
///
///     fn group(&self) -> &str {
///         &self.club
///     }
///
///     fn counter(&self, stat: Stat) -> u32 {
///         match stat {
///             Stat::Goals | Stat::Points => self.goals,
///             Stat::Games | Stat::Assists => 0,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the identifying name.
    fn name(&self) -> &str;

    /// Returns the group label compared by `GroupEquals`.
    fn group(&self) -> &str;

    /// Returns the value of a counter.
    fn counter(&self, stat: Stat) -> u32;
}

impl<R: Record + ?Sized> Record for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn group(&self) -> &str {
        (**self).group()
    }

    fn counter(&self, stat: Stat) -> u32 {
        (**self).counter(stat)
    }
}

/// One player-season statistics line.
///
/// `points` is an independent counter; it is not recomputed from goals and
/// assists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Player {
    pub name: String,
    pub team: String,
    pub nationality: String,
    pub games: u32,
    pub goals: u32,
    pub assists: u32,
    pub points: u32,
}

impl Player {
    /// Creates a player with the given name and team and all counters at zero.
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            team: team.into(),
            ..Player::default()
        }
    }

    /// Sets the nationality.
    pub fn nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = nationality.into();
        self
    }

    /// Sets a single counter.
    pub fn with(mut self, stat: Stat, value: u32) -> Self {
        match stat {
            Stat::Games => self.games = value,
            Stat::Goals => self.goals = value,
            Stat::Assists => self.assists = value,
            Stat::Points => self.points = value,
        }
        self
    }

    /// Sets goals and assists, and points to their sum, saturating at
    /// `u32::MAX`.
    pub fn scoring(self, goals: u32, assists: u32) -> Self {
        self.with(Stat::Goals, goals)
            .with(Stat::Assists, assists)
            .with(Stat::Points, goals.saturating_add(assists))
    }
}

impl Record for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn group(&self) -> &str {
        &self.team
    }

    fn counter(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Games => self.games,
            Stat::Goals => self.goals,
            Stat::Assists => self.assists,
            Stat::Points => self.points,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:20} {:15} {:2} + {:2} = {:2}",
            self.name, self.team, self.goals, self.assists, self.points
        )
    }
}
