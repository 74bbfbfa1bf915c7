//! Rinkstat Query - composable predicates over hockey statistics records.
//!
//! A filter is a tree of [`Matcher`] nodes. Leaves test one record field;
//! `Not`, `And` and `Or` combine them. [`QueryBuilder`] assembles the common
//! shapes (chains of constraints, grouped into alternatives) without naming
//! the composite nodes, and [`matches`] runs a matcher over a slice.
//!
//! # Quick Start
//!
//! ```rust
//! use rinkstat_query::{matches, Player, QueryBuilder, Stat};
//!
//! # fn main() -> rinkstat_query::Result<()> {
//! let players = vec![
//!     Player::new("A", "EDM").with(Stat::Points, 60),
//!     Player::new("B", "PIT").with(Stat::Points, 90),
//! ];
//!
//! let matcher = QueryBuilder::new()
//!     .plays_in("EDM")
//!     .has_at_least(50, "points")?
//!     .build();
//!
//! let results = matches(&matcher, &players);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].name, "A");
//! # Ok(())
//! # }
//! ```
//!
//! # Matcher Semantics
//!
//! | Variant | Matches when |
//! |---------|--------------|
//! | `All` | always |
//! | `FieldAtLeast` | `record[stat] >= threshold` |
//! | `FieldFewerThan` | `record[stat] < threshold` |
//! | `GroupEquals` | `record.group == value` (exact) |
//! | `Not` | the child does not match |
//! | `And` | every child matches (empty = always) |
//! | `Or` | some child matches (empty = never) |
//!
//! Field names are resolved against [`Stat`] when a matcher is constructed.
//! An unknown name is a [`QueryError::UnknownField`] before any record is
//! scanned; evaluation itself never fails.
//!
//! # Features
//!
//! - `json` (default): [`JsonSource`] and `Serialize` for [`Player`].

mod builder;
mod engine;
mod error;
mod matcher;
mod record;
mod source;
mod stat;
mod stats;

// Re-export public API
pub use builder::QueryBuilder;
pub use engine::matches;
pub use error::{QueryError, Result, SourceError};
pub use matcher::Matcher;
pub use record::{Player, Record};
#[cfg(feature = "json")]
pub use source::JsonSource;
pub use source::{RecordSource, StaticSource};
pub use stat::Stat;
pub use stats::Statistics;
