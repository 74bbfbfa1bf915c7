//! Property-based tests for matcher algebra using proptest.

use proptest::prelude::*;
use rinkstat_query::{matches, Matcher, Player, QueryBuilder, Record, Stat};

// ============================================================================
// Strategies
// ============================================================================

const TEAMS: [&str; 4] = ["EDM", "PIT", "PHI", "DET"];

fn stat_strategy() -> impl Strategy<Value = Stat> {
    prop::sample::select(Stat::ALL.to_vec())
}

fn team_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(TEAMS.to_vec()).prop_map(String::from)
}

fn player_strategy() -> impl Strategy<Value = Player> {
    (
        "[A-Z][a-z]{2,8}",
        team_strategy(),
        0u32..90,
        0u32..70,
        0u32..100,
        0u32..180,
    )
        .prop_map(|(name, team, games, goals, assists, points)| {
            Player::new(name, team)
                .with(Stat::Games, games)
                .with(Stat::Goals, goals)
                .with(Stat::Assists, assists)
                .with(Stat::Points, points)
        })
}

fn players_strategy() -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec(player_strategy(), 0..40)
}

fn leaf_strategy() -> impl Strategy<Value = Matcher> {
    prop_oneof![
        Just(Matcher::All),
        (stat_strategy(), -5i64..120).prop_map(|(stat, n)| Matcher::at_least(stat, n)),
        (stat_strategy(), -5i64..120).prop_map(|(stat, n)| Matcher::fewer_than(stat, n)),
        team_strategy().prop_map(Matcher::group_equals),
    ]
}

fn matcher_strategy() -> impl Strategy<Value = Matcher> {
    leaf_strategy().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(Matcher::negate),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Matcher::And),
            prop::collection::vec(inner, 0..4).prop_map(Matcher::Or),
        ]
    })
}

/// One counter constraint: `(stat, threshold, at_least)`. `at_least == false`
/// means "fewer than".
type Constraint = (Stat, i64, bool);

/// The raw inputs of a chain: an optional team and counter constraints.
#[derive(Debug, Clone)]
struct ChainSpec {
    team: Option<String>,
    constraints: Vec<Constraint>,
}

impl ChainSpec {
    fn builder(&self) -> QueryBuilder {
        let mut builder = QueryBuilder::new();
        if let Some(team) = &self.team {
            builder = builder.plays_in(team.clone());
        }
        for &(stat, n, at_least) in &self.constraints {
            builder = if at_least {
                builder.at_least(stat, n)
            } else {
                builder.fewer_than(stat, n)
            };
        }
        builder
    }

    /// Evaluates the chain straight from the player's fields.
    fn accepts(&self, player: &Player) -> bool {
        let team_ok = self.team.as_ref().map_or(true, |team| player.team == *team);
        team_ok
            && self.constraints.iter().all(|&(stat, n, at_least)| {
                let value = i64::from(player.counter(stat));
                if at_least {
                    value >= n
                } else {
                    value < n
                }
            })
    }

    /// The expected rendering of the built chain.
    fn rendered(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(team) = &self.team {
            parts.push(format!("group == {team:?}"));
        }
        for &(stat, n, at_least) in &self.constraints {
            let op = if at_least { ">=" } else { "<" };
            parts.push(format!("{} {op} {n}", stat.as_str()));
        }
        if parts.is_empty() {
            "all".to_string()
        } else {
            parts.join(" and ")
        }
    }
}

fn chain_strategy() -> impl Strategy<Value = ChainSpec> {
    (
        prop::option::of(team_strategy()),
        prop::collection::vec((stat_strategy(), 0i64..100, any::<bool>()), 0..3),
    )
        .prop_map(|(team, constraints)| ChainSpec { team, constraints })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Nothing comes out of an empty collection.
    #[test]
    fn empty_input_yields_nothing(matcher in matcher_strategy()) {
        let players: Vec<Player> = Vec::new();
        prop_assert!(matches(&matcher, &players).is_empty());
    }

    /// `All` is the identity filter.
    #[test]
    fn all_is_identity(players in players_strategy()) {
        let results = matches(&Matcher::All, &players);
        let expected: Vec<&Player> = players.iter().collect();
        prop_assert_eq!(results, expected);
    }

    /// `Not(All)` rejects everything.
    #[test]
    fn not_all_is_empty(players in players_strategy()) {
        prop_assert!(matches(&Matcher::negate(Matcher::All), &players).is_empty());
    }

    /// Single-child composites behave like their child.
    #[test]
    fn single_child_composites_are_identity(
        matcher in matcher_strategy(),
        players in players_strategy(),
    ) {
        let direct = matches(&matcher, &players);
        prop_assert_eq!(&matches(&Matcher::And(vec![matcher.clone()]), &players), &direct);
        prop_assert_eq!(&matches(&Matcher::Or(vec![matcher]), &players), &direct);
    }

    /// not (a and b) == (not a) or (not b)
    #[test]
    fn de_morgan(
        a in matcher_strategy(),
        b in matcher_strategy(),
        players in players_strategy(),
    ) {
        let lhs = Matcher::negate(Matcher::all_of([a.clone(), b.clone()]));
        let rhs = Matcher::any_of([Matcher::negate(a), Matcher::negate(b)]);
        prop_assert_eq!(matches(&lhs, &players), matches(&rhs, &players));
    }

    /// Filtering returns a subsequence of the input and agrees with count.
    #[test]
    fn filter_is_ordered_subsequence(
        matcher in matcher_strategy(),
        players in players_strategy(),
    ) {
        let results = matches(&matcher, &players);
        prop_assert!(results.len() <= players.len());
        prop_assert_eq!(results.len(), matcher.count(&players));

        let mut cursor = players.iter();
        for found in &results {
            prop_assert!(cursor.any(|p| std::ptr::eq(p, *found)));
        }
    }

    /// A chain accepts exactly the records that satisfy every generated constraint.
    #[test]
    fn chain_is_conjunction(
        chain in chain_strategy(),
        players in players_strategy(),
    ) {
        let matcher = chain.builder().build();

        for player in &players {
            prop_assert_eq!(matcher.evaluate(player), chain.accepts(player));
        }
    }

    /// one_of accepts exactly the records accepted by some generated chain.
    #[test]
    fn one_of_is_disjunction(
        chains in prop::collection::vec(chain_strategy(), 1..4),
        players in players_strategy(),
    ) {
        let matcher = QueryBuilder::new()
            .one_of(chains.iter().map(ChainSpec::builder))
            .unwrap()
            .build();

        for player in &players {
            let expected = chains.iter().any(|chain| chain.accepts(player));
            prop_assert_eq!(matcher.evaluate(player), expected);
        }
    }

    /// A built chain renders its constraints in append order.
    #[test]
    fn chain_renders_in_append_order(chain in chain_strategy()) {
        prop_assert_eq!(chain.builder().build().to_string(), chain.rendered());
    }
}
