/// Co-rating score accumulation
///
/// Builds the per-query score table: for every user who rated the query item,
/// add the ratings they gave to other items.

use crate::store::ReviewStore;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// How often a co-rater's other ratings are counted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountingMode {
    /// Once per review of the query item. A user who rated the query item
    /// twice has every other rating counted twice.
    #[default]
    Literal,
    /// Once per co-rating user, however many times they rated the query item.
    Distinct,
}

impl fmt::Display for CountingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CountingMode::Literal => "literal",
            CountingMode::Distinct => "distinct",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for CountingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(CountingMode::Literal),
            "distinct" => Ok(CountingMode::Distinct),
            other => Err(format!(
                "unknown counting mode '{}' (expected literal or distinct)",
                other
            )),
        }
    }
}

/// Scores candidate items against a query item
pub struct Scorer;

impl Scorer {
    /// Accumulate a similarity score for every item co-rated with `query_item`
    ///
    /// Walks the reviews of `query_item` in load order and, for each, the
    /// reviewer's own reviews in load order. That is the same sequence of
    /// additions a nested scan over the whole store performs, so scores match
    /// it exactly, including float rounding.
    ///
    /// The query item itself never gets a score.
    pub fn score<'a>(
        store: &'a ReviewStore,
        query_item: &str,
        mode: CountingMode,
    ) -> HashMap<&'a str, f64> {
        let mut scores: HashMap<&'a str, f64> = HashMap::new();
        let mut seen_users: HashSet<&str> = HashSet::new();

        for &pos in store.positions_for_item(query_item) {
            let user_id = store.review(pos).user_id.as_str();

            if mode == CountingMode::Distinct && !seen_users.insert(user_id) {
                continue;
            }

            for &other_pos in store.positions_for_user(user_id) {
                let other = store.review(other_pos);
                if other.item_id != query_item {
                    *scores.entry(other.item_id.as_str()).or_insert(0.0) += other.rating;
                }
            }
        }

        scores
    }
}
