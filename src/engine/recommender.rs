/// Item-to-item recommender
///
/// Ranks the items co-rated with a query item by their accumulated score.

use crate::engine::{CountingMode, Scorer};
use crate::store::ReviewStore;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// Number of recommendations returned when the caller doesn't ask for a count
pub const DEFAULT_LIMIT: usize = 5;

/// A recommended item with the score that ranked it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    pub item_id: String,
    pub score: f64,
}

/// Recommendation engine over a loaded review store
///
/// Read-only: any number of threads may query the same instance at once.
pub struct Recommender {
    store: Arc<ReviewStore>,
    mode: CountingMode,
}

impl Recommender {
    /// Create a new recommender using source-compatible (literal) counting
    pub fn new(store: Arc<ReviewStore>) -> Self {
        Self::with_mode(store, CountingMode::default())
    }

    pub fn with_mode(store: Arc<ReviewStore>, mode: CountingMode) -> Self {
        Self { store, mode }
    }

    pub fn store(&self) -> &ReviewStore {
        &self.store
    }

    pub fn mode(&self) -> CountingMode {
        self.mode
    }

    /// Items most associated with `item_id`, best first
    ///
    /// # Arguments
    /// * `item_id` - The query item. Unknown items are fine.
    /// * `limit` - Maximum number of items to return
    ///
    /// # Returns
    /// * At most `limit` item ids. Empty when nobody who rated `item_id`
    ///   rated anything else. Never contains `item_id` itself.
    pub fn recommend(&self, item_id: &str, limit: usize) -> Vec<String> {
        self.recommend_scored(item_id, limit)
            .into_iter()
            .map(|scored| scored.item_id)
            .collect()
    }

    /// `recommend` with the default limit of 5
    pub fn recommend_default(&self, item_id: &str) -> Vec<String> {
        self.recommend(item_id, DEFAULT_LIMIT)
    }

    /// Same ranking as `recommend`, keeping the scores
    ///
    /// Sorted by score descending; equal scores go in ascending item id order
    /// so the output is the same on every call.
    pub fn recommend_scored(&self, item_id: &str, limit: usize) -> Vec<ScoredItem> {
        if limit == 0 {
            return Vec::new();
        }

        let scores = Scorer::score(&self.store, item_id, self.mode);
        let candidates = scores.len();

        let mut ranked: Vec<(&str, f64)> = scores.into_iter().collect();
        ranked.sort_by(|a, b| rank_order(*a, *b));
        ranked.truncate(limit);

        debug!(
            item_id,
            candidates,
            returned = ranked.len(),
            mode = %self.mode,
            "scored recommendations"
        );

        ranked
            .into_iter()
            .map(|(item_id, score)| ScoredItem {
                item_id: item_id.to_string(),
                score,
            })
            .collect()
    }
}

fn rank_order(a: (&str, f64), b: (&str, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}
