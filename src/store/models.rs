/// Data models for the review dataset
///
/// One `Review` per line of the input file.

use serde::{Deserialize, Serialize};

/// A single (user, item, rating) observation
///
/// The Amazon review dumps call the item column `asin`; `item_id` is accepted
/// as well. Any other fields on the line (review text, title, timestamps...)
/// are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub user_id: String,
    #[serde(rename = "asin", alias = "item_id")]
    pub item_id: String,
    pub rating: f64,
}

impl Review {
    pub fn new(user_id: impl Into<String>, item_id: impl Into<String>, rating: f64) -> Self {
        Self {
            user_id: user_id.into(),
            item_id: item_id.into(),
            rating,
        }
    }
}
