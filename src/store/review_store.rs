/// In-memory review store
///
/// Loads a JSON Lines dataset into memory and keeps per-item and per-user
/// position lists so queries don't have to scan every review.

use crate::error::{RecommendError, Result};
use crate::store::Review;
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Immutable collection of every review, in file order
///
/// There are no mutating methods. Once built, wrap it in an `Arc` and share it.
#[derive(Debug, Default)]
pub struct ReviewStore {
    reviews: Vec<Review>,
    // Positions into `reviews`, ascending
    by_item: HashMap<String, Vec<usize>>,
    by_user: HashMap<String, Vec<usize>>,
}

impl ReviewStore {
    /// Build a store from reviews that are already parsed
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        let mut by_item: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_user: HashMap<String, Vec<usize>> = HashMap::new();

        for (pos, review) in reviews.iter().enumerate() {
            by_item.entry(review.item_id.clone()).or_default().push(pos);
            by_user.entry(review.user_id.clone()).or_default().push(pos);
        }

        Self {
            reviews,
            by_item,
            by_user,
        }
    }

    /// Open a JSON Lines file and load every review in it
    ///
    /// # Arguments
    /// * `path` - Path to the dataset, one review object per line
    ///
    /// # Returns
    /// * `Ok(ReviewStore)` - Every line parsed
    /// * `Err(RecommendError)` - File missing/unreadable, or any line malformed
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let started = Instant::now();
        info!(path = %path.display(), "loading reviews");

        let file = File::open(path).await.map_err(|source| RecommendError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::load(BufReader::new(file)).await?;

        info!(
            path = %path.display(),
            reviews = store.len(),
            items = store.distinct_items(),
            users = store.distinct_users(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "reviews loaded"
        );
        Ok(store)
    }

    /// Load reviews from any buffered async reader
    ///
    /// All or nothing: the first malformed line aborts the load and nothing
    /// that was parsed before it is kept. Empty input gives an empty store.
    pub async fn load<R: AsyncBufRead + Unpin>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();
        let mut reviews = Vec::new();
        let mut line = 0;

        loop {
            line += 1;
            let text = match lines.next_line().await {
                Ok(Some(text)) => text,
                Ok(None) => break,
                Err(source) => return Err(RecommendError::Read { line, source }),
            };
            reviews.push(parse_line(&text, line)?);
        }

        debug!(count = reviews.len(), "parsed review lines");
        Ok(Self::from_reviews(reviews))
    }

    /// Number of reviews held
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// All reviews in load order
    pub fn iter(&self) -> impl Iterator<Item = &Review> {
        self.reviews.iter()
    }

    /// Number of different items that were reviewed
    pub fn distinct_items(&self) -> usize {
        self.by_item.len()
    }

    /// Number of different users that wrote reviews
    pub fn distinct_users(&self) -> usize {
        self.by_user.len()
    }

    /// Review at a position returned by one of the position lookups
    pub(crate) fn review(&self, pos: usize) -> &Review {
        &self.reviews[pos]
    }

    /// Positions of every review of `item_id`, in load order
    pub(crate) fn positions_for_item(&self, item_id: &str) -> &[usize] {
        self.by_item.get(item_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Positions of every review written by `user_id`, in load order
    pub(crate) fn positions_for_user(&self, user_id: &str) -> &[usize] {
        self.by_user.get(user_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn parse_line(text: &str, line: usize) -> Result<Review> {
    serde_json::from_str(text).map_err(|source| RecommendError::Parse { line, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    async fn load_str(data: &str) -> Result<ReviewStore> {
        ReviewStore::load(BufReader::new(data.as_bytes())).await
    }

    #[tokio::test]
    async fn test_load_lines() {
        let data = concat!(
            r#"{"user_id":"u1","asin":"A","rating":5}"#,
            "\n",
            r#"{"user_id":"u1","asin":"B","rating":3}"#,
            "\n",
            r#"{"user_id":"u2","asin":"A","rating":4}"#,
            "\n",
        );
        let store = load_str(data).await.unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.distinct_items(), 2);
        assert_eq!(store.distinct_users(), 2);
        assert_eq!(store.positions_for_item("A"), &[0, 2]);
        assert_eq!(store.positions_for_user("u1"), &[0, 1]);
        assert!(store.positions_for_item("Z").is_empty());
    }

    #[tokio::test]
    async fn test_empty_input_is_empty_store() {
        let store = load_str("").await.unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_crlf_and_missing_trailing_newline() {
        let data = "{\"user_id\":\"u1\",\"asin\":\"A\",\"rating\":1}\r\n{\"user_id\":\"u2\",\"asin\":\"B\",\"rating\":2}";
        let store = load_str(data).await.unwrap();
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let data = concat!(
            r#"{"user_id":"u1","asin":"A","rating":5}"#,
            "\n",
            r#"{"user_id":"u1","asin":"A","rating":5}"#,
            "\n",
        );
        let store = load_str(data).await.unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.distinct_items(), 1);
    }

    #[tokio::test]
    async fn test_malformed_line_fails_whole_load() {
        let data = concat!(
            r#"{"user_id":"u1","asin":"A","rating":5}"#,
            "\n",
            "this is not json\n",
            r#"{"user_id":"u2","asin":"A","rating":4}"#,
            "\n",
        );
        let err = load_str(data).await.unwrap_err();
        assert!(err.is_load_error());
        match err {
            RecommendError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_line_is_malformed() {
        let data = concat!(
            r#"{"user_id":"u1","asin":"A","rating":5}"#,
            "\n\n",
            r#"{"user_id":"u2","asin":"A","rating":4}"#,
        );
        assert!(matches!(
            load_str(data).await,
            Err(RecommendError::Parse { line: 2, .. })
        ));
    }

    #[tokio::test]
    async fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"user_id":"u1","asin":"A","rating":5.0}}"#).unwrap();
        writeln!(file, r#"{{"user_id":"u1","asin":"B","rating":3.0}}"#).unwrap();
        file.flush().unwrap();

        let store = ReviewStore::open(file.path()).await.unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.iter().next().unwrap().item_id, "A");
    }

    #[tokio::test]
    async fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.jsonl");

        let err = ReviewStore::open(&missing).await.unwrap_err();
        match err {
            RecommendError::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
