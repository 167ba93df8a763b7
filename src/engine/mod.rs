/// Recommendation engine
///
/// Turns the review store into "people who rated this also rated" answers.
/// Pure in-memory computation: no I/O, no locking, no errors.

pub mod recommender;
pub mod scorer;

pub use recommender::{Recommender, ScoredItem, DEFAULT_LIMIT};
pub use scorer::{CountingMode, Scorer};
