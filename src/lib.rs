/// corating-recommender library
///
/// "People who rated this also rated" recommendations over a review dataset.

pub mod config;
pub mod engine;
pub mod error;
pub mod logger;
pub mod server;
pub mod store;

// Re-exports for convenience
pub use engine::Recommender;
pub use error::{RecommendError, Result};
pub use store::ReviewStore;
