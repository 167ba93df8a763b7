/// Review store
///
/// Holds every loaded review in memory for the life of the process.
/// Built once from a JSON Lines dataset and never modified afterwards.

pub mod models;
pub mod review_store;

pub use models::Review;
pub use review_store::ReviewStore;
