//! Core data model definitions shared across Newsloom crates.
#![allow(missing_docs)]

pub mod article;
pub mod category;
pub mod error;
pub mod feed;
pub mod ids;
pub mod prelude;
pub mod weights;

// Intentionally curated re-exports for downstream consumers.
pub use article::Article;
pub use category::CategoryId;
pub use error::{ModelError, Result as ModelResult};
pub use feed::Feed;
pub use ids::FeedId;
pub use weights::{MixQuota, WeightMap};
