//! Mix allocation engine, persistence, and feed fetch plumbing for
//! Newsloom. Everything here is presentation-free; the reader crate builds
//! its screen state on top of these pieces.
#![allow(missing_docs)]

pub mod constants;
#[cfg(feature = "demo")]
pub mod demo;
pub mod fetch;
pub mod mix;
pub mod store;
pub mod time;

// Intentionally curated re-exports for downstream consumers.
pub use fetch::{ApiClient, ArticleSource, FetchError, mix_for_feed};
pub use mix::{
    adjust_weight, normalize_weights, selected_to_mix, weights_to_mix,
};
pub use store::{Store, StoreError};
pub use time::format_relative_time;
