//! Headless reader-screen state for Newsloom.
//!
//! The presentation layer owns the widgets, timers, and network calls;
//! this crate owns the decisions: which panel is active, what to fetch,
//! how a gesture resolves, and how the mix-builder screen evolves.
#![allow(missing_docs)]

pub mod carousel;
pub mod constants;
pub mod dashboard;
pub mod feed_screen;
pub mod scroll_positions;

// Intentionally curated re-exports for downstream consumers.
pub use carousel::{CarouselController, CarouselHost};
pub use dashboard::Dashboard;
pub use feed_screen::{FeedScreen, FetchPlan, ScreenMode};
pub use scroll_positions::ScrollPositions;
