//! Scroll position bookkeeping for the center stream.
//!
//! Each feed keeps its own reading position so switching feeds and coming
//! back restores the stream to where the user left off.

use std::collections::HashMap;

use newsloom_model::FeedId;

#[derive(Debug, Default)]
pub struct ScrollPositions {
    by_feed: HashMap<FeedId, f32>,
}

impl ScrollPositions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the stream offset for a feed.
    pub fn save(&mut self, feed: &FeedId, offset: f32) {
        self.by_feed.insert(feed.clone(), offset);
    }

    /// Offset to restore for a feed; feeds never visited start at the top.
    pub fn restore(&self, feed: &FeedId) -> f32 {
        self.by_feed.get(feed).copied().unwrap_or(0.0)
    }

    pub fn clear(&mut self, feed: &FeedId) {
        self.by_feed.remove(feed);
    }

    pub fn count(&self) -> usize {
        self.by_feed.len()
    }
}
