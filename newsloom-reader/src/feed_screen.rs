//! Headless state for the three-panel feed screen: the feed list, the
//! center article stream (or embedded reader), and the saved-articles
//! rail. Network and rendering stay with the host; this module decides
//! what to fetch and keeps the caches and reading positions consistent.

use std::collections::HashMap;

use newsloom_core::constants::feed::DEFAULT_FEED_SIZE;
use newsloom_core::mix_for_feed;
use newsloom_model::{Article, Feed, FeedId, MixQuota};

use crate::scroll_positions::ScrollPositions;

/// What the center panel is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenMode {
    List,
    Reader { url: String },
}

/// Everything the host needs to run one feed load.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPlan {
    pub feed_id: FeedId,
    pub mix: MixQuota,
    pub size: u32,
}

#[derive(Debug)]
pub struct FeedScreen {
    feeds: Vec<Feed>,
    active: Option<FeedId>,
    articles: HashMap<FeedId, Vec<Article>>,
    saved: Vec<Article>,
    mode: ScreenMode,
    scroll: ScrollPositions,
    pending_restore: Option<f32>,
}

impl FeedScreen {
    pub fn new(feeds: Vec<Feed>, saved: Vec<Article>) -> Self {
        let active = feeds.first().map(|feed| feed.id.clone());
        FeedScreen {
            feeds,
            active,
            articles: HashMap::new(),
            saved,
            mode: ScreenMode::List,
            scroll: ScrollPositions::new(),
            pending_restore: None,
        }
    }

    pub fn feeds(&self) -> &[Feed] {
        &self.feeds
    }

    pub fn mode(&self) -> &ScreenMode {
        &self.mode
    }

    pub fn saved(&self) -> &[Article] {
        &self.saved
    }

    /// The feed shown in the center panel, falling back to the first feed
    /// when the remembered id no longer exists.
    pub fn active_feed(&self) -> Option<&Feed> {
        self.active
            .as_ref()
            .and_then(|id| self.feeds.iter().find(|feed| feed.id == *id))
            .or_else(|| self.feeds.first())
    }

    pub fn active_articles(&self) -> &[Article] {
        self.active
            .as_ref()
            .and_then(|id| self.articles.get(id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Plan the first load for the initially active feed.
    pub fn initial_fetch_plan(&self) -> Option<FetchPlan> {
        self.plan_for(self.active_feed()?)
    }

    /// Switch the center panel to another feed. Saves the current reading
    /// position, leaves reader mode, defers the scroll restore to the next
    /// frame, and returns a fetch plan when the target has no cached
    /// articles yet.
    pub fn open_feed(
        &mut self,
        id: &FeedId,
        current_offset: f32,
    ) -> Option<FetchPlan> {
        if let Some(active) = &self.active {
            self.scroll.save(active, current_offset);
        }

        self.active = Some(id.clone());
        self.mode = ScreenMode::List;
        self.pending_restore = Some(self.scroll.restore(id));

        let feed = self
            .feeds
            .iter()
            .find(|feed| feed.id == *id)
            .or_else(|| self.feeds.first())?;
        self.plan_for(feed)
    }

    /// Deferred stream offset for the host to apply on its next frame.
    pub fn take_scroll_restore(&mut self) -> Option<f32> {
        self.pending_restore.take()
    }

    /// Insert a completed load. The first response wins; a stale response
    /// racing a feed switch never overwrites cached articles.
    pub fn articles_loaded(&mut self, feed_id: &FeedId, items: Vec<Article>) {
        log::debug!(
            "feed {feed_id}: {} articles loaded",
            items.len()
        );
        self.articles.entry(feed_id.clone()).or_insert(items);
    }

    pub fn is_saved(&self, article_id: &str) -> bool {
        self.saved.iter().any(|article| article.id == article_id)
    }

    /// Save an article (newest first) or remove it if already saved.
    pub fn toggle_save(&mut self, article: &Article) {
        if let Some(pos) =
            self.saved.iter().position(|saved| saved.id == article.id)
        {
            self.saved.remove(pos);
        } else {
            self.saved.insert(0, article.clone());
        }
    }

    pub fn open_reader(&mut self, url: impl Into<String>) {
        self.mode = ScreenMode::Reader { url: url.into() };
    }

    /// Leave reader mode and restore the stream position.
    pub fn back_to_feed(&mut self) {
        self.mode = ScreenMode::List;
        if let Some(active) = &self.active {
            self.pending_restore = Some(self.scroll.restore(active));
        }
    }

    /// Subtitle line for a feed card: explicit label, then category
    /// labels, then whatever the weight map names.
    pub fn feed_label(feed: &Feed) -> String {
        if let Some(label) = &feed.mix_label {
            let label = label.trim();
            if !label.is_empty() {
                return label.to_string();
            }
        }
        if !feed.selected.is_empty() {
            return join_labels(feed.selected.iter());
        }
        if !feed.weights.is_empty() {
            return join_labels(feed.weights.keys());
        }
        String::new()
    }

    fn plan_for(&self, feed: &Feed) -> Option<FetchPlan> {
        if self.articles.contains_key(&feed.id) {
            return None;
        }
        Some(FetchPlan {
            feed_id: feed.id.clone(),
            mix: mix_for_feed(feed, DEFAULT_FEED_SIZE),
            size: DEFAULT_FEED_SIZE,
        })
    }
}

fn join_labels<'a>(
    categories: impl Iterator<Item = &'a newsloom_model::CategoryId>,
) -> String {
    categories
        .map(|category| category.label())
        .collect::<Vec<_>>()
        .join(", ")
}
