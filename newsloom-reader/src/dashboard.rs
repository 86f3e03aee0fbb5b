//! Headless state for the mix-builder screen: pick categories, balance
//! their weights, and manage the saved feed list. Two modes share the
//! middle panel: building a fresh draft, or editing the weights of an
//! existing feed with its selection frozen.

use newsloom_core::constants::mix::{MAX_SELECT, MIN_SELECT};
use newsloom_core::mix::{adjust_weight, normalize_weights};
use newsloom_model::{CategoryId, Feed, FeedId, WeightMap};

/// In-flight weight edit of a saved feed.
#[derive(Debug, Clone)]
struct EditSession {
    feed_id: FeedId,
    selected: Vec<CategoryId>,
    weights: WeightMap,
}

#[derive(Debug, Default)]
pub struct Dashboard {
    feeds: Vec<Feed>,
    selected: Vec<CategoryId>,
    weights: WeightMap,
    active_category: Option<CategoryId>,
    /// Highlighted feed card on the saved-feeds panel.
    active_feed: Option<FeedId>,
    edit: Option<EditSession>,
}

impl Dashboard {
    pub fn new(feeds: Vec<Feed>) -> Self {
        Dashboard {
            feeds,
            ..Dashboard::default()
        }
    }

    pub fn feeds(&self) -> &[Feed] {
        &self.feeds
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    pub fn active_feed(&self) -> Option<&FeedId> {
        self.active_feed.as_ref()
    }

    /// The selection the middle panel is adjusting: the edit session's
    /// when a feed is open for edit, the draft's otherwise.
    pub fn mix_selected(&self) -> &[CategoryId] {
        match &self.edit {
            Some(edit) => &edit.selected,
            None => &self.selected,
        }
    }

    pub fn mix_weights(&self) -> &WeightMap {
        match &self.edit {
            Some(edit) => &edit.weights,
            None => &self.weights,
        }
    }

    pub fn weight_of(&self, category: CategoryId) -> i64 {
        self.mix_weights().get(&category).copied().unwrap_or(0)
    }

    /// Highlighted category row: the explicit pick if it is still in the
    /// selection, else the first selected category.
    pub fn active_category(&self) -> Option<CategoryId> {
        let selected = self.mix_selected();
        if selected.is_empty() {
            return None;
        }
        self.active_category
            .filter(|category| selected.contains(category))
            .or_else(|| selected.first().copied())
    }

    pub fn set_active_category(&mut self, category: CategoryId) {
        self.active_category = Some(category);
    }

    pub fn is_selected(&self, category: CategoryId) -> bool {
        self.selected.contains(&category)
    }

    pub fn can_select_more(&self) -> bool {
        self.selected.len() < MAX_SELECT
    }

    /// Add or remove a draft category. Every membership change re-derives
    /// the even default split. Disabled while editing a saved feed.
    pub fn toggle_category(&mut self, category: CategoryId) {
        if self.edit.is_some() {
            return;
        }

        if let Some(pos) =
            self.selected.iter().position(|c| *c == category)
        {
            self.selected.remove(pos);
            self.weights = normalize_weights(&self.selected);
            if self.active_category == Some(category) {
                self.active_category = self.selected.first().copied();
            }
            return;
        }

        if !self.can_select_more() {
            return;
        }
        self.selected.push(category);
        self.weights = normalize_weights(&self.selected);
        self.active_category = Some(category);
    }

    /// Nudge one category's weight, rebalancing the rest of the selection.
    pub fn adjust(&mut self, target: CategoryId, delta: i64) {
        match &mut self.edit {
            Some(edit) => {
                edit.weights = adjust_weight(
                    &edit.selected,
                    &edit.weights,
                    target,
                    delta,
                );
            }
            None => {
                self.weights = adjust_weight(
                    &self.selected,
                    &self.weights,
                    target,
                    delta,
                );
            }
        }
    }

    /// Draft mode: enough categories picked. Edit mode: weights changed.
    pub fn can_save(&self) -> bool {
        match &self.edit {
            Some(_) => self.is_dirty(),
            None => self.selected.len() >= MIN_SELECT,
        }
    }

    /// Whether the edit session's weights differ from the stored feed.
    pub fn is_dirty(&self) -> bool {
        let Some(edit) = &self.edit else {
            return false;
        };
        let Some(feed) =
            self.feeds.iter().find(|feed| feed.id == edit.feed_id)
        else {
            return false;
        };
        feed.selected.iter().any(|category| {
            feed.weights.get(category).copied().unwrap_or(0)
                != edit.weights.get(category).copied().unwrap_or(0)
        })
    }

    /// Load a saved feed into the middle panel for weight editing.
    pub fn open_for_edit(&mut self, id: &FeedId) {
        let Some(feed) = self.feeds.iter().find(|feed| feed.id == *id)
        else {
            return;
        };
        self.active_feed = Some(feed.id.clone());
        self.edit = Some(EditSession {
            feed_id: feed.id.clone(),
            selected: feed.selected.clone(),
            weights: feed.weights.clone(),
        });
    }

    /// Write the edit session's weights back to the stored feed and leave
    /// edit mode. Returns the feed's name for the confirmation toast.
    pub fn save_changes(&mut self, now_millis: i64) -> Option<String> {
        let edit = self.edit.take()?;
        let feed = self
            .feeds
            .iter_mut()
            .find(|feed| feed.id == edit.feed_id)?;
        feed.weights = edit.weights;
        feed.updated_at = now_millis;
        let name = feed.name.clone();
        log::debug!("saved weight changes to feed {}", edit.feed_id);
        self.reset();
        Some(name)
    }

    /// Save the draft as a new feed (newest first) and reset the panel.
    pub fn save_draft(
        &mut self,
        name: impl Into<String>,
        now_millis: i64,
    ) -> Option<&Feed> {
        if self.edit.is_some() || self.selected.len() < MIN_SELECT {
            return None;
        }
        let feed = Feed::new(
            name,
            self.selected.clone(),
            self.weights.clone(),
            now_millis,
        );
        self.feeds.insert(0, feed);
        self.reset();
        self.feeds.first()
    }

    /// [`Dashboard::save_changes`] stamped with the current wall clock.
    pub fn save_changes_now(&mut self) -> Option<String> {
        self.save_changes(chrono::Utc::now().timestamp_millis())
    }

    /// [`Dashboard::save_draft`] stamped with the current wall clock.
    pub fn save_draft_now(
        &mut self,
        name: impl Into<String>,
    ) -> Option<&Feed> {
        self.save_draft(name, chrono::Utc::now().timestamp_millis())
    }

    pub fn remove_feed(&mut self, id: &FeedId) {
        self.feeds.retain(|feed| feed.id != *id);
        if self.active_feed.as_ref() == Some(id) {
            self.active_feed = None;
        }
    }

    /// Back to an empty draft; clears edit mode and the card highlight.
    pub fn reset(&mut self) {
        self.edit = None;
        self.active_feed = None;
        self.selected.clear();
        self.weights.clear();
        self.active_category = None;
    }
}
