//! Scroll-synchronization controller for the panel carousel.
//!
//! Reconciles user-driven scrolling, programmatic snaps, and the published
//! active-panel index for a container holding a fixed number of panels.
//! The controller owns no timers of its own: it records deadlines and the
//! host pumps it with `tick(now)` plus one `on_frame` call per animation
//! frame, which keeps every transition deterministic under test.

use std::time::{Duration, Instant};

use super::host::CarouselHost;
use crate::constants::layout::{CENTER_PANEL, PANEL_COUNT};
use crate::constants::sync::{
    PROGRAMMATIC_SETTLE_MS, RESNAP_DELAYS_MS, SETTLE_QUIET_MS,
};

/// Lifecycle of one carousel container between mount and detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Instant re-centering passes are still pending.
    Initializing,
    Idle,
    /// A user gesture is in progress; `origin` is the panel index observed
    /// at session start.
    UserScrolling { origin: usize },
    /// A snap we issued is animating; scroll events must not start
    /// sessions until the cooldown elapses.
    Programmatic,
}

#[derive(Debug)]
pub struct CarouselController {
    phase: Phase,
    active_index: usize,
    panel_count: usize,
    /// Latest raw scroll offset, coalesced to one recomputation per frame.
    pending_offset: Option<f32>,
    last_offset: f32,
    /// Pending instant re-centering passes (initialization only).
    resnap_queue: Vec<Instant>,
    /// Debounced gesture-settle deadline; superseded by each new event.
    settle_at: Option<Instant>,
    /// End of the programmatic-snap cooldown.
    programmatic_done_at: Option<Instant>,
    detached: bool,
}

impl Default for CarouselController {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselController {
    pub fn new() -> Self {
        Self::with_panel_count(PANEL_COUNT)
    }

    pub fn with_panel_count(panel_count: usize) -> Self {
        CarouselController {
            phase: Phase::Idle,
            active_index: 0,
            panel_count: panel_count.max(1),
            pending_offset: None,
            last_offset: 0.0,
            resnap_queue: Vec::new(),
            settle_at: None,
            programmatic_done_at: None,
            detached: false,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    pub fn is_initializing(&self) -> bool {
        self.phase == Phase::Initializing
    }

    pub fn in_scroll_session(&self) -> bool {
        matches!(self.phase, Phase::UserScrolling { .. })
    }

    pub fn is_programmatic(&self) -> bool {
        self.phase == Phase::Programmatic
    }

    /// Earliest pending deadline, for hosts that schedule a single wakeup.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.resnap_queue.first().copied(),
            self.settle_at,
            self.programmatic_done_at,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Attach to a freshly mounted container. Compact viewports get an
    /// instant snap to the center panel plus delayed re-centering passes
    /// that absorb late layout shifts; other viewports keep their natural
    /// offset and go straight to steady state.
    pub fn mount<H: CarouselHost>(&mut self, host: &mut H, now: Instant) {
        self.detached = false;
        self.cancel_timers();
        self.pending_offset = None;
        if host.is_compact() {
            self.begin_centering(host, now);
        } else {
            self.phase = Phase::Idle;
        }
    }

    /// Re-evaluate the layout on a viewport-size transition.
    pub fn viewport_changed<H: CarouselHost>(
        &mut self,
        host: &mut H,
        now: Instant,
    ) {
        if self.detached {
            return;
        }
        if host.is_compact() {
            self.begin_centering(host, now);
        } else {
            self.resnap_queue.clear();
            if self.phase == Phase::Initializing {
                self.phase = Phase::Idle;
            }
        }
    }

    /// Record a raw scroll event. From steady state this opens a gesture
    /// session; during initialization or a programmatic snap it only
    /// refreshes the coalesced offset.
    pub fn handle_scroll<H: CarouselHost>(
        &mut self,
        host: &mut H,
        offset: f32,
        now: Instant,
    ) {
        if self.detached {
            return;
        }
        let Some(width) = live_width(host) else {
            return;
        };

        self.pending_offset = Some(offset);
        self.last_offset = offset;

        match self.phase {
            Phase::Initializing | Phase::Programmatic => {}
            Phase::Idle => {
                let origin = self.index_at(width, offset);
                self.phase = Phase::UserScrolling { origin };
                self.settle_at =
                    Some(now + Duration::from_millis(SETTLE_QUIET_MS));
                log::debug!("scroll session started at panel {origin}");
            }
            Phase::UserScrolling { .. } => {
                self.settle_at =
                    Some(now + Duration::from_millis(SETTLE_QUIET_MS));
            }
        }
    }

    /// Drain the coalesced offset; called by the host at most once per
    /// animation frame. Keeps the published index accurate outside the
    /// session/settle cycle; suppressed while an initialization pass or a
    /// programmatic snap is in flight.
    pub fn on_frame<H: CarouselHost>(&mut self, host: &mut H) {
        if self.detached {
            return;
        }
        let Some(offset) = self.pending_offset.take() else {
            return;
        };
        if matches!(self.phase, Phase::Initializing | Phase::Programmatic) {
            return;
        }
        let Some(width) = live_width(host) else {
            return;
        };
        let index = self.index_at(width, offset);
        self.publish_index(host, index);
    }

    /// Fire any due deadlines.
    pub fn tick<H: CarouselHost>(&mut self, host: &mut H, now: Instant) {
        if self.detached {
            return;
        }

        while let Some(&deadline) = self.resnap_queue.first() {
            if deadline > now {
                break;
            }
            self.resnap_queue.remove(0);
            if self.phase != Phase::Initializing {
                continue;
            }
            if let Some(width) = live_width(host) {
                host.snap_to(CENTER_PANEL as f32 * width, false);
            }
            if self.resnap_queue.is_empty() {
                self.phase = Phase::Idle;
                // Offsets recorded during initialization are layout noise.
                self.pending_offset = None;
                self.publish_index(host, CENTER_PANEL);
                log::debug!("carousel centered on panel {CENTER_PANEL}");
            }
        }

        if let Some(deadline) = self.settle_at {
            if deadline <= now {
                self.settle_at = None;
                // Only a live user session settles; a session orphaned by
                // an in-flight programmatic motion or re-init is dropped.
                if let Phase::UserScrolling { origin } = self.phase {
                    self.settle(host, origin, now);
                }
            }
        }

        if let Some(deadline) = self.programmatic_done_at {
            if deadline <= now {
                self.programmatic_done_at = None;
                if self.phase == Phase::Programmatic {
                    self.phase = Phase::Idle;
                }
            }
        }
    }

    /// Programmatic navigation (dot indicator, keyboard). Clamps the
    /// index, snaps with animation, and publishes the index immediately
    /// rather than when the animation finishes.
    pub fn scroll_to_panel<H: CarouselHost>(
        &mut self,
        host: &mut H,
        index: usize,
        now: Instant,
    ) {
        if self.detached {
            return;
        }
        let Some(width) = live_width(host) else {
            return;
        };

        let target = index.min(self.panel_count - 1);
        self.phase = Phase::Programmatic;
        self.settle_at = None;
        self.pending_offset = None;
        host.snap_to(target as f32 * width, true);
        self.publish_index(host, target);
        self.programmatic_done_at =
            Some(now + Duration::from_millis(PROGRAMMATIC_SETTLE_MS));
    }

    /// Detach from the container: cancel every pending deadline and the
    /// coalesced offset. All further operations are silent no-ops.
    pub fn detach(&mut self) {
        self.detached = true;
        self.cancel_timers();
        self.pending_offset = None;
    }

    fn begin_centering<H: CarouselHost>(
        &mut self,
        host: &mut H,
        now: Instant,
    ) {
        let Some(width) = live_width(host) else {
            self.phase = Phase::Idle;
            return;
        };
        self.phase = Phase::Initializing;
        self.settle_at = None;
        host.snap_to(CENTER_PANEL as f32 * width, false);
        self.resnap_queue = RESNAP_DELAYS_MS
            .iter()
            .map(|ms| now + Duration::from_millis(*ms))
            .collect();
    }

    fn settle<H: CarouselHost>(
        &mut self,
        host: &mut H,
        origin: usize,
        now: Instant,
    ) {
        let Some(width) = live_width(host) else {
            self.phase = Phase::Idle;
            return;
        };

        // One gesture moves at most one panel, regardless of how far the
        // fling carried the raw offset.
        let raw = self.index_at(width, self.last_offset);
        let delta = (raw as i64 - origin as i64).clamp(-1, 1);
        let target = (origin as i64 + delta)
            .clamp(0, self.panel_count as i64 - 1)
            as usize;
        log::debug!(
            "scroll session settled: origin={origin} raw={raw} target={target}"
        );

        host.snap_to(target as f32 * width, true);
        self.publish_index(host, target);
        self.pending_offset = None;
        // The settle snap is itself a programmatic motion; its scroll
        // events must not open a fresh session.
        self.phase = Phase::Programmatic;
        self.programmatic_done_at =
            Some(now + Duration::from_millis(PROGRAMMATIC_SETTLE_MS));
    }

    fn publish_index<H: CarouselHost>(&mut self, host: &mut H, index: usize) {
        if index != self.active_index {
            self.active_index = index;
            host.set_active_panel(index);
        }
    }

    fn index_at(&self, width: f32, offset: f32) -> usize {
        let raw = (offset / width).round().max(0.0) as usize;
        raw.min(self.panel_count - 1)
    }

    fn cancel_timers(&mut self) {
        self.resnap_queue.clear();
        self.settle_at = None;
        self.programmatic_done_at = None;
    }
}

fn live_width<H: CarouselHost>(host: &H) -> Option<f32> {
    host.panel_width().filter(|width| *width > 0.0)
}
