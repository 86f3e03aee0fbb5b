// End-to-end carousel behavior as a host would drive it: mount on a
// compact viewport, pump deadlines through `next_deadline`, swipe between
// panels, and navigate programmatically.

use std::time::{Duration, Instant};

use newsloom_reader::carousel::{CarouselController, CarouselHost};

const WIDTH: f32 = 390.0;

#[derive(Default)]
struct PhoneHost {
    snaps: Vec<(f32, bool)>,
    published: Vec<usize>,
}

impl CarouselHost for PhoneHost {
    fn panel_width(&self) -> Option<f32> {
        Some(WIDTH)
    }

    fn is_compact(&self) -> bool {
        true
    }

    fn snap_to(&mut self, offset: f32, animated: bool) {
        self.snaps.push((offset, animated));
    }

    fn set_active_panel(&mut self, index: usize) {
        self.published.push(index);
    }
}

fn ms(base: Instant, millis: u64) -> Instant {
    base + Duration::from_millis(millis)
}

/// Drive every pending deadline up to `until`, the way a host with a
/// single wakeup timer would.
fn pump(
    carousel: &mut CarouselController,
    host: &mut PhoneHost,
    until: Instant,
) {
    while let Some(deadline) = carousel.next_deadline() {
        if deadline > until {
            break;
        }
        carousel.tick(host, deadline);
    }
}

#[test]
fn mount_swipe_and_navigate_lifecycle() {
    let mut host = PhoneHost::default();
    let mut carousel = CarouselController::new();
    let t0 = Instant::now();

    // Mount: instant snap to the center stream, then the re-centering
    // passes settle the active index on the center panel.
    carousel.mount(&mut host, t0);
    assert_eq!(host.snaps.first(), Some(&(WIDTH, false)));
    pump(&mut carousel, &mut host, ms(t0, 1_000));
    assert_eq!(carousel.active_index(), 1);
    assert!(!carousel.is_initializing());
    assert!(host.snaps.iter().all(|(_, animated)| !animated));

    // Swipe toward the feed-list panel. Frames keep the index live while
    // the gesture is still moving.
    let t1 = ms(t0, 2_000);
    carousel.handle_scroll(&mut host, 300.0, t1);
    carousel.on_frame(&mut host);
    carousel.handle_scroll(&mut host, 120.0, ms(t1, 16));
    carousel.on_frame(&mut host);
    carousel.handle_scroll(&mut host, 30.0, ms(t1, 32));
    carousel.on_frame(&mut host);
    assert!(carousel.in_scroll_session());
    assert_eq!(carousel.active_index(), 0);

    // The settle snap aligns the container and suppresses its own scroll
    // events until the cooldown elapses.
    pump(&mut carousel, &mut host, ms(t1, 500));
    assert_eq!(host.snaps.last(), Some(&(0.0, true)));
    assert!(!carousel.in_scroll_session());
    assert!(!carousel.is_programmatic());
    assert_eq!(carousel.active_index(), 0);

    // Dot-indicator navigation to the saved rail publishes immediately.
    let t2 = ms(t0, 4_000);
    carousel.scroll_to_panel(&mut host, 2, t2);
    assert_eq!(carousel.active_index(), 2);
    assert_eq!(host.snaps.last(), Some(&(2.0 * WIDTH, true)));

    // Animation scroll events during the cooldown stay inert.
    carousel.handle_scroll(&mut host, 500.0, ms(t2, 20));
    carousel.handle_scroll(&mut host, 760.0, ms(t2, 60));
    assert!(!carousel.in_scroll_session());
    pump(&mut carousel, &mut host, ms(t2, 1_000));
    assert_eq!(carousel.active_index(), 2);

    // Detach leaves nothing pending.
    carousel.detach();
    assert!(carousel.next_deadline().is_none());
}

#[test]
fn one_gesture_never_skips_the_center_panel() {
    let mut host = PhoneHost::default();
    let mut carousel = CarouselController::new();
    let t0 = Instant::now();
    carousel.mount(&mut host, t0);
    pump(&mut carousel, &mut host, ms(t0, 1_000));
    assert_eq!(carousel.active_index(), 1);

    // A violent fling from the center whose raw offset reaches panel 2's
    // neighborhood... after starting back at panel 0's edge.
    let t1 = ms(t0, 2_000);
    carousel.scroll_to_panel(&mut host, 0, t1);
    pump(&mut carousel, &mut host, ms(t1, 1_000));

    let t2 = ms(t0, 4_000);
    carousel.handle_scroll(&mut host, 60.0, t2);
    carousel.handle_scroll(&mut host, 410.0, ms(t2, 16));
    carousel.handle_scroll(&mut host, 805.0, ms(t2, 32));
    pump(&mut carousel, &mut host, ms(t2, 1_000));

    // Raw delta suggested two panels; the gesture advances exactly one.
    assert_eq!(carousel.active_index(), 1);
}
