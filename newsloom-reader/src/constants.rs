//! Reader-screen constants.
//!
//! Shared tuning values for carousel behavior. Tuning should happen here
//! so every panel container updates consistently.

/// Panel layout of the reader screen.
pub mod layout {
    /// Fixed number of horizontally arranged panels
    /// (feed list, center stream, saved/ads rail).
    pub const PANEL_COUNT: usize = 3;
    /// The panel centered on compact viewports at startup.
    pub const CENTER_PANEL: usize = 1;
}

/// Scroll-synchronization timing.
pub mod sync {
    /// Quiet period with no scroll events before a gesture settles (ms).
    pub const SETTLE_QUIET_MS: u64 = 120;
    /// Delays after mount for the instant re-centering passes that absorb
    /// late layout shifts from asynchronous content loading (ms).
    pub const RESNAP_DELAYS_MS: [u64; 2] = [120, 360];
    /// How long a programmatic snap suppresses session logic, covering
    /// the snap animation (ms).
    pub const PROGRAMMATIC_SETTLE_MS: u64 = 320;
}
