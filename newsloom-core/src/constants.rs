//! Shared tuning constants for the mix engine and feed requests.
//! Tuning should happen here so every screen updates consistently.

/// Bounds and step sizes for the weight distribution over a selection.
pub mod mix {
    /// Weights over a selection always sum to this total.
    pub const TOTAL_WEIGHT: i64 = 100;
    /// Floor for any selected category's weight.
    pub const MIN_WEIGHT: i64 = 5;
    /// Increment applied by a single +/- adjustment.
    pub const WEIGHT_STEP: i64 = 5;
    /// Smallest selection that can be saved as a feed.
    pub const MIN_SELECT: usize = 2;
    /// Largest selection a feed may carry.
    pub const MAX_SELECT: usize = 4;
}

/// Feed request defaults.
pub mod feed {
    /// Result-set size requested for a feed load.
    pub const DEFAULT_FEED_SIZE: u32 = 50;
}
