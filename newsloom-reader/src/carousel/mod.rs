//! Panel carousel: scroll synchronization between the user, programmatic
//! navigation, and the published active-panel index.

pub mod controller;
pub mod host;

pub use controller::CarouselController;
pub use host::CarouselHost;
