/// Boundary to the presentation layer that owns the scrollable container.
///
/// `panel_width` returning None (or zero) means there is no live container
/// right now (common during mount/unmount races) and every controller
/// operation silently does nothing.
pub trait CarouselHost {
    /// Width of a single panel in the container's units.
    fn panel_width(&self) -> Option<f32>;

    /// Whether the viewport is in the compact (single visible panel)
    /// layout. Consulted at mount time and on viewport transitions only.
    fn is_compact(&self) -> bool;

    /// Scroll the container to an absolute horizontal offset.
    fn snap_to(&mut self, offset: f32, animated: bool);

    /// Publish the externally visible active panel index.
    fn set_active_panel(&mut self, index: usize);
}
