//! Renderable trait: The capability a layout region wraps.

use crate::actor::InputEvent;
use crate::layout::Size;

/// A unit of UI that can produce its current text representation.
///
/// Layout regions accept any value implementing this trait. The layout
/// never drives the lifecycle on its own; it forwards `init`, `update` and
/// resizes to whatever it wraps.
pub trait Renderable {
    /// Called once before the first event is delivered.
    fn init(&mut self) {}

    /// Handle an input event.
    ///
    /// Returns `true` if the event was consumed,
    /// `false` if it should propagate to other renderables.
    fn update(&mut self, event: &InputEvent) -> bool;

    /// Produce the current text block.
    ///
    /// Takes `&mut self`: rendering is allowed to store what it rendered.
    fn view(&mut self) -> String;

    /// Called when the space available to this renderable changes.
    fn on_resize(&mut self, _size: Size) {}
}
