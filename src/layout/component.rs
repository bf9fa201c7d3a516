//! LayoutComponent: One wrapped renderable plus its sizing constraints.

use tracing::trace;

use crate::actor::InputEvent;
use crate::style::Style;
use crate::surface::Viewport;
use crate::widget::Renderable;

use super::size::{Resizable, Size};

/// A leaf of a layout.
///
/// Holds the wrapped renderable, the fixed width/height it was configured
/// with (0 means variable), whether it is visible, and the [`Viewport`] its
/// output is shown through.
pub struct LayoutComponent {
    wrapped: Box<dyn Renderable>,
    viewport: Viewport,
    fixed_width: i32,
    fixed_height: i32,
    visible: bool,
    /// Set by the first resize; inner sizes are only forwarded after it.
    sized: bool,
}

impl LayoutComponent {
    /// Wrap a renderable. The component starts visible with variable size.
    pub fn new(wrapped: Box<dyn Renderable>) -> Self {
        Self {
            wrapped,
            viewport: Viewport::new(0, 0),
            fixed_width: 0,
            fixed_height: 0,
            visible: true,
            sized: false,
        }
    }

    /// Pin the width. Values ≤ 0 mean variable.
    #[must_use]
    pub fn with_fixed_width(mut self, width: i32) -> Self {
        self.fixed_width = width.max(0);
        self
    }

    /// Pin the height. Values ≤ 0 mean variable.
    #[must_use]
    pub fn with_fixed_height(mut self, height: i32) -> Self {
        self.fixed_height = height.max(0);
        self
    }

    /// Get the fixed width (0 = variable).
    pub const fn fixed_width(&self) -> i32 {
        self.fixed_width
    }

    /// Get the fixed height (0 = variable).
    pub const fn fixed_height(&self) -> i32 {
        self.fixed_height
    }

    pub(crate) fn set_fixed_width(&mut self, width: i32) {
        self.fixed_width = width;
    }

    pub(crate) fn set_fixed_height(&mut self, height: i32) {
        self.fixed_height = height;
    }

    /// Whether this component takes part in layout and rendering.
    pub const fn visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Size allotted by the last resize.
    pub const fn size(&self) -> Size {
        self.viewport.size()
    }

    /// Content stored by the last resize or render.
    pub fn content(&self) -> &str {
        self.viewport.content()
    }

    /// Get the style.
    pub const fn style(&self) -> &Style {
        self.viewport.style()
    }

    /// Replace the style.
    ///
    /// Once the component has been sized, the wrapped renderable is told
    /// the inner box the new frame leaves it.
    pub fn set_style(&mut self, style: Style) {
        self.viewport.set_style(style);
        self.forward_size();
    }

    /// Get the wrapped renderable.
    pub fn wrapped(&self) -> &dyn Renderable {
        &*self.wrapped
    }

    /// Get the wrapped renderable mutably.
    pub fn wrapped_mut(&mut self) -> &mut dyn Renderable {
        &mut *self.wrapped
    }

    /// Swap in a new renderable, returning the old one.
    ///
    /// Size, constraints, style and visibility are kept. Once the component
    /// has been sized, the new renderable is told the current inner size.
    pub fn replace(&mut self, wrapped: Box<dyn Renderable>) -> Box<dyn Renderable> {
        let old = std::mem::replace(&mut self.wrapped, wrapped);
        self.forward_size();
        old
    }

    /// Space the wrapped renderable gets: the viewport's inner box, minus the
    /// annotation row when sizes are annotated.
    fn content_size(&self) -> Size {
        let inner = self.viewport.inner_size();
        if self.viewport.style().annotate_size {
            inner.shrink(0, 1)
        } else {
            inner
        }
    }

    fn forward_size(&mut self) {
        if self.sized {
            let inner = self.content_size();
            self.wrapped.on_resize(inner);
        }
    }

    /// Set the allotted size.
    ///
    /// The viewport shows a `"{w} x {h}"` placeholder until the next render.
    pub fn resize(&mut self, size: Size) {
        self.viewport.set_size(size);
        self.viewport.set_content(size.to_string());
        self.sized = true;
        self.forward_size();
    }

    /// Render the wrapped renderable through the viewport.
    ///
    /// This stores the rendered text as the viewport content before framing
    /// it, so [`content`](Self::content) reflects the last render.
    pub fn view(&mut self) -> String {
        let mut content = self.wrapped.view();
        if self.viewport.style().annotate_size {
            content.push('\n');
            content.push_str(&self.size().to_string());
        }
        trace!(size = %self.size(), %content, "component view");
        self.viewport.set_content(content);
        self.viewport.view()
    }
}

impl Resizable for LayoutComponent {
    fn resize(&mut self, size: Size) {
        Self::resize(self, size);
    }
}

impl Renderable for LayoutComponent {
    fn init(&mut self) {
        self.wrapped.init();
    }

    fn update(&mut self, event: &InputEvent) -> bool {
        self.wrapped.update(event)
    }

    fn view(&mut self) -> String {
        Self::view(self)
    }

    fn on_resize(&mut self, size: Size) {
        Self::resize(self, size);
    }
}

impl std::fmt::Debug for LayoutComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutComponent")
            .field("size", &self.size())
            .field("fixed_width", &self.fixed_width)
            .field("fixed_height", &self.fixed_height)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::KeyCode;
    use crate::style::BorderKind;
    use crate::widget::Text;

    /// Records the sizes it is told about.
    struct SizeProbe {
        last: Option<Size>,
    }

    impl Renderable for SizeProbe {
        fn update(&mut self, _event: &InputEvent) -> bool {
            true
        }

        fn view(&mut self) -> String {
            self.last.map_or_else(String::new, |s| s.to_string())
        }

        fn on_resize(&mut self, size: Size) {
            self.last = Some(size);
        }
    }

    #[test]
    fn test_component_resize_sets_placeholder() {
        let mut component = LayoutComponent::new(Box::new(Text::new("x")));
        component.resize(Size::new(24, 16));
        assert_eq!(component.size(), Size::new(24, 16));
        assert_eq!(component.content(), "24 x 16");
    }

    #[test]
    fn test_component_view_stores_content() {
        let mut component = LayoutComponent::new(Box::new(Text::new("West component")));
        component.set_style(Style::new().with_size_annotation(true));
        component.resize(Size::new(16, 3));

        let view = component.view();
        assert_eq!(component.content(), "West component\n16 x 3");
        assert_eq!(view, "West component  \n16 x 3          \n                ");
    }

    #[test]
    fn test_component_view_without_annotation() {
        let mut component = LayoutComponent::new(Box::new(Text::new("abc")));
        component.resize(Size::new(3, 1));
        assert_eq!(component.view(), "abc");
        assert_eq!(component.content(), "abc");
    }

    #[test]
    fn test_component_forwards_inner_size() {
        let mut component = LayoutComponent::new(Box::new(SizeProbe { last: None }));
        component.set_style(
            Style::new()
                .with_border(BorderKind::Normal)
                .with_size_annotation(true),
        );
        component.resize(Size::new(20, 10));
        assert_eq!(component.view().lines().nth(1), Some("│18 x 7            │"));
    }

    #[test]
    fn test_component_restyle_after_resize_updates_inner_size() {
        let mut component = LayoutComponent::new(Box::new(SizeProbe { last: None }));
        component.resize(Size::new(20, 10));
        component.set_style(Style::new().with_border(BorderKind::Normal));
        assert_eq!(component.view().lines().nth(1), Some("│18 x 8            │"));
    }

    #[test]
    fn test_component_style_before_resize_forwards_nothing() {
        let mut component = LayoutComponent::new(Box::new(SizeProbe { last: None }));
        component.set_style(Style::new().with_border(BorderKind::Normal));
        assert_eq!(component.wrapped_mut().view(), "");
    }

    #[test]
    fn test_component_replace_keeps_configuration() {
        let mut component = LayoutComponent::new(Box::new(Text::new("old")))
            .with_fixed_height(4)
            .with_fixed_width(-2);
        component.resize(Size::new(10, 4));
        component.set_visible(false);

        let _old = component.replace(Box::new(Text::new("new")));
        assert_eq!(component.fixed_height(), 4);
        assert_eq!(component.fixed_width(), 0);
        assert_eq!(component.size(), Size::new(10, 4));
        assert!(!component.visible());
        assert!(component.view().starts_with("new"));
    }

    #[test]
    fn test_component_forwards_update() {
        let mut component = LayoutComponent::new(Box::new(SizeProbe { last: None }));
        assert!(Renderable::update(&mut component, &InputEvent::key(KeyCode::Char('x'))));
    }
}
