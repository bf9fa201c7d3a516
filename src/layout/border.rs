//! BorderLayout: Five-region container.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │            North             │
//! ├──────┬────────────────┬──────┤
//! │ West │     Center     │ East │
//! ├──────┴────────────────┴──────┤
//! │            South             │
//! └──────────────────────────────┘
//! ```
//!
//! North and South span the full width and take their fixed height first.
//! West and East take their fixed width out of the middle row, and Center
//! gets whatever is left. The order is fixed.

use tracing::{debug, warn};

use crate::actor::InputEvent;
use crate::style::Style;
use crate::surface::{join_horizontal, join_vertical};
use crate::widget::Renderable;

use super::component::LayoutComponent;
use super::error::LayoutError;
use super::region::{RegionId, RegionState};
use super::size::{Resizable, Size};

/// What a resize pass does when fixed sizes exceed the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Subtract fixed sizes unconditionally; later regions may get negative
    /// dimensions. Such regions are reported by [`BorderLayout::overflowed`].
    #[default]
    Passthrough,
    /// Never hand out more than what remains: fixed allotments are capped by
    /// the remaining space and remaining space stops at zero.
    Clamp,
}

/// Configuration for a border layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderLayoutConfig {
    /// Handling of over-constrained fixed sizes.
    pub overflow: OverflowPolicy,
}

/// Access to the components a layout manages.
pub trait LayoutManager {
    /// Occupied components, in region order.
    fn components(&self) -> Vec<&LayoutComponent>;

    /// Occupied components, mutably, in region order.
    fn components_mut(&mut self) -> Vec<&mut LayoutComponent>;
}

/// A container arranging up to five regions.
#[derive(Debug, Default)]
pub struct BorderLayout {
    /// One slot per [`RegionId`], indexed by [`RegionId::index`].
    regions: [Option<LayoutComponent>; 5],
    /// Last size passed to [`resize`](Self::resize); `None` before the first.
    size: Option<Size>,
    /// Configuration.
    config: BorderLayoutConfig,
    /// Regions handed a negative dimension by the last pass.
    overflowed: Vec<(RegionId, Size)>,
}

impl BorderLayout {
    /// Create an empty layout with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty layout with custom configuration.
    pub fn with_config(config: BorderLayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Start building a layout.
    pub fn builder() -> BorderLayoutBuilder {
        BorderLayoutBuilder::default()
    }

    /// Get the configuration.
    pub const fn config(&self) -> &BorderLayoutConfig {
        &self.config
    }

    /// Change the overflow policy and lay out again.
    pub fn set_overflow_policy(&mut self, policy: OverflowPolicy) {
        self.config.overflow = policy;
        self.layout();
    }

    /// Last size the layout was given (zero before the first resize).
    pub fn size(&self) -> Size {
        self.size.unwrap_or_default()
    }

    /// Bind `renderable` to `region`, or replace the one already there.
    ///
    /// The region becomes visible. A positive `fixed_width` pins West/East,
    /// a positive `fixed_height` pins North/South; values ≤ 0 leave the
    /// dimension variable (or keep an earlier pin on replacement). A fixed
    /// dimension on an axis the region does not consume is ignored.
    pub fn configure<R: Renderable + 'static>(
        &mut self,
        region: RegionId,
        renderable: R,
        fixed_width: i32,
        fixed_height: i32,
    ) {
        self.configure_boxed(region, Box::new(renderable), fixed_width, fixed_height);
    }

    /// [`configure`](Self::configure) for an already boxed renderable.
    pub fn configure_boxed(
        &mut self,
        region: RegionId,
        renderable: Box<dyn Renderable>,
        fixed_width: i32,
        fixed_height: i32,
    ) {
        let slot = &mut self.regions[region.index()];
        let component = match slot.take() {
            Some(mut component) => {
                component.replace(renderable);
                component
            }
            None => LayoutComponent::new(renderable),
        };
        let component = slot.insert(component);
        component.set_visible(true);
        if region.uses_fixed_width() && fixed_width > 0 {
            component.set_fixed_width(fixed_width);
        }
        if region.uses_fixed_height() && fixed_height > 0 {
            component.set_fixed_height(fixed_height);
        }
        debug!(%region, fixed_width, fixed_height, "region configured");
        self.layout();
    }

    /// Get the component in `region`, if configured.
    pub fn region(&self, region: RegionId) -> Option<&LayoutComponent> {
        self.regions[region.index()].as_ref()
    }

    /// Get the component in `region` mutably, if configured.
    pub fn region_mut(&mut self, region: RegionId) -> Option<&mut LayoutComponent> {
        self.regions[region.index()].as_mut()
    }

    /// Size allotted to `region` by the last pass, if it is visible.
    pub fn region_size(&self, region: RegionId) -> Option<Size> {
        self.region(region)
            .filter(|c| c.visible())
            .map(LayoutComponent::size)
    }

    /// Visibility state of `region`.
    pub fn state(&self, region: RegionId) -> RegionState {
        match self.region(region) {
            None => RegionState::Absent,
            Some(c) if c.visible() => RegionState::Visible,
            Some(_) => RegionState::Hidden,
        }
    }

    /// Whether `region` is configured and visible.
    pub fn is_visible(&self, region: RegionId) -> bool {
        self.state(region) == RegionState::Visible
    }

    fn visible_mut(&mut self, region: RegionId) -> Option<&mut LayoutComponent> {
        visible(&mut self.regions[region.index()])
    }

    /// Regions that received a negative dimension in the last pass.
    pub fn overflowed(&self) -> &[(RegionId, Size)] {
        &self.overflowed
    }

    /// Fail if the last pass handed any region a negative dimension.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Overflow`] naming the first such region.
    pub fn check_bounds(&self) -> Result<(), LayoutError> {
        match self.overflowed.first() {
            Some(&(region, size)) => Err(LayoutError::Overflow { region, size }),
            None => Ok(()),
        }
    }

    /// Compute every visible region's size for a container of `size`.
    pub fn resize(&mut self, size: Size) {
        self.size = Some(size);
        self.overflowed.clear();
        let policy = self.config.overflow;
        let size = match policy {
            OverflowPolicy::Passthrough => size,
            OverflowPolicy::Clamp => size.clamped(),
        };

        let mut remaining = size;
        for region in [RegionId::North, RegionId::South] {
            if let Some(component) = visible(&mut self.regions[region.index()]) {
                let height = allot(policy, &mut remaining.height, component.fixed_height());
                let allotted = Size::new(size.width, height);
                place(component, region, allotted, &mut self.overflowed);
            }
        }
        for region in [RegionId::West, RegionId::East] {
            if let Some(component) = visible(&mut self.regions[region.index()]) {
                let width = allot(policy, &mut remaining.width, component.fixed_width());
                let allotted = Size::new(width, remaining.height);
                place(component, region, allotted, &mut self.overflowed);
            }
        }
        if let Some(component) = visible(&mut self.regions[RegionId::Center.index()]) {
            place(component, RegionId::Center, remaining, &mut self.overflowed);
        }
        debug!(%size, ?policy, center = %remaining, "layout resized");
    }

    /// Lay out again over the last known size.
    fn layout(&mut self) {
        if let Some(size) = self.size {
            self.resize(size);
        }
    }

    /// Make the given regions visible. Absent regions are ignored.
    pub fn show(&mut self, regions: &[RegionId]) {
        self.transition(regions, |_| true);
    }

    /// Hide the given regions. Absent regions are ignored.
    pub fn hide(&mut self, regions: &[RegionId]) {
        self.transition(regions, |_| false);
    }

    /// Flip the visibility of the given regions. Absent regions are ignored.
    pub fn toggle(&mut self, regions: &[RegionId]) {
        self.transition(regions, |visible| !visible);
    }

    fn transition(&mut self, regions: &[RegionId], next: impl Fn(bool) -> bool) {
        let mut changed = false;
        for &region in regions {
            let Some(component) = self.region_mut(region) else {
                continue;
            };
            let visible = next(component.visible());
            if visible != component.visible() {
                component.set_visible(visible);
                changed = true;
                debug!(%region, visible, "region visibility changed");
            }
        }
        if changed {
            self.layout();
        }
    }

    /// Render the visible regions.
    ///
    /// West, Center and East are joined left to right; North, that row and
    /// South are stacked top to bottom. Each child view is stored by its
    /// component as a side effect.
    pub fn view(&mut self) -> String {
        let mut row = Vec::with_capacity(3);
        for region in [RegionId::West, RegionId::Center, RegionId::East] {
            if let Some(component) = self.visible_mut(region) {
                row.push(component.view());
            }
        }

        let mut column = Vec::with_capacity(3);
        if let Some(component) = self.visible_mut(RegionId::North) {
            column.push(component.view());
        }
        if !row.is_empty() {
            column.push(join_horizontal(&row));
        }
        if let Some(component) = self.visible_mut(RegionId::South) {
            column.push(component.view());
        }
        join_vertical(&column)
    }
}

fn visible(slot: &mut Option<LayoutComponent>) -> Option<&mut LayoutComponent> {
    slot.as_mut().filter(|c| c.visible())
}

/// Take `fixed` out of `remaining` according to `policy`, returning the allotment.
fn allot(policy: OverflowPolicy, remaining: &mut i32, fixed: i32) -> i32 {
    match policy {
        OverflowPolicy::Passthrough => {
            *remaining -= fixed;
            fixed
        }
        OverflowPolicy::Clamp => {
            let taken = fixed.clamp(0, (*remaining).max(0));
            *remaining = (*remaining - taken).max(0);
            taken
        }
    }
}

fn place(
    component: &mut LayoutComponent,
    region: RegionId,
    size: Size,
    overflowed: &mut Vec<(RegionId, Size)>,
) {
    if size.is_negative() {
        warn!(%region, ?size, "region allotted a negative size");
        overflowed.push((region, size));
    }
    component.resize(size);
}

impl Resizable for BorderLayout {
    fn resize(&mut self, size: Size) {
        Self::resize(self, size);
    }
}

impl LayoutManager for BorderLayout {
    fn components(&self) -> Vec<&LayoutComponent> {
        self.regions.iter().flatten().collect()
    }

    fn components_mut(&mut self) -> Vec<&mut LayoutComponent> {
        self.regions.iter_mut().flatten().collect()
    }
}

impl Renderable for BorderLayout {
    fn init(&mut self) {
        for component in self.components_mut() {
            component.init();
        }
    }

    /// Offer the event to every configured region.
    fn update(&mut self, event: &InputEvent) -> bool {
        let mut consumed = false;
        for component in self.components_mut() {
            consumed |= Renderable::update(component, event);
        }
        consumed
    }

    fn view(&mut self) -> String {
        Self::view(self)
    }

    fn on_resize(&mut self, size: Size) {
        Self::resize(self, size);
    }
}

/// Builder for [`BorderLayout`].
///
/// Regions are configured in call order; the style, if any, is applied to
/// every region once all of them are in place.
#[derive(Debug, Default)]
pub struct BorderLayoutBuilder {
    layout: BorderLayout,
    style: Option<Style>,
}

impl BorderLayoutBuilder {
    /// Configure a region. See [`BorderLayout::configure`].
    #[must_use]
    pub fn region<R: Renderable + 'static>(
        mut self,
        region: RegionId,
        renderable: R,
        fixed_width: i32,
        fixed_height: i32,
    ) -> Self {
        self.layout.configure(region, renderable, fixed_width, fixed_height);
        self
    }

    /// Style every configured region.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the overflow policy.
    #[must_use]
    pub fn overflow(mut self, policy: OverflowPolicy) -> Self {
        self.layout.config.overflow = policy;
        self
    }

    /// Finish building.
    pub fn build(mut self) -> BorderLayout {
        if let Some(style) = self.style {
            crate::style::apply_style(&mut self.layout, &style);
        }
        self.layout
    }
}
