//! Style: Presentation framing for layout regions.
//!
//! A [`Style`] describes how a [`Viewport`](crate::surface::Viewport) frames
//! its content: which border glyphs to use, which sides to draw, the border
//! color and inner padding. Styles are plain values; applying one to every
//! region of a layout is an explicit pass ([`apply_style`]).

use bitflags::bitflags;

use crate::layout::{BorderLayout, LayoutManager};

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Teal, close to xterm color 36.
    pub const TEAL: Self = Self::new(0, 175, 175);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// The SGR sequence selecting this color as foreground.
    pub fn fg_sequence(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

/// SGR reset.
pub(crate) const RESET: &str = "\x1b[0m";

bitflags! {
    /// Which sides of a region's frame are drawn.
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Borders: u8 {
        /// Top edge
        const TOP = 0b0001;
        /// Right edge
        const RIGHT = 0b0010;
        /// Bottom edge
        const BOTTOM = 0b0100;
        /// Left edge
        const LEFT = 0b1000;
        /// All four edges
        const ALL = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}

impl Default for Borders {
    fn default() -> Self {
        Self::ALL
    }
}

impl std::fmt::Debug for Borders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Glyph set for a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderKind {
    /// `┌─┐│└┘`
    #[default]
    Normal,
    /// `╭─╮│╰╯`
    Rounded,
    /// `┏━┓┃┗┛`
    Thick,
    /// `╔═╗║╚╝`
    Double,
}

/// The six glyphs a frame is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
    /// Horizontal edge.
    pub horizontal: char,
    /// Vertical edge.
    pub vertical: char,
}

impl BorderKind {
    /// Get the glyph set for this border kind.
    pub const fn glyphs(self) -> BorderGlyphs {
        let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical) = match self {
            Self::Normal => ('┌', '┐', '└', '┘', '─', '│'),
            Self::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
            Self::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
            Self::Double => ('╔', '╗', '╚', '╝', '═', '║'),
        };
        BorderGlyphs {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        }
    }
}

/// Presentation framing for a single region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    /// Border glyphs, or `None` for no border.
    pub border: Option<BorderKind>,
    /// Sides drawn when `border` is set.
    pub sides: Borders,
    /// Border color. Plain glyphs when `None`.
    pub border_fg: Option<Rgb>,
    /// Blank cells between the frame and the content, on every side.
    pub padding: u16,
    /// Append a `"{w} x {h}"` line to the rendered content.
    pub annotate_size: bool,
}

impl Style {
    /// An unframed style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a border of the given kind on all sides.
    #[must_use]
    pub fn with_border(mut self, kind: BorderKind) -> Self {
        self.border = Some(kind);
        self.sides = Borders::ALL;
        self
    }

    /// Restrict the drawn sides.
    #[must_use]
    pub fn with_sides(mut self, sides: Borders) -> Self {
        self.sides = sides;
        self
    }

    /// Color the border.
    #[must_use]
    pub fn with_border_fg(mut self, color: Rgb) -> Self {
        self.border_fg = Some(color);
        self
    }

    /// Set the inner padding.
    #[must_use]
    pub fn with_padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    /// Toggle the size annotation line.
    #[must_use]
    pub fn with_size_annotation(mut self, annotate: bool) -> Self {
        self.annotate_size = annotate;
        self
    }

    fn has_side(&self, side: Borders) -> bool {
        self.border.is_some() && self.sides.contains(side)
    }

    /// Columns consumed by the frame (borders plus padding).
    pub fn horizontal_frame(&self) -> i32 {
        i32::from(self.has_side(Borders::LEFT))
            + i32::from(self.has_side(Borders::RIGHT))
            + 2 * i32::from(self.padding)
    }

    /// Rows consumed by the frame (borders plus padding).
    pub fn vertical_frame(&self) -> i32 {
        i32::from(self.has_side(Borders::TOP))
            + i32::from(self.has_side(Borders::BOTTOM))
            + 2 * i32::from(self.padding)
    }

    pub(crate) fn draws(&self, side: Borders) -> bool {
        self.has_side(side)
    }
}

/// Set `style` on every occupied region of `layout`.
///
/// Absent regions are skipped; regions configured afterwards keep the
/// default style.
pub fn apply_style(layout: &mut BorderLayout, style: &Style) {
    for component in layout.components_mut() {
        component.set_style(style.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_all_sides() {
        let style = Style::new().with_border(BorderKind::Normal);
        assert_eq!(style.horizontal_frame(), 2);
        assert_eq!(style.vertical_frame(), 2);
    }

    #[test]
    fn test_frame_size_partial_sides_and_padding() {
        let style = Style::new()
            .with_border(BorderKind::Rounded)
            .with_sides(Borders::TOP | Borders::BOTTOM)
            .with_padding(1);
        assert_eq!(style.horizontal_frame(), 2);
        assert_eq!(style.vertical_frame(), 4);
    }

    #[test]
    fn test_no_border_ignores_sides() {
        let style = Style::new().with_sides(Borders::ALL);
        assert_eq!(style.horizontal_frame(), 0);
        assert_eq!(style.vertical_frame(), 0);
    }

    #[test]
    fn test_rgb_sequence() {
        assert_eq!(Rgb::from_u32(0x00AFAF), Rgb::TEAL);
        assert_eq!(Rgb::new(1, 2, 3).fg_sequence(), "\x1b[38;2;1;2;3m");
    }
}
