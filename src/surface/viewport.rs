//! Viewport: A fixed-size display surface.
//!
//! The viewport owns the text a region shows and the [`Style`] it is framed
//! with. Rendering always yields a block of exactly `width × height` cells:
//! content is clipped to the inner box, short lines and missing rows are
//! padded with blanks, and the frame is drawn around it.

use crate::layout::Size;
use crate::style::{Borders, Style, RESET};

use super::width::pad_to_width;

/// A width/height-aware surface that clips, pads and frames its content.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    /// Width in columns. May be negative after an over-constrained layout.
    width: i32,
    /// Height in rows. May be negative after an over-constrained layout.
    height: i32,
    /// Text shown inside the frame.
    content: String,
    /// Frame and annotation settings.
    style: Style,
}

impl Viewport {
    /// Create an empty, unframed viewport.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            content: String::new(),
            style: Style::default(),
        }
    }

    /// Get the width.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Get the height.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Get the size.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Set the size.
    pub fn set_size(&mut self, size: Size) {
        self.width = size.width;
        self.height = size.height;
    }

    /// Get the content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Get the style.
    pub const fn style(&self) -> &Style {
        &self.style
    }

    /// Replace the style.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Size left for content once the frame is taken out. May be negative.
    pub fn inner_size(&self) -> Size {
        self.size()
            .shrink(self.style.horizontal_frame(), self.style.vertical_frame())
    }

    /// Render the framed content.
    ///
    /// Non-positive sizes render as the empty block. A surface too small for
    /// its own frame renders blank.
    pub fn view(&self) -> String {
        let (Ok(width), Ok(height)) = (usize::try_from(self.width), usize::try_from(self.height))
        else {
            return String::new();
        };
        if width == 0 || height == 0 {
            return String::new();
        }
        let inner = self.inner_size();
        let (Ok(inner_width), Ok(inner_height)) =
            (usize::try_from(inner.width), usize::try_from(inner.height))
        else {
            return vec![" ".repeat(width); height].join("\n");
        };

        let style = &self.style;
        let glyphs = style.border.unwrap_or_default().glyphs();
        let paint = |s: String| match style.border_fg {
            Some(color) => format!("{}{s}{RESET}", color.fg_sequence()),
            None => s,
        };
        let edge = |on: bool| {
            if on {
                paint(glyphs.vertical.to_string())
            } else {
                String::new()
            }
        };
        let left = edge(style.draws(Borders::LEFT));
        let right = edge(style.draws(Borders::RIGHT));
        let padding = usize::from(style.padding);
        let body_width = inner_width + 2 * padding;
        let gap = " ".repeat(padding);

        let horizontal = |first: char, last: char| {
            let mut line = String::with_capacity(body_width + 2);
            if style.draws(Borders::LEFT) {
                line.push(first);
            }
            line.extend(std::iter::repeat(glyphs.horizontal).take(body_width));
            if style.draws(Borders::RIGHT) {
                line.push(last);
            }
            paint(line)
        };
        let blank_row = format!("{left}{}{right}", " ".repeat(body_width));

        let mut lines = Vec::with_capacity(height);
        if style.draws(Borders::TOP) {
            lines.push(horizontal(glyphs.top_left, glyphs.top_right));
        }
        lines.extend(std::iter::repeat(blank_row.clone()).take(padding));
        let mut content = self.content.lines();
        for _ in 0..inner_height {
            let line = content.next().unwrap_or("");
            lines.push(format!("{left}{gap}{}{gap}{right}", pad_to_width(line, inner_width)));
        }
        lines.extend(std::iter::repeat(blank_row).take(padding));
        if style.draws(Borders::BOTTOM) {
            lines.push(horizontal(glyphs.bottom_left, glyphs.bottom_right));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BorderKind, Rgb};
    use crate::surface::{block_size, display_width};

    #[test]
    fn test_viewport_clips_and_pads() {
        let mut viewport = Viewport::new(4, 3);
        viewport.set_content("abcdef\nxy");
        assert_eq!(viewport.view(), "abcd\nxy  \n    ");
    }

    #[test]
    fn test_viewport_empty_sizes() {
        assert_eq!(Viewport::new(0, 10).view(), "");
        assert_eq!(Viewport::new(10, 0).view(), "");
        assert_eq!(Viewport::new(-4, 10).view(), "");
    }

    #[test]
    fn test_viewport_border() {
        let mut viewport = Viewport::new(6, 3);
        viewport.set_style(Style::new().with_border(BorderKind::Normal));
        viewport.set_content("West component");
        assert_eq!(viewport.view(), "┌────┐\n│West│\n└────┘");
    }

    #[test]
    fn test_viewport_rounded_partial_sides() {
        let mut viewport = Viewport::new(3, 3);
        viewport.set_style(
            Style::new()
                .with_border(BorderKind::Rounded)
                .with_sides(Borders::TOP | Borders::LEFT),
        );
        viewport.set_content("ab\ncd");
        assert_eq!(viewport.view(), "╭──\n│ab\n│cd");
    }

    #[test]
    fn test_viewport_padding() {
        let mut viewport = Viewport::new(5, 5);
        viewport.set_style(Style::new().with_border(BorderKind::Double).with_padding(1));
        viewport.set_content("x");
        assert_eq!(viewport.view(), "╔═══╗\n║   ║\n║ x ║\n║   ║\n╚═══╝");
    }

    #[test]
    fn test_viewport_too_small_for_frame() {
        let mut viewport = Viewport::new(1, 2);
        viewport.set_style(Style::new().with_border(BorderKind::Normal));
        assert_eq!(viewport.view(), " \n ");
        assert!(viewport.inner_size().is_negative());
    }

    #[test]
    fn test_viewport_colored_border_keeps_size() {
        let mut viewport = Viewport::new(10, 4);
        viewport.set_style(
            Style::new()
                .with_border(BorderKind::Thick)
                .with_border_fg(Rgb::TEAL),
        );
        viewport.set_content("colored");
        let view = viewport.view();
        assert!(view.contains("\x1b[38;2;0;175;175m"));
        assert_eq!(block_size(&view), (10, 4));
        for line in view.lines() {
            assert_eq!(display_width(line), 10);
        }
    }
}
