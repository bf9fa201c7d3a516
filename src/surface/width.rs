//! Display width of text containing ANSI escape sequences.
//!
//! Escape sequences occupy no cells. Everything else is measured per
//! grapheme cluster with `unicode-width`.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ESC: char = '\x1b';

/// A run of a line: either an escape sequence or one grapheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Escape(&'a str),
    Grapheme(&'a str),
}

struct Pieces<'a> {
    rest: &'a str,
}

impl<'a> Pieces<'a> {
    const fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Byte length of the escape sequence at the start of `s`.
    fn escape_len(s: &str) -> usize {
        let bytes = s.as_bytes();
        match bytes.get(1) {
            // CSI: parameters, then a final byte in 0x40..=0x7E
            Some(b'[') => bytes[2..]
                .iter()
                .position(|b| (0x40..=0x7E).contains(b))
                .map_or(bytes.len(), |end| end + 3),
            // OSC: terminated by BEL or ST
            Some(b']') => {
                let body = &s[2..];
                match (body.find('\x07'), body.find("\x1b\\")) {
                    (Some(bel), Some(st)) if st < bel => st + 4,
                    (Some(bel), _) => bel + 3,
                    (None, Some(st)) => st + 4,
                    (None, None) => s.len(),
                }
            }
            Some(_) => 1 + s[1..].chars().next().map_or(0, char::len_utf8),
            None => 1,
        }
    }
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let len = if self.rest.starts_with(ESC) {
            Self::escape_len(self.rest)
        } else {
            let text = self.rest.find(ESC).map_or(self.rest, |end| &self.rest[..end]);
            text.graphemes(true).next().map_or(text.len(), str::len)
        };
        let (piece, rest) = self.rest.split_at(len);
        self.rest = rest;
        if piece.starts_with(ESC) {
            Some(Piece::Escape(piece))
        } else {
            Some(Piece::Grapheme(piece))
        }
    }
}

/// Printable width of `line` in cells.
pub fn display_width(line: &str) -> usize {
    Pieces::new(line)
        .map(|piece| match piece {
            Piece::Escape(_) => 0,
            Piece::Grapheme(g) => g.width(),
        })
        .sum()
}

/// Cut `line` to at most `max` cells.
///
/// Escape sequences are kept wherever they appear so that styling opened
/// before the cut is still closed after it. Returns the kept text and its
/// width, which can be less than `max` when a wide grapheme straddles the cut.
pub fn truncate_to_width(line: &str, max: usize) -> (String, usize) {
    let mut out = String::with_capacity(line.len());
    let mut width = 0;
    let mut full = false;
    for piece in Pieces::new(line) {
        match piece {
            Piece::Escape(seq) => out.push_str(seq),
            Piece::Grapheme(g) if !full => {
                let w = g.width();
                if width + w > max {
                    full = true;
                } else {
                    out.push_str(g);
                    width += w;
                }
            }
            Piece::Grapheme(_) => {}
        }
    }
    (out, width)
}

/// Cut or pad `line` to exactly `width` cells.
pub fn pad_to_width(line: &str, width: usize) -> String {
    let (mut out, used) = truncate_to_width(line, width);
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_plain() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("North component"), 15);
    }

    #[test]
    fn test_width_skips_escapes() {
        let line = "\x1b[38;2;0;175;175m┌──┐\x1b[0m";
        assert_eq!(display_width(line), 4);
        assert_eq!(display_width("\x1b]0;title\x07ab"), 2);
    }

    #[test]
    fn test_width_wide_graphemes() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width("e\u{301}"), 1);
    }

    #[test]
    fn test_truncate_keeps_escapes() {
        let (out, width) = truncate_to_width("\x1b[1mhello\x1b[0m", 3);
        assert_eq!(out, "\x1b[1mhel\x1b[0m");
        assert_eq!(width, 3);
    }

    #[test]
    fn test_truncate_wide_at_cut() {
        let (out, width) = truncate_to_width("a日b", 2);
        assert_eq!(out, "a");
        assert_eq!(width, 1);
        assert_eq!(pad_to_width("a日b", 2), "a ");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 5), "ab   ");
        assert_eq!(pad_to_width("abcdef", 3), "abc");
        assert_eq!(pad_to_width("", 2), "  ");
    }
}
