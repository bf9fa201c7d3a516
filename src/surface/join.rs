//! Block joining: Stack rectangular text blocks side by side or on top of each other.
//!
//! A block is a string of `\n`-separated lines. The empty string is a block
//! with no lines. Blocks are not required to be rectangular on input; the
//! joiners pad every line so the result is.

use super::width::{display_width, pad_to_width};

fn block_lines(block: &str) -> Vec<&str> {
    if block.is_empty() {
        Vec::new()
    } else {
        block.split('\n').collect()
    }
}

/// Width (widest line) and height (line count) of a block.
pub fn block_size(block: &str) -> (usize, usize) {
    let lines = block_lines(block);
    let width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
    (width, lines.len())
}

/// Place blocks left to right, aligned to the top.
///
/// Each block keeps its own width; blocks shorter than the tallest one are
/// extended with blank lines at the bottom.
pub fn join_horizontal<S: AsRef<str>>(blocks: &[S]) -> String {
    if let [only] = blocks {
        return only.as_ref().to_string();
    }
    let columns: Vec<(Vec<&str>, usize)> = blocks
        .iter()
        .map(|block| {
            let lines = block_lines(block.as_ref());
            let width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
            (lines, width)
        })
        .collect();
    let height = columns.iter().map(|(lines, _)| lines.len()).max().unwrap_or(0);

    let mut rows = Vec::with_capacity(height);
    for row in 0..height {
        let mut line = String::new();
        for (lines, width) in &columns {
            line.push_str(&pad_to_width(lines.get(row).copied().unwrap_or(""), *width));
        }
        rows.push(line);
    }
    rows.join("\n")
}

/// Place blocks top to bottom, aligned to the left.
///
/// Every line is padded to the width of the widest block.
pub fn join_vertical<S: AsRef<str>>(blocks: &[S]) -> String {
    if let [only] = blocks {
        return only.as_ref().to_string();
    }
    let lines: Vec<&str> = blocks.iter().flat_map(|b| block_lines(b.as_ref())).collect();
    let width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
    lines
        .iter()
        .map(|line| pad_to_width(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_size() {
        assert_eq!(block_size(""), (0, 0));
        assert_eq!(block_size("ab\nabcd\n"), (4, 3));
    }

    #[test]
    fn test_join_horizontal_pads_short_blocks() {
        let joined = join_horizontal(&["ab\nab\nab", "xyz"]);
        assert_eq!(joined, "abxyz\nab   \nab   ");
    }

    #[test]
    fn test_join_horizontal_keeps_column_width() {
        let joined = join_horizontal(&["a\nabc", "X\nX"]);
        assert_eq!(joined, "a  X\nabcX");
    }

    #[test]
    fn test_join_vertical_pads_to_widest() {
        let joined = join_vertical(&["north", "w|c|e\nw|c|e", "s"]);
        assert_eq!(joined, "north\nw|c|e\nw|c|e\ns    ");
    }

    #[test]
    fn test_join_skips_empty_blocks() {
        assert_eq!(join_vertical(&["", "ab", ""]), "ab");
        assert_eq!(join_horizontal(&["", "ab"]), "ab");
        assert_eq!(join_vertical::<&str>(&[]), "");
        assert_eq!(join_horizontal::<&str>(&[]), "");
    }
}
