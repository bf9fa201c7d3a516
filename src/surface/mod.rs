//! Surface module: Text blocks sized in character cells.
//!
//! This module contains:
//! - [`Viewport`]: A width/height-aware display surface that clips, pads and frames content
//! - [`join_horizontal`] and [`join_vertical`]: Block stacking used to assemble layouts
//! - [`display_width`]: Printable width of a line, ignoring ANSI escape sequences

mod join;
mod viewport;
mod width;

pub use join::{block_size, join_horizontal, join_vertical};
pub use viewport::Viewport;
pub use width::{display_width, pad_to_width, truncate_to_width};
