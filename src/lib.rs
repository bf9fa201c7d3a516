//! # termborder
//!
//! A five-region border layout manager for terminal UIs.
//!
//! A [`BorderLayout`] splits the terminal into North, West, Center, East and
//! South regions. North and South span the full width with a fixed height,
//! West and East sit between them with a fixed width, and Center takes
//! whatever is left. Regions can be shown, hidden and toggled at runtime;
//! the geometry is recomputed on every change.
//!
//! ## Core Concepts
//!
//! - **Regions**: Each slot wraps one [`Renderable`]
//! - **Fixed sizes**: North/South pin a height, West/East pin a width
//! - **Visibility**: Absent, visible or hidden, with hidden regions keeping their configuration
//! - **Joining**: Rendered blocks are glued side by side and stacked top to bottom
//!
//! ## Example
//!
//! ```rust
//! use termborder::{BorderLayout, RegionId, Size, Text};
//!
//! let mut layout = BorderLayout::builder()
//!     .region(RegionId::North, Text::new("North"), 0, 4)
//!     .region(RegionId::West, Text::new("West"), 24, 0)
//!     .region(RegionId::Center, Text::new("Center"), 0, 0)
//!     .region(RegionId::East, Text::new("East"), 24, 0)
//!     .region(RegionId::South, Text::new("South"), 0, 4)
//!     .build();
//!
//! layout.resize(Size::new(80, 24));
//! assert_eq!(layout.region_size(RegionId::Center), Some(Size::new(32, 16)));
//!
//! layout.toggle(&[RegionId::West, RegionId::East]);
//! assert_eq!(layout.region_size(RegionId::Center), Some(Size::new(80, 16)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod layout;
pub mod style;
pub mod surface;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use actor::{Engine, EngineConfig, InputEvent, KeyCode, KeyModifiers};
pub use layout::{
    BorderLayout, BorderLayoutBuilder, BorderLayoutConfig, LayoutComponent, LayoutError,
    LayoutManager, OverflowPolicy, RegionId, RegionState, Resizable, Size,
};
pub use style::{apply_style, BorderKind, Borders, Rgb, Style};
pub use surface::{join_horizontal, join_vertical, Viewport};
pub use widget::{Renderable, Text};
