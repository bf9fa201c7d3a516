//! Layout module: Five-region border layout.
//!
//! A [`BorderLayout`] divides its size between North, West, Center, East and
//! South regions. Sizes are recomputed on resize and whenever a region is
//! configured or changes visibility; rendering only joins the cached views.

mod border;
mod component;
mod error;
mod region;
mod size;

pub use border::{BorderLayout, BorderLayoutBuilder, BorderLayoutConfig, LayoutManager, OverflowPolicy};
pub use component::LayoutComponent;
pub use error::LayoutError;
pub use region::{RegionId, RegionState};
pub use size::{Resizable, Size};
