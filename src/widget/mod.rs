//! Widget module: Units a layout region can wrap.
//!
//! Every region of a [`BorderLayout`](crate::layout::BorderLayout) holds a
//! `Box<dyn Renderable>`. Layouts are renderables themselves, so they nest.
//!
//! # Example
//!
//! ```rust
//! use termborder::widget::{Renderable, Text};
//!
//! let mut text = Text::new("North component");
//! assert_eq!(text.view(), "North component");
//! ```

mod text;
mod traits;

pub use text::Text;
pub use traits::Renderable;
