//! Actor Model: Message-passing host loop for layouts.
//!
//! This module implements the host side a layout runs inside:
//! - **Input Actor**: Polls terminal events on its own thread, forwards them over a channel
//! - **Engine**: Owns the terminal, receives input and draws frames on the main thread
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐   draw(&str)   ┌──────────┐
//! │ Input Thread │ ─────────────────▶  │  Main Loop   │ ─────────────▶ │ Terminal │
//! └──────────────┘                     │ (owns layout)│                └──────────┘
//!                                      └──────────────┘
//! ```
//!
//! The layout itself never leaves the main thread.

mod engine;
mod input;
mod messages;

pub use engine::{Engine, EngineConfig};
pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers};
