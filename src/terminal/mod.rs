//! Terminal module: Output staging for the terminal backend.

mod output;

pub use output::OutputBuffer;
