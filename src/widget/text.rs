//! Text widget: A static block of text.

use crate::actor::InputEvent;

use super::traits::Renderable;

/// A renderable showing fixed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    text: String,
}

impl Text {
    /// Create a text widget.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Get the text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Renderable for Text {
    fn update(&mut self, _event: &InputEvent) -> bool {
        // Static text doesn't handle input
        false
    }

    fn view(&mut self) -> String {
        self.text.clone()
    }
}
