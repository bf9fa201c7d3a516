//! Engine: Main coordinator that ties the input actor to the terminal.
//!
//! The Engine is the entry point for applications hosting a layout.
//! It owns the terminal, spawns the input actor, and draws whole frames
//! on the calling thread.

use super::messages::InputEvent;
use super::InputActor;
use crate::layout::Size;
use crate::terminal::OutputBuffer;
use crossbeam_channel::{bounded, never, Receiver};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::time::Duration;
use tracing::debug;

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Capacity of the input channel.
    pub input_capacity: usize,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            input_poll_timeout: Duration::from_millis(10),
            input_capacity: 64,
            alternate_screen: true,
        }
    }
}

/// The terminal host.
///
/// Raw mode, the alternate screen and the hidden cursor are set up on
/// creation and restored when the engine is dropped.
pub struct Engine {
    /// Configuration.
    config: EngineConfig,
    /// Input event receiver.
    input_rx: Receiver<InputEvent>,
    /// Input actor handle.
    input_actor: Option<InputActor>,
    /// Frame staging buffer.
    output: OutputBuffer,
    /// Terminal width.
    width: u16,
    /// Terminal height.
    height: u16,
    /// Whether the engine is running.
    running: bool,
}

impl Engine {
    /// Create a new engine with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate screen, etc.).
    pub fn new() -> io::Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a new engine with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails or the input thread cannot start.
    pub fn with_config(config: EngineConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide)?;

        let (input_tx, input_rx) = bounded::<InputEvent>(config.input_capacity);
        let input_actor = InputActor::spawn(input_tx, config.input_poll_timeout)?;

        debug!(width, height, "engine started");

        Ok(Self {
            config,
            input_rx,
            input_actor: Some(input_actor),
            output: OutputBuffer::new(),
            width,
            height,
            running: true,
        })
    }

    /// Get the terminal width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the terminal height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the terminal size.
    pub fn size(&self) -> Size {
        Size::from_terminal(self.width, self.height)
    }

    /// Check if the engine is still running.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the engine.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Wait for the next input event (blocking with timeout).
    pub fn wait_input(&self, timeout: Duration) -> Option<InputEvent> {
        self.input_rx.recv_timeout(timeout).ok()
    }

    /// Handle a resize event.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "terminal resized");
        self.width = width;
        self.height = height;
    }

    /// Draw a full frame from the top-left corner.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn draw(&mut self, frame: &str) -> io::Result<()> {
        self.output.clear();
        self.output.write_frame(frame, self.width);
        self.output.flush_to(&mut io::stdout().lock())
    }

    /// Clear the whole screen.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.output.clear();
        self.output.clear_screen();
        self.output.flush_to(&mut io::stdout().lock())
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        // Disconnect before joining.
        drop(std::mem::replace(&mut self.input_rx, never()));
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }

        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if self.config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        debug!("engine stopped");
    }
}
