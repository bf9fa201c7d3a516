//! Input Actor: Dedicated thread for polling terminal events.
//!
//! This actor runs in its own thread and uses crossterm's event polling
//! to capture keyboard and resize events without blocking the main loop.

use super::messages::{InputEvent, KeyCode, KeyModifiers};
use crossbeam_channel::{SendTimeoutError, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, warn};

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for an event before
    /// checking for shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("termborder-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<InputEvent>, shutdown: &AtomicBool, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.try_send(InputEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Some(input_event) = convert_event(event) {
                            if !forward(sender, shutdown, input_event, poll_timeout) {
                                debug!("input forwarding stopped");
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "failed to read terminal event");
                        let _ = sender.try_send(InputEvent::Error(e.to_string()));
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!(error = %e, "failed to poll terminal events");
                    let _ = sender.try_send(InputEvent::Error(e.to_string()));
                    thread::sleep(poll_timeout);
                }
            }
        }
    }
}

/// Send `event`, waiting while the channel is full.
///
/// Returns `false` once the receiver is gone or shutdown is requested.
fn forward(
    sender: &Sender<InputEvent>,
    shutdown: &AtomicBool,
    mut event: InputEvent,
    poll_timeout: Duration,
) -> bool {
    loop {
        match sender.send_timeout(event, poll_timeout) {
            Ok(()) => return true,
            Err(SendTimeoutError::Disconnected(_)) => return false,
            Err(SendTimeoutError::Timeout(pending)) => {
                if shutdown.load(Ordering::Relaxed) {
                    return false;
                }
                event = pending;
            }
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Convert a crossterm event to our `InputEvent`.
///
/// Only key presses and resizes are forwarded; everything else yields `None`.
pub(crate) fn convert_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            let code = convert_key_code(key_event.code)?;
            let modifiers = convert_modifiers(key_event.modifiers);
            Some(InputEvent::Key { code, modifiers })
        }
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) | Event::Mouse(_) => None,
    }
}

fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
    Some(match code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::F(n) => KeyCode::F(n),
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::Right => KeyCode::Right,
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Home => KeyCode::Home,
        event::KeyCode::End => KeyCode::End,
        event::KeyCode::PageUp => KeyCode::PageUp,
        event::KeyCode::PageDown => KeyCode::PageDown,
        event::KeyCode::Tab => KeyCode::Tab,
        event::KeyCode::BackTab => KeyCode::BackTab,
        event::KeyCode::Delete => KeyCode::Delete,
        event::KeyCode::Insert => KeyCode::Insert,
        event::KeyCode::Esc => KeyCode::Esc,
        _ => return None,
    })
}

fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
    KeyModifiers {
        shift: mods.contains(event::KeyModifiers::SHIFT),
        control: mods.contains(event::KeyModifiers::CONTROL),
        alt: mods.contains(event::KeyModifiers::ALT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};

    #[test]
    fn test_convert_key_press() {
        let event = Event::Key(KeyEvent::new(
            event::KeyCode::Char('n'),
            event::KeyModifiers::NONE,
        ));
        assert_eq!(convert_event(event), Some(InputEvent::key(KeyCode::Char('n'))));
    }

    #[test]
    fn test_convert_ctrl_c() {
        let event = Event::Key(KeyEvent::new(
            event::KeyCode::Char('c'),
            event::KeyModifiers::CONTROL,
        ));
        assert_eq!(
            convert_event(event),
            Some(InputEvent::Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            })
        );
    }

    #[test]
    fn test_convert_ignores_release() {
        let event = Event::Key(KeyEvent::new_with_kind(
            event::KeyCode::Char('n'),
            event::KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(convert_event(event), None);
    }

    #[test]
    fn test_convert_resize() {
        assert_eq!(
            convert_event(Event::Resize(80, 24)),
            Some(InputEvent::Resize { width: 80, height: 24 })
        );
    }

    #[test]
    fn test_convert_ignores_mouse() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: event::KeyModifiers::NONE,
        });
        assert_eq!(convert_event(event), None);
    }

    #[test]
    fn test_forward_gives_up_on_shutdown_when_full() {
        let (tx, _rx) = bounded(1);
        tx.send(InputEvent::Shutdown).unwrap();
        let shutdown = AtomicBool::new(true);
        assert!(!forward(&tx, &shutdown, InputEvent::key(KeyCode::Enter), Duration::from_millis(5)));
    }

    #[test]
    fn test_forward_stops_when_receiver_dropped() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let shutdown = AtomicBool::new(false);
        assert!(!forward(&tx, &shutdown, InputEvent::key(KeyCode::Enter), Duration::from_millis(5)));
    }

    #[test]
    fn test_join_returns_with_full_channel() {
        let (tx, rx) = bounded(2);
        for _ in 0..2 {
            tx.send(InputEvent::key(KeyCode::Tab)).unwrap();
        }
        let actor = InputActor::spawn(tx, Duration::from_millis(10)).unwrap();
        thread::sleep(Duration::from_millis(50));

        let (done_tx, done_rx) = bounded(1);
        thread::spawn(move || {
            actor.join();
            let _ = done_tx.send(());
        });
        assert!(done_rx.recv_timeout(Duration::from_secs(2)).is_ok());
        assert_eq!(rx.len(), 2);
    }

    #[test]
    fn test_convert_ignores_focus_and_paste() {
        assert_eq!(convert_event(Event::FocusGained), None);
        assert_eq!(convert_event(Event::Paste("x".to_string())), None);
    }
}
