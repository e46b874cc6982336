//! Event handling for the TUI
//!
//! Terminal events (key presses, resize, ticks) are polled on a background
//! thread and sent over a channel. Export workers report back through the
//! same channel, so the UI thread handles one event at a time.

use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use tracing::warn;

use crate::export::ExportError;

/// Events the UI loop reacts to
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
    /// An export worker finished
    ExportFinished(Result<PathBuf, ExportError>),
    /// Reading the terminal failed; no further input will arrive
    InputLost(String),
}

/// Event handler for terminal events
pub struct EventHandler {
    sender: mpsc::Sender<Event>,
    receiver: mpsc::Receiver<Event>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = {
            let sender = sender.clone();
            thread::spawn(move || forward_events(&sender, tick_rate, event::poll, event::read))
        };

        Self {
            sender,
            receiver,
            handler,
        }
    }

    /// A sender for workers that report back into the loop
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.sender.clone()
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

/// Poll the terminal and forward events until the receiver goes away
///
/// A poll or read failure is forwarded as [`Event::InputLost`] before the
/// loop ends, so the UI never waits on input that cannot come.
fn forward_events<P, R>(
    sender: &mpsc::Sender<Event>,
    tick_rate: Duration,
    mut poll: P,
    mut read: R,
) where
    P: FnMut(Duration) -> io::Result<bool>,
    R: FnMut() -> io::Result<CrosstermEvent>,
{
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        let ready = match poll(timeout) {
            Ok(ready) => ready,
            Err(e) => {
                warn!(error = %e, "event polling stopped");
                let _ = sender.send(Event::InputLost(e.to_string()));
                return;
            }
        };
        if ready {
            let forwarded = match read() {
                Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                Ok(CrosstermEvent::Resize(width, height)) => Some(Event::Resize(width, height)),
                Ok(_) => None,
                Err(e) => {
                    warn!(error = %e, "failed to read terminal event");
                    let _ = sender.send(Event::InputLost(e.to_string()));
                    return;
                }
            };
            if let Some(event) = forwarded {
                if sender.send(event).is_err() {
                    return;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if sender.send(Event::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_poll_failure_is_forwarded() {
        let (tx, rx) = mpsc::channel();
        forward_events(
            &tx,
            Duration::from_secs(60),
            |_| Err(io::Error::new(io::ErrorKind::Other, "tty gone")),
            || unreachable!("nothing to read"),
        );

        match rx.try_recv() {
            Ok(Event::InputLost(reason)) => assert!(reason.contains("tty gone")),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_read_failure_after_key_is_forwarded() {
        let (tx, rx) = mpsc::channel();
        let mut reads = 0;
        forward_events(
            &tx,
            Duration::from_secs(60),
            |_| Ok(true),
            || {
                reads += 1;
                if reads == 1 {
                    Ok(CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)))
                } else {
                    Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
                }
            },
        );

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], Event::Key(_)));
        assert!(matches!(events[1], Event::InputLost(_)));
    }
}
