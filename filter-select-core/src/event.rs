//! Terminal events and the polling task that feeds them to the host loop

use std::time::Duration;

use crossterm::event::{self, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Raw event from crossterm before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// The event payload components receive
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Left button press at a cell
    Click { column: u16, row: u16 },
    /// Any other mouse event
    Mouse(MouseEvent),
    /// Mouse wheel at a cell; positive `delta` is down
    Scroll { column: u16, row: u16, delta: isize },
    /// Terminal resize
    Resize(u16, u16),
}

/// Process a raw event into an EventKind
pub fn process_raw_event(raw: RawEvent) -> EventKind {
    match raw {
        RawEvent::Key(key) => EventKind::Key(key),
        RawEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => EventKind::Click {
                column: mouse.column,
                row: mouse.row,
            },
            MouseEventKind::ScrollDown => EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: 1,
            },
            MouseEventKind::ScrollUp => EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: -1,
            },
            _ => EventKind::Mouse(mouse),
        },
        RawEvent::Resize(w, h) => EventKind::Resize(w, h),
    }
}

/// Spawn the event polling task with cancellation support
///
/// Polls crossterm in batches and forwards key, mouse and resize events
/// through `tx` until `cancel_token` fires or the receiver is dropped.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("Event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        let raw = match event::read() {
                            Ok(event::Event::Key(key)) => RawEvent::Key(key),
                            Ok(event::Event::Mouse(mouse)) => RawEvent::Mouse(mouse),
                            Ok(event::Event::Resize(w, h)) => RawEvent::Resize(w, h),
                            _ => continue,
                        };
                        if tx.send(raw).is_err() {
                            debug!("Event channel closed, stopping poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}
