//! Side effects the client asks the front end to perform.
//!
//! Emitting never blocks: the channel is unbounded and a closed receiver just
//! means nothing is displaying the screen any more.

use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::{Notice, Route, Transaction};

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A fresh snapshot that differs from the one on screen.
    Render(Transaction),
    Navigate(Route),
    Notify(Notice),
}

pub type EventStream = mpsc::UnboundedReceiver<UiEvent>;

#[derive(Debug, Clone)]
pub struct EventSink {
    sender: mpsc::UnboundedSender<UiEvent>,
}

/// Creates a connected sink/stream pair.
pub fn channel() -> (EventSink, EventStream) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (EventSink { sender }, receiver)
}

impl EventSink {
    pub fn navigate(&self, route: Route) {
        debug!(route = %route, "Navigating");
        self.emit(UiEvent::Navigate(route));
    }

    pub fn notify(&self, notice: Notice) {
        debug!(title = %notice.title, "Showing notice");
        self.emit(UiEvent::Notify(notice));
    }

    pub fn render(&self, transaction: Transaction) {
        self.emit(UiEvent::Render(transaction));
    }

    fn emit(&self, event: UiEvent) {
        if self.sender.send(event).is_err() {
            debug!("No front end attached; event dropped");
        }
    }
}

/// Collects every event currently queued on `stream` without waiting.
pub fn drain(stream: &mut EventStream) -> Vec<UiEvent> {
    let mut events = Vec::new();
    while let Ok(event) = stream.try_recv() {
        events.push(event);
    }
    events
}
