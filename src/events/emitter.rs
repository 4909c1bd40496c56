//! Ordered, unbounded event channel.

use super::SocialEvent;
use futures_util::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tracing::trace;

/// Create a connected emitter/stream pair.
pub fn channel() -> (EventEmitter, EventStream) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventEmitter { tx }, EventStream { rx })
}

/// Publishing side, owned by the dispatcher.
#[derive(Debug, Clone)]
pub struct EventEmitter {
    tx: mpsc::UnboundedSender<SocialEvent>,
}

impl EventEmitter {
    /// Publish `event`. Never blocks; a departed subscriber is not an error.
    pub fn emit(&self, event: SocialEvent) {
        let name = event.name();
        if self.is_closed() || self.tx.send(event).is_err() {
            trace!(event = name, "event dropped, no subscriber");
        }
    }

    /// Whether the subscriber has gone away.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consuming side, handed to the downstream subscriber.
#[derive(Debug)]
pub struct EventStream {
    rx: mpsc::UnboundedReceiver<SocialEvent>,
}

impl EventStream {
    /// Wait for the next event; `None` once every emitter is gone.
    pub async fn recv(&mut self) -> Option<SocialEvent> {
        self.rx.recv().await
    }

    /// Next event if one is already queued.
    pub fn try_recv(&mut self) -> Option<SocialEvent> {
        self.rx.try_recv().ok()
    }

    /// Drain every queued event without waiting.
    pub fn drain(&mut self) -> Vec<SocialEvent> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}

impl Stream for EventStream {
    type Item = SocialEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
