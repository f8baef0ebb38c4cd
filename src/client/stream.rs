//! Event stream
//!
//! Receiving end of the bounded event queue. It ends once the background
//! reader exits and every queued event has been taken, or straight away
//! after `Client::close`, which discards what is still queued.

use std::time::Duration;

use crossbeam::channel::{Receiver, TryRecvError};

pub use crossbeam::channel::RecvTimeoutError;

use crate::protocol::Event;

/// Live, lossy stream of server events
///
/// Clones share one queue: each event is delivered to exactly one of them.
#[derive(Debug, Clone)]
pub struct EventStream {
    rx: Receiver<Event>,
}

impl EventStream {
    pub(crate) fn new(rx: Receiver<Event>) -> Self {
        Self { rx }
    }

    /// Block until the next event, or `None` once the connection is gone
    pub fn recv(&self) -> Option<Event> {
        self.rx.recv().ok()
    }

    /// Take a queued event without blocking
    pub fn try_recv(&self) -> Option<Event> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Block for at most `timeout`
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Event, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl Iterator for EventStream {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.recv()
    }
}
