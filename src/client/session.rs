//! Connected session
//!
//! State shared between command callers and the background reader.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam::channel::{bounded, Receiver, Sender};
use parking_lot::Mutex;

use crate::error::{ChubbyError, Result};
use crate::protocol::{write_command, Command, Event};
use crate::transport::{LineWriter, Shutdown};

/// Reply delivered to the caller waiting on the pending slot
pub(crate) type Reply = Result<Vec<String>>;

/// Pending request and terminal error, guarded together so a caller can
/// never register after the reader has already given up
#[derive(Default)]
struct Slot {
    pending: Option<Sender<Reply>>,
    terminal: Option<ChubbyError>,
}

/// The part of a session the reader thread holds on to
pub(crate) struct Shared {
    slot: Mutex<Slot>,

    /// Set by `close()` so the reader reports `Closed` instead of the
    /// transport error caused by the shutdown
    closing: AtomicBool,

    closer: Arc<dyn Shutdown>,
}

impl Shared {
    pub(crate) fn new(closer: Arc<dyn Shutdown>) -> Self {
        Self {
            slot: Mutex::new(Slot::default()),
            closing: AtomicBool::new(false),
            closer,
        }
    }

    /// Hand a reply to the waiting caller
    ///
    /// A reply with nobody waiting means the stream is out of step with our
    /// commands; that is a protocol error.
    pub(crate) fn deliver(&self, reply: Reply) -> Result<()> {
        let pending = self.slot.lock().pending.take();
        match pending {
            Some(tx) => {
                // The caller blocks on the receiver until this send, so it is
                // still there unless its thread died.
                let _ = tx.send(reply);
                Ok(())
            }
            None => Err(ChubbyError::Protocol(
                "reply received with no command pending".to_string(),
            )),
        }
    }

    /// Record the terminal error (first one wins), fail the pending caller
    /// and close the transport. Returns the recorded error.
    pub(crate) fn terminate(&self, err: ChubbyError) -> ChubbyError {
        let recorded = {
            let mut slot = self.slot.lock();
            let recorded = slot.terminal.get_or_insert(err).clone();
            if let Some(tx) = slot.pending.take() {
                let _ = tx.send(Err(recorded.clone()));
            }
            recorded
        };

        if let Err(e) = self.closer.shutdown() {
            tracing::debug!("Transport shutdown failed: {}", e);
        }
        recorded
    }

    pub(crate) fn terminal(&self) -> Option<ChubbyError> {
        self.slot.lock().terminal.clone()
    }

    pub(crate) fn is_closing(&self) -> bool {
        self.closing.load(Ordering::Acquire)
    }
}

/// A live connection: writer side, reader thread handle and event queue
pub(crate) struct Session {
    shared: Arc<Shared>,

    writer: Mutex<Box<dyn LineWriter>>,

    /// Held across write + wait so only one command is ever in flight
    command_lock: Mutex<()>,

    events: Receiver<Event>,

    reader: Mutex<Option<JoinHandle<()>>>,
}

impl Session {
    pub(crate) fn new(
        shared: Arc<Shared>,
        writer: Box<dyn LineWriter>,
        events: Receiver<Event>,
        reader: JoinHandle<()>,
    ) -> Self {
        Self {
            shared,
            writer: Mutex::new(writer),
            command_lock: Mutex::new(()),
            events,
            reader: Mutex::new(Some(reader)),
        }
    }

    /// Send a command and block until its reply block arrives
    pub(crate) fn issue(&self, command: &Command) -> Reply {
        let _turn = self.command_lock.lock();

        let (tx, rx) = bounded(1);
        {
            let mut slot = self.shared.slot.lock();
            if let Some(err) = &slot.terminal {
                return Err(err.clone());
            }
            slot.pending = Some(tx);
        }

        tracing::debug!("Sending command: {}", command.to_line());
        let written = write_command(&mut **self.writer.lock(), command);
        match written {
            Ok(()) => {}
            // Rejected before anything reached the wire
            Err(e @ ChubbyError::InvalidArgument(_)) => {
                self.shared.slot.lock().pending = None;
                return Err(e);
            }
            Err(e) => {
                tracing::warn!("Failed to send {}: {}", command.name(), e);
                return Err(self.shared.terminate(e));
            }
        }

        match rx.recv() {
            Ok(reply) => reply,
            // Sender dropped without a reply; the reader is gone
            Err(_) => Err(self
                .shared
                .terminal()
                .unwrap_or(ChubbyError::Closed)),
        }
    }

    pub(crate) fn events(&self) -> Receiver<Event> {
        self.events.clone()
    }

    pub(crate) fn terminal(&self) -> Option<ChubbyError> {
        self.shared.terminal()
    }

    /// Close the transport, wait for the reader thread to exit and discard
    /// undelivered events
    ///
    /// Returns the fatal error that ended the connection earlier, if any.
    pub(crate) fn shutdown(&self) -> Result<()> {
        let prior = self.shared.terminal();

        self.shared.closing.store(true, Ordering::Release);
        if let Err(e) = self.shared.closer.shutdown() {
            tracing::debug!("Transport shutdown failed: {}", e);
        }

        if let Some(handle) = self.reader.lock().take() {
            if handle.join().is_err() {
                tracing::error!("Reader thread panicked");
            }
        }

        // The reader is gone and its sender dropped; emptying the queue seals
        // every EventStream
        let dropped = self.events.try_iter().count();
        if dropped > 0 {
            tracing::debug!("Discarded {} queued events on close", dropped);
        }

        match prior {
            Some(ChubbyError::Closed) | None => Ok(()),
            Some(err) => Err(err),
        }
    }
}
