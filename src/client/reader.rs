//! Background reader
//!
//! The only code that reads from the socket. Runs on its own thread for the
//! lifetime of the connection, splitting the inbound stream into command
//! replies and events.

use std::sync::Arc;

use crossbeam::channel::{Sender, TrySendError};

use crate::error::{ChubbyError, Result};
use crate::protocol::{decode_header, read_block, Event, Header};
use crate::transport::LineReader;

use super::session::Shared;

/// Reader thread body. Returns once the connection is finished.
pub(crate) fn run(mut reader: Box<dyn LineReader>, shared: Arc<Shared>, events: Sender<Event>) {
    let err = loop {
        if let Err(e) = step(reader.as_mut(), &shared, &events) {
            break e;
        }
    };

    let err = if shared.is_closing() {
        ChubbyError::Closed
    } else {
        err
    };

    match &err {
        ChubbyError::Closed => tracing::info!("Connection closed"),
        e => tracing::warn!("Connection terminated: {}", e),
    }

    shared.terminate(err);
    // Dropping `events` here ends every EventStream once drained
}

/// Read and dispatch one inbound block
fn step(reader: &mut dyn LineReader, shared: &Shared, events: &Sender<Event>) -> Result<()> {
    let line = reader.read_line()?;
    tracing::trace!("Received header: {:?}", line);

    let header = decode_header(&line)?;
    let block = if header.has_body() {
        read_block(reader)?
    } else {
        Vec::new()
    };

    match header {
        Header::Ok(_) => shared.deliver(Ok(block)),
        Header::Err(message) => shared.deliver(Err(ChubbyError::Server(message))),
        Header::Event(name) => {
            dispatch_event(&name, &block, events);
            Ok(())
        }
    }
}

/// Decode an event block and queue it. Never fails: bad or unknown events
/// are logged and dropped so the status feed survives protocol drift.
fn dispatch_event(name: &str, block: &[String], events: &Sender<Event>) {
    let event = match Event::decode(name, block) {
        Ok(Some(event)) => event,
        Ok(None) => {
            tracing::debug!("Ignoring unknown event: {}", name);
            return;
        }
        Err(e) => {
            tracing::warn!("Dropping malformed {} event: {}", name, e);
            return;
        }
    };

    match events.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(event)) => {
            tracing::debug!("Event queue full, dropping {} event", event.name());
        }
        Err(TrySendError::Disconnected(_)) => {}
    }
}
