//! Client connection
//!
//! Owns the connection lifecycle and the raw request/reply API.

use std::mem;
use std::sync::Arc;
use std::thread;

use crossbeam::channel::bounded;
use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{ChubbyError, Result};
use crate::protocol::{names, Arg, Command};
use crate::transport::{self, Transport};

use super::reader;
use super::session::{Session, Shared};
use super::stream::EventStream;

enum Lifecycle {
    Unconnected,

    /// Dialing or reading the greeting. The state lock is not held meanwhile.
    Connecting,

    Connected(Arc<Session>),
    Closed,
}

/// Connection to a chub server
///
/// All methods take `&self`; a `Client` can be shared between threads
/// (e.g. in an `Arc`). Concurrent commands queue up and run one at a time.
pub struct Client {
    config: Config,
    state: Mutex<Lifecycle>,
}

impl Client {
    /// Create an unconnected client
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: Mutex::new(Lifecycle::Unconnected),
        }
    }

    /// Connect over TCP, read the greeting and start the background reader
    pub fn connect(&self, host: &str, port: u16) -> Result<()> {
        self.begin_connect()?;

        tracing::info!("Connecting to {}:{}", host, port);
        let session = transport::connect(host, port, &self.config)
            .and_then(|transport| self.start(transport));
        self.finish_connect(session)
    }

    /// Connect over an already established transport
    pub fn connect_with(&self, transport: Transport) -> Result<()> {
        self.begin_connect()?;
        let session = self.start(transport);
        self.finish_connect(session)
    }

    /// Move from `Unconnected` to `Connecting`, releasing the lock before
    /// any blocking I/O happens
    fn begin_connect(&self) -> Result<()> {
        let mut state = self.state.lock();
        match &*state {
            Lifecycle::Unconnected => {}
            Lifecycle::Connecting => return Err(ChubbyError::AlreadyConnected),
            Lifecycle::Connected(session) => {
                return Err(match session.terminal() {
                    Some(_) => ChubbyError::Closed,
                    None => ChubbyError::AlreadyConnected,
                })
            }
            Lifecycle::Closed => return Err(ChubbyError::Closed),
        }

        self.config.validate()?;
        *state = Lifecycle::Connecting;
        Ok(())
    }

    fn finish_connect(&self, session: Result<Arc<Session>>) -> Result<()> {
        let mut state = self.state.lock();
        match session {
            Ok(session) => {
                *state = Lifecycle::Connected(session);
                Ok(())
            }
            Err(e) => {
                *state = Lifecycle::Unconnected;
                Err(e)
            }
        }
    }

    /// Handshake, then hand the read side to a new reader thread
    fn start(&self, transport: Transport) -> Result<Arc<Session>> {
        let Transport {
            mut reader,
            writer,
            closer,
        } = transport;

        for _ in 0..self.config.greeting_lines {
            match reader.read_line() {
                Ok(line) => tracing::debug!("Greeting: {}", line),
                Err(e) => {
                    let _ = closer.shutdown();
                    return Err(e);
                }
            }
        }

        let shared = Arc::new(Shared::new(Arc::clone(&closer)));
        let (event_tx, event_rx) = bounded(self.config.event_buffer_size);

        let reader_shared = Arc::clone(&shared);
        let handle = thread::Builder::new()
            .name("chubby-reader".to_string())
            .spawn(move || reader::run(reader, reader_shared, event_tx));
        let handle = match handle {
            Ok(handle) => handle,
            Err(e) => {
                let _ = closer.shutdown();
                return Err(e.into());
            }
        };

        tracing::debug!("Background reader started");
        Ok(Arc::new(Session::new(shared, writer, event_rx, handle)))
    }

    /// Close the connection and wait for the background reader to exit
    ///
    /// If the connection had already died, the client still ends up closed
    /// but the fatal error is returned. Events still queued are discarded.
    ///
    /// While a `connect` is still dialing or reading the greeting this
    /// returns `NotConnected` straight away.
    pub fn close(&self) -> Result<()> {
        let session = {
            let mut state = self.state.lock();
            match mem::replace(&mut *state, Lifecycle::Closed) {
                Lifecycle::Connected(session) => session,
                other => {
                    *state = other;
                    return Err(ChubbyError::NotConnected);
                }
            }
        };

        tracing::debug!("Closing connection");
        session.shutdown()
    }

    // =========================================================================
    // Request / Reply
    // =========================================================================

    /// Send `name` with `args` and wait for the reply block
    ///
    /// Returns the raw record lines of an `OK` reply. An `ERR` reply becomes
    /// [`ChubbyError::Server`]; the connection stays usable. Transport and
    /// protocol failures are fatal and are returned to this and every later
    /// call.
    pub fn issue_command(&self, name: &str, args: &[Arg]) -> Result<Vec<String>> {
        self.execute(&Command::with_args(name, args))
    }

    /// Send a prepared command and wait for the reply block
    pub fn execute(&self, command: &Command) -> Result<Vec<String>> {
        self.session()?.issue(command)
    }

    /// Stream of server events
    ///
    /// Events only flow after the server has been asked for them; see
    /// [`Client::subscribe_events`].
    pub fn events(&self) -> Result<EventStream> {
        Ok(EventStream::new(self.session()?.events()))
    }

    /// Ask the server to push events and return the stream
    pub fn subscribe_events(&self) -> Result<EventStream> {
        self.issue_command(names::EVENTS, &[Arg::Bool(true)])?;
        self.events()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// True while the connection is up. Turns false as soon as the
    /// background reader has stopped, even before `close`.
    pub fn is_connected(&self) -> bool {
        match &*self.state.lock() {
            Lifecycle::Connected(session) => session.terminal().is_none(),
            _ => false,
        }
    }

    /// The error that ended the connection, if it has ended
    pub fn terminal_error(&self) -> Option<ChubbyError> {
        match &*self.state.lock() {
            Lifecycle::Connected(session) => session.terminal(),
            _ => None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn session(&self) -> Result<Arc<Session>> {
        match &*self.state.lock() {
            Lifecycle::Connected(session) => Ok(Arc::clone(session)),
            _ => Err(ChubbyError::NotConnected),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        if let Lifecycle::Connected(session) = mem::replace(self.state.get_mut(), Lifecycle::Closed)
        {
            let _ = session.shutdown();
        }
    }
}
