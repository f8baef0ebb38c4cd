//! TCP transport
//!
//! Buffered line I/O over a `TcpStream`, with the stream cloned into
//! separate read and write handles.

use std::io::{BufReader, BufWriter};
use std::net::{Shutdown as NetShutdown, TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::config::Config;
use crate::error::{ChubbyError, Result};

use super::{Shutdown, Transport};

/// Open a TCP connection to `host:port` and split it for line I/O
pub fn connect(host: &str, port: u16, config: &Config) -> Result<Transport> {
    let stream = if config.connect_timeout_ms > 0 {
        connect_with_timeout(host, port, Duration::from_millis(config.connect_timeout_ms))?
    } else {
        TcpStream::connect((host, port))?
    };

    let peer = stream
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    tracing::debug!("TCP connection established to {}", peer);

    from_stream(stream, config.nodelay)
}

/// Wrap an already connected stream
pub fn from_stream(stream: TcpStream, nodelay: bool) -> Result<Transport> {
    stream.set_nodelay(nodelay)?;

    let read_stream = stream.try_clone()?;
    let write_stream = stream.try_clone()?;

    Ok(Transport::new(
        BufReader::new(read_stream),
        BufWriter::new(write_stream),
        TcpShutdown::new(stream),
    ))
}

fn connect_with_timeout(host: &str, port: u16, timeout: Duration) -> Result<TcpStream> {
    let mut last_err = None;
    for addr in (host, port).to_socket_addrs()? {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                tracing::debug!("Connect to {} failed: {}", addr, e);
                last_err = Some(e);
            }
        }
    }

    Err(match last_err {
        Some(e) => e.into(),
        None => ChubbyError::Transport(format!("{}:{} resolved to no addresses", host, port)),
    })
}

/// Shuts down both directions of a TCP stream, once
pub struct TcpShutdown {
    stream: TcpStream,
    closed: AtomicBool,
}

impl TcpShutdown {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            closed: AtomicBool::new(false),
        }
    }
}

impl Shutdown for TcpShutdown {
    fn shutdown(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }

        match self.stream.shutdown(NetShutdown::Both) {
            Ok(()) => Ok(()),
            // The peer already went away
            Err(e) if e.kind() == std::io::ErrorKind::NotConnected => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
