//! Transport Module
//!
//! Line framing over a connected byte stream.
//!
//! ## Architecture
//! - [`LineReader`]: blocking `read_line`, owned by the background reader
//! - [`LineWriter`]: `write_line` + `flush`, used by command callers
//! - [`Shutdown`]: idempotent close, shared by both sides; closing must
//!   unblock a reader parked in `read_line`

mod tcp;

use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::error::{ChubbyError, Result};

pub use tcp::{connect, from_stream, TcpShutdown};

/// Reads newline-terminated lines
pub trait LineReader: Send {
    /// Read one line without its terminator. End of stream is an error.
    fn read_line(&mut self) -> Result<String>;
}

/// Writes newline-terminated lines
pub trait LineWriter: Send {
    /// Buffer one line; the newline is appended here
    fn write_line(&mut self, line: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}

/// Closes the underlying connection
pub trait Shutdown: Send + Sync {
    /// Close the connection. Calling it more than once is a no-op.
    fn shutdown(&self) -> Result<()>;
}

impl<R: BufRead + Send> LineReader for R {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let n = BufRead::read_line(self, &mut line)?;
        if n == 0 {
            return Err(ChubbyError::Transport(
                "connection closed by server".to_string(),
            ));
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

impl<W: Write + Send> LineWriter for W {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.write_all(line.as_bytes())?;
        self.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Write::flush(self)?;
        Ok(())
    }
}

/// A connected transport split into its three roles
pub struct Transport {
    pub reader: Box<dyn LineReader>,
    pub writer: Box<dyn LineWriter>,
    pub closer: Arc<dyn Shutdown>,
}

impl Transport {
    pub fn new(
        reader: impl LineReader + 'static,
        writer: impl LineWriter + 'static,
        closer: impl Shutdown + 'static,
    ) -> Self {
        Self {
            reader: Box::new(reader),
            writer: Box::new(writer),
            closer: Arc::new(closer),
        }
    }
}
