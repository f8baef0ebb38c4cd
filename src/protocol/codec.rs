//! Protocol codec
//!
//! Encoding of request lines and decoding of reply/event framing.
//!
//! ## Wire Format
//!
//! ### Request
//! ```text
//! play "/music/album" true
//! ```
//!
//! ### Inbound Block
//! ```text
//! ┌──────────────────────┐
//! │ header line          │  OK[ detail] | EVENT <name> | ERR <message>
//! ├──────────────────────┤
//! │ record line          │  zero or more (not after ERR)
//! │ ...                  │
//! ├──────────────────────┤
//! │ empty line           │  terminator (not after ERR)
//! └──────────────────────┘
//! ```

use crate::error::{ChubbyError, Result};
use crate::transport::{LineReader, LineWriter};

use super::{Command, Header};

// =============================================================================
// Request Encoding
// =============================================================================

/// Render a command as one request line
///
/// Fails if the line would break framing (embedded line breaks) or the
/// command name is not a single token.
pub fn encode_command(command: &Command) -> Result<String> {
    let name = command.name();
    if name.is_empty() || name.contains(|c: char| c.is_whitespace()) {
        return Err(ChubbyError::InvalidArgument(format!(
            "invalid command name {:?}",
            name
        )));
    }

    let line = command.to_line();
    if line.contains(['\n', '\r']) {
        return Err(ChubbyError::InvalidArgument(format!(
            "{}: argument contains a line break",
            name
        )));
    }

    Ok(line)
}

/// Write a command line and flush it
pub fn write_command<W: LineWriter + ?Sized>(writer: &mut W, command: &Command) -> Result<()> {
    let line = encode_command(command)?;
    writer.write_line(&line)?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Inbound Decoding
// =============================================================================

/// Classify the first line of an inbound block
pub fn decode_header(line: &str) -> Result<Header> {
    let (token, rest) = match line.split_once(' ') {
        Some((token, rest)) => (token, Some(rest)),
        None => (line, None),
    };

    match (token, rest) {
        (Header::OK, detail) => Ok(Header::Ok(detail.map(str::to_string))),
        (Header::EVENT, Some(name)) if !name.trim().is_empty() => {
            Ok(Header::Event(name.trim().to_string()))
        }
        (Header::EVENT, _) => Err(ChubbyError::Protocol(
            "event header without a name".to_string(),
        )),
        (Header::ERR, Some(message)) => Ok(Header::Err(message.to_string())),
        _ => Err(ChubbyError::Protocol(format!(
            "unexpected header line: {:?}",
            line
        ))),
    }
}

/// Read record lines up to (and consuming) the empty terminator line
pub fn read_block<R: LineReader + ?Sized>(reader: &mut R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        let line = reader.read_line()?;
        if line.is_empty() {
            return Ok(lines);
        }
        lines.push(line);
    }
}
