//! Protocol Module
//!
//! Defines the line-oriented wire protocol spoken with the server.
//!
//! ## Request Format
//! ```text
//! <command-name>( <literal>)*\n
//! ```
//! A literal is a quoted string (`"..."`, backslash escapes the next
//! character), a bare decimal integer, or `true`/`false`.
//!
//! ## Reply Format
//! ```text
//! OK[ <detail>]\n
//! <key>: <value>, <key>: <value>\n      (zero or more record lines)
//! \n                                    (block terminator)
//! ```
//! or a single `ERR <message>\n` line with no body.
//!
//! ## Event Format
//! ```text
//! EVENT <event-name>\n
//! <record lines>\n
//! \n
//! ```
//!
//! ### Events
//! - `status`: player/playlist/track snapshot
//! - `create-playlist`, `delete-playlist`: playlist name only
//!
//! Unknown event names are skipped by the client.

mod codec;
mod command;
mod event;
mod response;

pub use codec::{decode_header, encode_command, read_block, write_command};
pub use command::{names, Arg, Command};
pub use event::{events, Event};
pub use response::Header;
