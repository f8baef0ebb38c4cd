//! Server-pushed events
//!
//! Event blocks are decoded through a name → constructor table. Names that
//! are not in the table are reported as `None` so newer servers can add
//! events without breaking older clients.

use crate::error::Result;
use crate::model::Status;
use crate::parser::{parse, Record};

/// Event names sent by the server
pub mod events {
    pub const STATUS: &str = "status";
    pub const CREATE_PLAYLIST: &str = "create-playlist";
    pub const DELETE_PLAYLIST: &str = "delete-playlist";
}

/// A decoded event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Player state changed
    Status(Status),

    CreatePlaylist { name: String },

    DeletePlaylist { name: String },
}

type Constructor = fn(&Record) -> Result<Event>;

const DISPATCH: &[(&str, Constructor)] = &[
    (events::STATUS, status),
    (events::CREATE_PLAYLIST, create_playlist),
    (events::DELETE_PLAYLIST, delete_playlist),
];

impl Event {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            Event::Status(_) => events::STATUS,
            Event::CreatePlaylist { .. } => events::CREATE_PLAYLIST,
            Event::DeletePlaylist { .. } => events::DELETE_PLAYLIST,
        }
    }

    /// Decode the body of an `EVENT <name>` block
    ///
    /// All record lines are merged into one record before mapping, later
    /// keys overriding earlier ones. Returns `Ok(None)` for unknown names.
    pub fn decode(name: &str, lines: &[String]) -> Result<Option<Event>> {
        let Some((_, construct)) = DISPATCH.iter().find(|(n, _)| *n == name) else {
            return Ok(None);
        };

        let mut record = Record::new();
        for line in lines {
            record.merge(parse(line)?);
        }

        construct(&record).map(Some)
    }
}

fn status(record: &Record) -> Result<Event> {
    Status::try_from(record).map(Event::Status)
}

fn create_playlist(record: &Record) -> Result<Event> {
    Ok(Event::CreatePlaylist {
        name: record.string("name")?.to_string(),
    })
}

fn delete_playlist(record: &Record) -> Result<Event> {
    Ok(Event::DeletePlaylist {
        name: record.string("name")?.to_string(),
    })
}
