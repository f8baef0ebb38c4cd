//! Playlist record

use crate::error::Result;
use crate::parser::Record;
use crate::time::Time;

/// A named playlist as listed by `playlists`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub name: String,
    pub duration: Time,
    pub length: i64,
}

impl Playlist {
    /// Build from a record, reading `<prefix>name`, `<prefix>duration` and
    /// `<prefix>length`
    pub fn from_record(record: &Record, prefix: &str) -> Result<Self> {
        let key = |name: &str| format!("{}{}", prefix, name);

        Ok(Self {
            name: record.string(&key("name"))?.to_string(),
            duration: record.time(&key("duration"))?,
            length: record.integer(&key("length"))?,
        })
    }
}

impl TryFrom<&Record> for Playlist {
    type Error = crate::error::ChubbyError;

    fn try_from(record: &Record) -> Result<Self> {
        Self::from_record(record, "")
    }
}
