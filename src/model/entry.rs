//! Directory listing entries
//!
//! `list` replies mix directories and tracks. A line with `type: "dir"` is
//! a directory; anything else is read as a track.

use crate::error::{ChubbyError, Result};
use crate::parser::Record;
use crate::time::Time;

/// A directory in the server's library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dir {
    pub path: String,
    pub name: String,
}

/// An audio track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub path: String,
    pub artist: String,
    pub album: String,
    pub title: String,
    pub number: i64,
    /// Release year, when the server knows it
    pub year: Option<i64>,
    pub length: Time,
}

impl Track {
    /// Build from a record whose keys carry `prefix` (`""` for listings,
    /// `"track-"` for status snapshots)
    pub fn from_record(record: &Record, prefix: &str) -> Result<Self> {
        let key = |name: &str| format!("{}{}", prefix, name);

        Ok(Self {
            path: record.string(&key("path"))?.to_string(),
            artist: record.string(&key("artist"))?.to_string(),
            album: record.string(&key("album"))?.to_string(),
            title: record.string(&key("title"))?.to_string(),
            number: record.integer(&key("number"))?,
            year: record.opt_integer(&key("year"))?,
            length: record.time(&key("length"))?,
        })
    }
}

/// One line of a `list` reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Dir(Dir),
    Track(Track),
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Dir(_))
    }

    pub fn as_dir(&self) -> Option<&Dir> {
        match self {
            Entry::Dir(dir) => Some(dir),
            Entry::Track(_) => None,
        }
    }

    pub fn as_track(&self) -> Option<&Track> {
        match self {
            Entry::Track(track) => Some(track),
            Entry::Dir(_) => None,
        }
    }

    /// Path of the directory or track
    pub fn path(&self) -> &str {
        match self {
            Entry::Dir(dir) => &dir.path,
            Entry::Track(track) => &track.path,
        }
    }
}

impl TryFrom<&Record> for Entry {
    type Error = ChubbyError;

    fn try_from(record: &Record) -> Result<Self> {
        if record.opt_string("type")? == Some("dir") {
            Ok(Entry::Dir(Dir {
                path: record.string("path")?.to_string(),
                name: record.string("name")?.to_string(),
            }))
        } else {
            Track::from_record(record, "").map(Entry::Track)
        }
    }
}
