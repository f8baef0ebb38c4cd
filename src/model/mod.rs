//! Model Module
//!
//! Typed records built from parsed response lines.
//!
//! ## Responsibilities
//! - Map [`Record`](crate::parser::Record) fields onto domain structs
//! - Fail with a field-level error on missing or mistyped fields
//! - Keep directory and track listings apart as a closed enum

mod entry;
mod playlist;
mod status;

use std::fmt;
use std::str::FromStr;

use crate::error::ChubbyError;

pub use entry::{Dir, Entry, Track};
pub use playlist::Playlist;
pub use status::Status;

/// Player state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Playing,
    Paused,
    Stopped,
}

impl State {
    pub fn as_str(self) -> &'static str {
        match self {
            State::Playing => "playing",
            State::Paused => "paused",
            State::Stopped => "stopped",
        }
    }
}

impl FromStr for State {
    type Err = ChubbyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "playing" => Ok(State::Playing),
            "paused" => Ok(State::Paused),
            "stopped" => Ok(State::Stopped),
            other => Err(ChubbyError::InvalidState(other.to_string())),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
