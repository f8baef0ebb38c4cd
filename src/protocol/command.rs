//! Command definitions
//!
//! A command is a name followed by literal arguments, sent as one line.

use std::fmt::{self, Write};

use crate::parser::write_quoted;
use crate::time::Time;

/// Command names understood by the server
pub mod names {
    pub const CREATE_PLAYLIST: &str = "create-playlist";
    pub const DELETE_PLAYLIST: &str = "delete-playlist";
    pub const EVENTS: &str = "events";
    pub const KILL: &str = "kill";
    pub const LIST: &str = "list";
    pub const NEXT: &str = "next";
    pub const PAUSE: &str = "pause";
    pub const PING: &str = "ping";
    pub const PLAY: &str = "play";
    pub const PLAYLISTS: &str = "playlists";
    pub const PREV: &str = "prev";
    pub const RENAME_PLAYLIST: &str = "rename-playlist";
    pub const SEEK: &str = "seek";
    pub const STATUS: &str = "status";
    pub const STOP: &str = "stop";
}

/// A command argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Sent as a quoted string
    Str(String),

    /// Sent as a bare decimal, with a leading `-` when negative
    Int(i64),

    /// Sent as `true` / `false`
    Bool(bool),

    /// Sent as a quoted `M:SS` / `H:MM:SS` string
    Time(Time),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => write_quoted(f, s),
            Arg::Int(n) => write!(f, "{}", n),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::Time(t) => write_quoted(f, &t.to_string()),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Arg::Int(n)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<Time> for Arg {
    fn from(t: Time) -> Self {
        Arg::Time(t)
    }
}

/// A command ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    args: Vec<Arg>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_args(name: impl Into<String>, args: &[Arg]) -> Self {
        Self {
            name: name.into(),
            args: args.to_vec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Render the request line (without the trailing newline)
    pub fn to_line(&self) -> String {
        let mut line = self.name.clone();
        for arg in &self.args {
            // Writing into a String cannot fail
            let _ = write!(line, " {}", arg);
        }
        line
    }
}
