//! Typed commands
//!
//! One method per server command, mapping reply lines onto model types.

use crate::error::Result;
use crate::model::{Entry, Playlist, Status};
use crate::parser::{parse, Record};
use crate::protocol::{names, Arg};
use crate::time::Time;

use super::Client;

impl Client {
    pub fn create_playlist(&self, name: &str) -> Result<()> {
        self.simple(names::CREATE_PLAYLIST, &[name.into()])
    }

    pub fn delete_playlist(&self, name: &str) -> Result<()> {
        self.simple(names::DELETE_PLAYLIST, &[name.into()])
    }

    pub fn rename_playlist(&self, from: &str, to: &str) -> Result<()> {
        self.simple(names::RENAME_PLAYLIST, &[from.into(), to.into()])
    }

    /// Ask the server process to exit
    pub fn kill(&self) -> Result<()> {
        self.simple(names::KILL, &[])
    }

    /// List directories and tracks under `path`
    pub fn list(&self, path: &str) -> Result<Vec<Entry>> {
        let lines = self.issue_command(names::LIST, &[path.into()])?;
        parse_records(&lines)?
            .iter()
            .map(Entry::try_from)
            .collect()
    }

    pub fn next(&self) -> Result<()> {
        self.simple(names::NEXT, &[])
    }

    /// Toggle pause
    pub fn pause(&self) -> Result<()> {
        self.simple(names::PAUSE, &[])
    }

    pub fn ping(&self) -> Result<()> {
        self.simple(names::PING, &[])
    }

    /// Start playing a file or directory
    pub fn play(&self, path: &str) -> Result<()> {
        self.simple(names::PLAY, &[path.into()])
    }

    pub fn playlists(&self) -> Result<Vec<Playlist>> {
        let lines = self.issue_command(names::PLAYLISTS, &[])?;
        parse_records(&lines)?
            .iter()
            .map(Playlist::try_from)
            .collect()
    }

    pub fn prev(&self) -> Result<()> {
        self.simple(names::PREV, &[])
    }

    /// Seek to `time`, or by `time` from the current position if `relative`
    pub fn seek(&self, time: Time, relative: bool) -> Result<()> {
        self.simple(names::SEEK, &[Arg::Time(time), Arg::Bool(relative)])
    }

    /// Current player status. Multi-line replies are merged.
    pub fn status(&self) -> Result<Status> {
        let lines = self.issue_command(names::STATUS, &[])?;
        let mut record = Record::new();
        for r in parse_records(&lines)? {
            record.merge(r);
        }
        Status::try_from(&record)
    }

    pub fn stop(&self) -> Result<()> {
        self.simple(names::STOP, &[])
    }

    /// Run a command whose reply body is not needed
    fn simple(&self, name: &str, args: &[Arg]) -> Result<()> {
        self.issue_command(name, args)?;
        Ok(())
    }
}

fn parse_records(lines: &[String]) -> Result<Vec<Record>> {
    lines
        .iter()
        .map(|line| parse(line).map_err(Into::into))
        .collect()
}
