//! Player status snapshot
//!
//! Shared by the `status` reply and the `status` event. While the player is
//! stopped the server omits every playlist and track field, so those are
//! only populated for the playing and paused states.

use crate::error::Result;
use crate::parser::Record;
use crate::time::Time;

use super::{Playlist, State, Track};

/// Player, playlist and track snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub state: State,
    pub playlist_position: Option<i64>,
    pub track_position: Option<Time>,
    pub playlist: Option<Playlist>,
    pub track: Option<Track>,
}

impl Status {
    /// A stopped player with nothing loaded
    pub fn stopped() -> Self {
        Self {
            state: State::Stopped,
            playlist_position: None,
            track_position: None,
            playlist: None,
            track: None,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.state == State::Stopped
    }
}

impl TryFrom<&Record> for Status {
    type Error = crate::error::ChubbyError;

    fn try_from(record: &Record) -> Result<Self> {
        let state: State = record.string("state")?.parse()?;
        if state == State::Stopped {
            return Ok(Self::stopped());
        }

        Ok(Self {
            state,
            playlist_position: Some(record.integer("playlist-position")?),
            track_position: Some(record.time("track-position")?),
            playlist: Some(Playlist::from_record(record, "playlist-")?),
            track: Some(Track::from_record(record, "track-")?),
        })
    }
}
