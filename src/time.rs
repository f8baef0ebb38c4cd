//! Track and playlist durations
//!
//! The server reports every duration and position as whole seconds.
//! `Time` formats them the way a player displays them (`M:SS` or
//! `H:MM:SS`) and parses the same notation back for `seek`.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ChubbyError;

/// A duration in whole seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(u64);

impl Time {
    pub const ZERO: Time = Time(0);

    pub const fn from_secs(secs: u64) -> Self {
        Time(secs)
    }

    pub const fn as_secs(self) -> u64 {
        self.0
    }

    pub fn hour(self) -> u64 {
        self.0 / 3600
    }

    pub fn minute(self) -> u64 {
        self.0 % 3600 / 60
    }

    pub fn second(self) -> u64 {
        self.0 % 60
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hour() > 0 {
            write!(f, "{}:{:02}:{:02}", self.hour(), self.minute(), self.second())
        } else {
            write!(f, "{}:{:02}", self.minute(), self.second())
        }
    }
}

impl FromStr for Time {
    type Err = ChubbyError;

    /// Accepts `S`, `M:S` or `H:M:S`. Minutes and seconds must be below 60.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ChubbyError::InvalidTime {
            input: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() > 3 {
            return Err(invalid("bad format".to_string()));
        }

        let mut total = 0u64;
        for (i, part) in parts.iter().rev().enumerate() {
            let unit = ["seconds", "minutes", "hours"][i];
            let n: u64 = part
                .parse()
                .map_err(|e| invalid(format!("{}: {}", unit, e)))?;
            if i < 2 && n > 59 {
                return Err(invalid(format!("{}: out of range", unit)));
            }
            total = n
                .checked_mul(60u64.pow(i as u32))
                .and_then(|n| total.checked_add(n))
                .ok_or_else(|| invalid(format!("{}: out of range", unit)))?;
        }

        Ok(Time(total))
    }
}

impl TryFrom<i64> for Time {
    type Error = std::num::TryFromIntError;

    fn try_from(secs: i64) -> Result<Self, Self::Error> {
        u64::try_from(secs).map(Time)
    }
}

impl From<Duration> for Time {
    fn from(d: Duration) -> Self {
        Time(d.as_secs())
    }
}

impl From<Time> for Duration {
    fn from(t: Time) -> Self {
        Duration::from_secs(t.0)
    }
}
