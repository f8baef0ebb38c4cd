//! # chubby
//!
//! Client for the chub media player's remote-control protocol:
//! - Line-oriented request/reply over one persistent TCP connection
//! - `key: value, ...` record parser with typed values
//! - Server-pushed events demultiplexed onto a separate, lossy stream
//! - Typed commands (play, seek, list, playlists, status, ...)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Client (typed commands)                      │
//! │          issue_command / events / connect / close            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Session                                 │
//! │     command lock · pending reply slot · event queue          │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │ write line                       │ read lines
//!            ▼                                  ▼
//!   ┌─────────────────┐                ┌─────────────────┐
//!   │   LineWriter    │                │ Reader thread   │
//!   └────────┬────────┘                │ OK / ERR / EVENT│
//!            │                         └────────┬────────┘
//!            └──────────────┬───────────────────┘
//!                           ▼
//!                   ┌───────────────┐
//!                   │  TCP socket   │
//!                   └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod client;
pub mod model;
pub mod parser;
pub mod protocol;
pub mod time;
pub mod transport;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use client::{Client, EventStream};
pub use config::Config;
pub use error::{ChubbyError, Result};
pub use model::{Dir, Entry, Playlist, State, Status, Track};
pub use parser::{parse, Record, SyntaxError, Value};
pub use protocol::{Arg, Event};
pub use time::Time;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of chubby
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
