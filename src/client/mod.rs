//! Client Module
//!
//! Protocol client for the chub media player.
//!
//! ## Architecture
//! ```text
//!   caller threads                      background reader thread
//!  ───────────────                     ─────────────────────────
//!   issue_command ──┐                   read header line
//!     (serialized   │  write line            │
//!      by a mutex)  └────────────► server    ├─ OK    → read block → pending slot
//!                                            ├─ ERR   → Server error → pending slot
//!   wait on reply  ◄──── pending slot ◄──────┤
//!                                            └─ EVENT → read block → event queue
//!   EventStream    ◄──── bounded queue ◄─────  (full queue drops the event)
//! ```
//!
//! Exactly one command may be in flight; the protocol has no request IDs,
//! so replies are matched to callers purely by order.
//!
//! ## Lifecycle
//! `Unconnected --connect--> Connecting --greeting read--> Connected
//! --close / fatal error--> Closed`. A failed handshake falls back to
//! `Unconnected`.
//! A closed client cannot reconnect; create a new one.

mod commands;
mod connection;
mod reader;
mod session;
mod stream;

pub use connection::Client;
pub use stream::{EventStream, RecvTimeoutError};
