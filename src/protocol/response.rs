//! Inbound header lines
//!
//! Every reply and event starts with a header line whose first token
//! decides how the rest of the block is read.

/// Classified first line of an inbound block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// `OK[ <detail>]`: a record block follows. The detail is informational.
    Ok(Option<String>),

    /// `EVENT <name>`: a record block follows
    Event(String),

    /// `ERR <message>`: no block follows
    Err(String),
}

impl Header {
    pub const OK: &'static str = "OK";
    pub const EVENT: &'static str = "EVENT";
    pub const ERR: &'static str = "ERR";

    /// True when a record block follows this header
    pub fn has_body(&self) -> bool {
        !matches!(self, Header::Err(_))
    }
}
