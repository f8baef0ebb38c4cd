//! Recursive-descent record parser
//!
//! The parser state is a single byte cursor over the input line. Every
//! primitive either advances the cursor past what it accepted or fails
//! with the cursor left on the offending byte.

use super::error::SyntaxError;
use super::value::{Record, Value};

/// Parse one response line into a record
pub fn parse(line: &str) -> Result<Record, SyntaxError> {
    Parser::new(line).parse()
}

/// Cursor-based parser over a single line
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Parse the whole input as a record
    pub fn parse(mut self) -> Result<Record, SyntaxError> {
        let mut record = Record::new();
        if self.eol() {
            return Ok(record);
        }

        loop {
            let (key, value) = self.pair()?;
            record.insert(key, value);

            if self.eol() {
                return Ok(record);
            }
            self.consume(",")?;
        }
    }

    fn pair(&mut self) -> Result<(String, Value), SyntaxError> {
        self.skip_spaces();
        let key = self.key()?;
        self.skip_spaces();
        self.consume(":")?;
        self.skip_spaces();
        let value = self.value()?;
        self.skip_spaces();

        Ok((key, value))
    }

    // =========================================================================
    // Primitives
    // =========================================================================

    fn key(&mut self) -> Result<String, SyntaxError> {
        let rest = self.rest();
        let mut chars = rest.char_indices();

        match chars.next() {
            Some((_, c)) if c.is_alphabetic() => {}
            _ => return Err(SyntaxError::new(self.pos, "identifier expected")),
        }

        let end = chars
            .find(|&(_, c)| !(c.is_alphanumeric() || c == '_' || c == '-'))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        let key = rest[..end].to_string();
        self.pos += end;
        Ok(key)
    }

    fn value(&mut self) -> Result<Value, SyntaxError> {
        match self.rest().chars().next() {
            Some('"') => self.string().map(Value::String),
            Some(c) if c == '-' || c.is_ascii_digit() => self.integer().map(Value::Integer),
            Some('t') | Some('f') => self.boolean().map(Value::Boolean),
            _ => Err(SyntaxError::new(self.pos, "value expected")),
        }
    }

    fn string(&mut self) -> Result<String, SyntaxError> {
        self.consume("\"")?;

        let mut buf = String::new();
        let mut chars = self.rest().char_indices();
        loop {
            match chars.next() {
                Some((i, '"')) => {
                    self.pos += i + 1;
                    return Ok(buf);
                }
                Some((_, '\\')) => match chars.next() {
                    Some((_, c)) => buf.push(c),
                    None => break,
                },
                Some((_, c)) => buf.push(c),
                None => break,
            }
        }

        Err(SyntaxError::new(self.input.len(), "unterminated string"))
    }

    fn integer(&mut self) -> Result<i64, SyntaxError> {
        let rest = self.rest();
        let sign = usize::from(rest.starts_with('-'));
        let digits = rest[sign..]
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len() - sign);
        if digits == 0 {
            return Err(SyntaxError::new(self.pos + sign, "integer expected"));
        }

        let len = sign + digits;
        let n = rest[..len]
            .parse::<i64>()
            .map_err(|_| SyntaxError::new(self.pos, "integer out of range"))?;
        self.pos += len;
        Ok(n)
    }

    fn boolean(&mut self) -> Result<bool, SyntaxError> {
        let rest = self.rest();
        let (value, len) = if rest.starts_with("true") {
            (true, 4)
        } else if rest.starts_with("false") {
            (false, 5)
        } else {
            return Err(SyntaxError::new(self.pos, "boolean expected"));
        };

        self.pos += len;
        Ok(value)
    }

    fn consume(&mut self, literal: &str) -> Result<(), SyntaxError> {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        } else if self.eol() {
            Err(SyntaxError::new(
                self.pos,
                format!("unexpected end of line, '{}' expected", literal),
            ))
        } else {
            Err(SyntaxError::new(self.pos, format!("'{}' expected", literal)))
        }
    }

    fn skip_spaces(&mut self) {
        let n = self.rest().bytes().take_while(|&b| b == b' ').count();
        self.pos += n;
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn eol(&self) -> bool {
        self.pos >= self.input.len()
    }
}
