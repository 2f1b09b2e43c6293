use memchr::memchr2;

use crate::options::DEFAULT_CAPACITY;
use crate::scan::next_non_blank;
use crate::{Error, Result};

/// Outcome of feeding one physical line to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    /// Blank line or comment; nothing changed.
    Skipped,
    /// The line ended with a continuation backslash; the entry stays open.
    Continued,
    /// A complete logical property was handed to the delivery handler.
    Delivered,
}

/// Receives each completed logical property. The borrowed name and value
/// point into the parser's buffers and are only valid for the duration of
/// the call; returning `Err` aborts the stream.
pub trait PropertyHandler {
    fn property(&mut self, name: &str, value: &str) -> Result<()>;
}

impl<F> PropertyHandler for F
where
    F: FnMut(&str, &str) -> Result<()>,
{
    fn property(&mut self, name: &str, value: &str) -> Result<()> {
        self(name, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    AwaitingName,
    AwaitingContinuation,
}

/// Resumable parse state for one logical stream of `.properties` lines.
///
/// Feed physical lines (newline already stripped) to [`parse_line`]; the
/// state carries a partially assembled entry across continuation lines and
/// resets itself after every delivery or malformed entry.
///
/// [`parse_line`]: ParserState::parse_line
#[derive(Debug)]
pub struct ParserState {
    mode: Mode,
    name: String,
    value: String,
    capacity: usize,
}

impl ParserState {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            mode: Mode::AwaitingName,
            name: String::new(),
            value: String::new(),
            capacity,
        }
    }

    /// Back to the fresh state. Applied internally after every delivery and
    /// after every malformed line, so one bad entry never corrupts the next.
    pub fn reset(&mut self) {
        self.mode = Mode::AwaitingName;
        self.name.clear();
        self.value.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.mode == Mode::AwaitingName && self.name.is_empty() && self.value.is_empty()
    }

    fn used(&self) -> usize {
        self.name.len() + self.value.len()
    }

    /// Consumes one physical line. At most one handler invocation happens
    /// before this returns.
    ///
    /// A `Malformed` error is recoverable: the state has been reset and the
    /// next well-formed entry parses independently. A `TooLong` error is
    /// fatal to the stream and leaves the state inconsistent on purpose; no
    /// partial entry is flushed.
    pub fn parse_line<H: PropertyHandler>(
        &mut self,
        line: &str,
        handler: &mut H,
    ) -> Result<LineStatus> {
        if line.len() >= self.capacity - self.used() {
            return Err(Error::too_long(format!(
                "line length {} too long for parser state",
                line.len() + self.used(),
            )));
        }

        let bytes = line.as_bytes();
        if bytes.is_empty() {
            return Ok(LineStatus::Skipped);
        }
        let last = bytes.len() - 1;

        let value_start = match self.mode {
            Mode::AwaitingName => {
                let cursor = match next_non_blank(bytes, 0, last) {
                    Some(cursor) => cursor,
                    None => return Ok(LineStatus::Skipped),
                };
                if bytes[cursor] == b'!' || bytes[cursor] == b'#' {
                    return Ok(LineStatus::Skipped);
                }

                let delim = match memchr2(b':', b'=', &bytes[cursor..]) {
                    Some(offset) => cursor + offset,
                    None => {
                        self.reset();
                        return Err(Error::malformed(
                            "property name has no ':' or '=' delimiter",
                        ));
                    }
                };
                let name = line[cursor..delim].trim_end_matches([' ', '\t']);
                if name.is_empty() {
                    self.reset();
                    return Err(Error::malformed("empty property name"));
                }
                self.name.push_str(name);

                match next_non_blank(bytes, delim + 1, last) {
                    Some(value_start) => value_start,
                    // Nothing after the delimiter: the value is empty and the
                    // entry completes now, continuation is not an option.
                    None => return self.deliver(handler),
                }
            }
            Mode::AwaitingContinuation => {
                match next_non_blank(bytes, 0, last) {
                    Some(pos) if bytes[pos] != b'!' && bytes[pos] != b'#' => pos,
                    // Comment detection is applied here too, same as at entry
                    // start; the line vanishes and the entry stays open.
                    _ => return Ok(LineStatus::Skipped),
                }
            }
        };

        if bytes[last] == b'\\' {
            self.value.push_str(&line[value_start..last]);
            self.mode = Mode::AwaitingContinuation;
            Ok(LineStatus::Continued)
        } else {
            self.value.push_str(&line[value_start..]);
            self.deliver(handler)
        }
    }

    fn deliver<H: PropertyHandler>(&mut self, handler: &mut H) -> Result<LineStatus> {
        let result = handler.property(&self.name, &self.value);
        // The logical entry is complete whatever the handler says.
        self.reset();
        result.map(|()| LineStatus::Delivered)
    }
}

impl Default for ParserState {
    fn default() -> Self {
        Self::new()
    }
}
