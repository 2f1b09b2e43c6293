use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Malformed,
    TooLong,
    MissingNewline,
    Io,
    Handler,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub line: Option<usize>,
}

impl Error {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Malformed,
            message: message.into(),
            line: None,
        }
    }

    pub fn too_long(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::TooLong,
            message: message.into(),
            line: None,
        }
    }

    pub fn missing_newline(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::MissingNewline,
            message: message.into(),
            line: None,
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: message.into(),
            line: None,
        }
    }

    pub fn handler(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Handler,
            message: message.into(),
            line: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Malformed entries reset the parser state and the stream continues;
    /// everything else abandons the stream.
    pub fn is_recoverable(&self) -> bool {
        self.kind == ErrorKind::Malformed
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::io(err.to_string())
    }
}
