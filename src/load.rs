use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use memchr::memchr_iter;

use crate::options::ParseOptions;
use crate::parser::{LineStatus, ParserState, PropertyHandler};
use crate::{Error, Result};

/// What a stream driver saw: entries delivered to the handler, plus the
/// 1-based line numbers of malformed entries skipped in lenient mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub delivered: usize,
    pub skipped_lines: Vec<usize>,
}

fn feed<H: PropertyHandler>(
    state: &mut ParserState,
    line: &str,
    lineno: usize,
    handler: &mut H,
    options: &ParseOptions,
    report: &mut ParseReport,
) -> Result<()> {
    match state.parse_line(line, handler) {
        Ok(LineStatus::Delivered) => {
            report.delivered += 1;
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(err) if err.is_recoverable() && !options.strict => {
            report.skipped_lines.push(lineno);
            Ok(())
        }
        Err(err) => Err(err.with_line(lineno)),
    }
}

/// Parses borrowed text, one physical line per `\n`, stripping a trailing
/// `\r` from each. A final line without a terminating newline is parsed
/// normally here; only the fixed-buffer readers reject it.
///
/// An entry still awaiting continuation when the input ends is dropped
/// without delivery, matching the format: the entry never got its final
/// line.
pub fn parse_str<H: PropertyHandler>(
    input: &str,
    handler: &mut H,
    options: &ParseOptions,
) -> Result<ParseReport> {
    let mut state = ParserState::with_capacity(options.capacity);
    let mut report = ParseReport::default();
    let bytes = input.as_bytes();
    let mut start = 0;
    let mut lineno = 1;

    for idx in memchr_iter(b'\n', bytes) {
        let mut end = idx;
        if end > start && bytes[end - 1] == b'\r' {
            end -= 1;
        }
        feed(&mut state, &input[start..end], lineno, handler, options, &mut report)?;
        start = idx + 1;
        lineno += 1;
    }

    if start < bytes.len() {
        let mut end = bytes.len();
        if bytes[end - 1] == b'\r' {
            end -= 1;
        }
        feed(&mut state, &input[start..end], lineno, handler, options, &mut report)?;
    }

    Ok(report)
}

/// Incremental driver over any buffered reader. Every line must be
/// newline-terminated; an unterminated final line is stream-fatal, as is a
/// read failure or a line over the capacity budget.
pub fn load_reader<R: BufRead, H: PropertyHandler>(
    mut reader: R,
    handler: &mut H,
    options: &ParseOptions,
) -> Result<ParseReport> {
    let mut state = ParserState::with_capacity(options.capacity);
    let mut report = ParseReport::default();
    let mut buf = Vec::new();
    let mut lineno = 1;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }

        if buf.last() != Some(&b'\n') {
            return Err(
                Error::missing_newline("properties line does not end with newline")
                    .with_line(lineno),
            );
        }
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }

        let line = std::str::from_utf8(&buf)
            .map_err(|_| Error::io("properties line is not valid UTF-8").with_line(lineno))?;
        feed(&mut state, line, lineno, handler, options, &mut report)?;
        lineno += 1;
    }

    Ok(report)
}

pub fn load_path<P: AsRef<Path>, H: PropertyHandler>(
    path: P,
    handler: &mut H,
    options: &ParseOptions,
) -> Result<ParseReport> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|_| Error::io(format!("could not open {}", path.display())))?;
    load_reader(BufReader::new(file), handler, options)
}
