/* 📖 # How does the console line reader treat failures?

`read_line` is strict: reaching the end of input before a newline, or any I/O failure,
comes back as a `ReadError`.

`read_line_with_mode` lets the caller opt into `ReadMode::BestEffort` instead. The error is
then logged at debug level and dropped, and the caller gets whatever was read before the
failure, possibly nothing. A failed read then looks like an empty or truncated line to the
user, with no error shown. There is no default mode, every caller names the one it wants.
*/

use std::error::Error;
use std::fmt;
use std::io::{self, BufRead};

use serde::Deserialize;
use tracing::{debug, instrument};

/// How read errors are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadMode {
    /// Errors are returned to the caller.
    Strict,
    /// Errors are logged and discarded; the partial content read so far is returned.
    BestEffort,
}

/// A single line read from the console.
///
/// The trailing `\n` is kept in the content when one was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    content: String,
}

impl ConsoleLine {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn has_delimiter(&self) -> bool {
        self.content.ends_with('\n')
    }

    /// The content without its `\n` or `\r\n` line ending.
    pub fn trimmed(&self) -> &str {
        let without_lf = self.content.strip_suffix('\n').unwrap_or(&self.content);
        without_lf.strip_suffix('\r').unwrap_or(without_lf)
    }
}

impl fmt::Display for ConsoleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Failure to read a line from the console.
#[derive(Debug)]
pub enum ReadError {
    /// Input ended before a newline. Whatever was read is kept in `partial`.
    EndOfStream { partial: String },
    /// The underlying stream failed, or delivered bytes that are not UTF-8.
    IoFailure { source: io::Error },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::EndOfStream { partial } if partial.is_empty() => {
                write!(f, "end of input before any line was read")
            }
            ReadError::EndOfStream { partial } => {
                write!(f, "end of input after partial line {:?}", partial)
            }
            ReadError::IoFailure { source } => write!(f, "failed to read line: {}", source),
        }
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReadError::EndOfStream { .. } => None,
            ReadError::IoFailure { source } => Some(source),
        }
    }
}

/// Reads one line, blocking until a newline or the end of input.
pub fn read_line(stream: &mut dyn BufRead) -> Result<ConsoleLine, ReadError> {
    read_line_into(stream, &mut Vec::new())
}

/// Reads one line, handling errors according to `mode`.
#[instrument(skip(stream))]
pub fn read_line_with_mode(
    stream: &mut dyn BufRead,
    mode: ReadMode,
) -> Result<ConsoleLine, ReadError> {
    let mut buffer = Vec::new();
    match (read_line_into(stream, &mut buffer), mode) {
        (Ok(line), _) => Ok(line),
        (Err(error), ReadMode::Strict) => Err(error),
        (Err(error), ReadMode::BestEffort) => {
            debug!(%error, bytes = buffer.len(), "ignoring console read error");
            Ok(ConsoleLine::new(String::from_utf8_lossy(&buffer).into_owned()))
        }
    }
}

fn read_line_into(
    stream: &mut dyn BufRead,
    buffer: &mut Vec<u8>,
) -> Result<ConsoleLine, ReadError> {
    stream
        .read_until(b'\n', buffer)
        .map_err(|source| ReadError::IoFailure { source })?;
    let content = std::str::from_utf8(buffer.as_slice())
        .map_err(|e| ReadError::IoFailure {
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?
        .to_string();
    if !content.ends_with('\n') {
        return Err(ReadError::EndOfStream { partial: content });
    }
    Ok(ConsoleLine { content })
}
