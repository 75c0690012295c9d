use std::collections::HashMap;
use std::io::{self, BufRead, Cursor, Read, Write};
use std::sync::{Arc, Mutex};

use crate::TypeshowError;
use crate::TypeshowResult;
use crate::error::ErrorKind;

use super::FilePath;
use super::traits::Pal;

/// Pending standard input of a MockPal.
#[derive(Debug)]
enum MockStdin {
    Bytes(Vec<u8>),
    Failing {
        prefix: Vec<u8>,
        kind: io::ErrorKind,
    },
}

/// In-memory PAL implementation for testing.
///
/// Input is queued with [`MockPal::push_stdin`]. Each call to `stdin()` hands out everything
/// queued so far, so a test queues the input first and then runs the code under test.
/// Output written to `stdout()` is captured and returned by [`MockPal::stdout_contents`].
///
/// ```
/// use typeshow_base::{MockPal, Pal};
///
/// let mock = MockPal::new();
/// mock.write_stdout("hello\n").unwrap();
/// assert_eq!(mock.stdout_contents(), "hello\n");
/// ```
#[derive(Debug, Clone)]
pub struct MockPal {
    stdin: Arc<Mutex<MockStdin>>,
    stdout: Arc<Mutex<Vec<u8>>>,
    files: Arc<Mutex<HashMap<FilePath, Vec<u8>>>>,
}

impl MockPal {
    /// Create a new MockPal with empty input, output and files.
    pub fn new() -> Self {
        Self {
            stdin: Arc::new(Mutex::new(MockStdin::Bytes(Vec::new()))),
            stdout: Arc::new(Mutex::new(Vec::new())),
            files: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Append bytes to the pending standard input.
    pub fn push_stdin(&self, input: impl AsRef<[u8]>) {
        let mut stdin = self.stdin.lock().unwrap();
        match &mut *stdin {
            MockStdin::Bytes(bytes) => bytes.extend_from_slice(input.as_ref()),
            MockStdin::Failing { prefix, .. } => prefix.extend_from_slice(input.as_ref()),
        }
    }

    /// Make the next stdin fail with `kind` once the pending input has been consumed.
    pub fn fail_stdin(&self, kind: io::ErrorKind) {
        let mut stdin = self.stdin.lock().unwrap();
        let prefix = match &mut *stdin {
            MockStdin::Bytes(bytes) => std::mem::take(bytes),
            MockStdin::Failing { prefix, .. } => std::mem::take(prefix),
        };
        *stdin = MockStdin::Failing { prefix, kind };
    }

    /// Everything written to stdout so far, decoded lossily.
    pub fn stdout_contents(&self) -> String {
        String::from_utf8_lossy(&self.stdout.lock().unwrap()).into_owned()
    }

    /// Add a file to the mock storage.
    pub fn add_file(&self, path: FilePath, content: impl Into<Vec<u8>>) {
        self.files.lock().unwrap().insert(path, content.into());
    }
}

impl Default for MockPal {
    fn default() -> Self {
        Self::new()
    }
}

impl Pal for MockPal {
    fn stdin(&self) -> TypeshowResult<Box<dyn BufRead + 'static>> {
        let mut stdin = self.stdin.lock().unwrap();
        let pending = std::mem::replace(&mut *stdin, MockStdin::Bytes(Vec::new()));
        Ok(match pending {
            MockStdin::Bytes(bytes) => Box::new(Cursor::new(bytes)),
            MockStdin::Failing { prefix, kind } => Box::new(FailingReader {
                prefix: Cursor::new(prefix),
                kind,
            }),
        })
    }

    fn stdout(&self) -> TypeshowResult<Box<dyn Write + 'static>> {
        Ok(Box::new(MockStdoutWriter {
            buffer: Arc::clone(&self.stdout),
        }))
    }

    fn file_exists(&self, path: &FilePath) -> TypeshowResult<bool> {
        Ok(self.files.lock().unwrap().contains_key(path))
    }

    fn read_file(&self, path: &FilePath) -> TypeshowResult<Box<dyn Read + 'static>> {
        let files = self.files.lock().unwrap();
        let content = files
            .get(path)
            .ok_or_else(|| {
                Box::new(TypeshowError::new(ErrorKind::FileError {
                    path: path.as_path().to_path_buf(),
                    source: io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("File not found: {}", path),
                    ),
                }))
            })?
            .clone();
        Ok(Box::new(Cursor::new(content)))
    }
}

/// Writer appending straight into the captured stdout buffer.
struct MockStdoutWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for MockStdoutWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reader yielding `prefix` and then failing with `kind` on every further read.
struct FailingReader {
    prefix: Cursor<Vec<u8>>,
    kind: io::ErrorKind,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let count = available.len().min(buf.len());
        buf[..count].copy_from_slice(&available[..count]);
        self.consume(count);
        Ok(count)
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.prefix.position() as usize >= self.prefix.get_ref().len() {
            return Err(io::Error::new(self.kind, "mock stdin failure"));
        }
        self.prefix.fill_buf()
    }

    fn consume(&mut self, amount: usize) {
        self.prefix.consume(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdin_hands_out_pending_input() {
        let pal = MockPal::new();
        pal.push_stdin("first\n");
        pal.push_stdin(b"second\n");

        let mut line = String::new();
        let mut stdin = pal.stdin().unwrap();
        stdin.read_line(&mut line).unwrap();
        assert_eq!(line, "first\n");

        let mut rest = String::new();
        stdin.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "second\n");
    }

    #[test]
    fn test_stdin_is_drained_after_handing_out() {
        let pal = MockPal::new();
        pal.push_stdin("once\n");
        let _ = pal.stdin().unwrap();

        let mut rest = String::new();
        pal.stdin().unwrap().read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "");
    }

    #[test]
    fn test_failing_stdin_yields_prefix_then_error() {
        let pal = MockPal::new();
        pal.push_stdin("abhi");
        pal.fail_stdin(io::ErrorKind::BrokenPipe);

        let mut stdin = pal.stdin().unwrap();
        let mut buf = Vec::new();
        let err = stdin.read_until(b'\n', &mut buf).unwrap_err();
        assert_eq!(buf, b"abhi");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_stdout_is_captured_across_handles() {
        let pal = MockPal::new();
        pal.stdout().unwrap().write_all(b"one\n").unwrap();
        pal.write_stdout("two\n").unwrap();
        assert_eq!(pal.stdout_contents(), "one\ntwo\n");
    }

    #[test]
    fn test_read_file() {
        let pal = MockPal::new();
        pal.add_file(FilePath::from("typeshow.toml"), "read-mode = \"strict\"");

        assert!(pal.file_exists(&FilePath::from("typeshow.toml")).unwrap());
        let content = pal
            .read_file_to_string(&FilePath::from("typeshow.toml"))
            .unwrap();
        assert_eq!(content, "read-mode = \"strict\"");
    }

    #[test]
    fn test_read_file_not_found() {
        let pal = MockPal::new();

        assert!(!pal.file_exists(&FilePath::from("missing.toml")).unwrap());
        assert!(pal.read_file(&FilePath::from("missing.toml")).is_err());
    }
}
