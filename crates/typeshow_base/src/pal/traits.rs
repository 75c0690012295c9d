use std::io::{BufRead, Read, Write};
use std::sync::Arc;

use crate::TypeshowResult;
use crate::error::ErrorKind;

use super::file_path::FilePath;

/// Platform Abstraction Layer (PAL) trait over the console streams and the filesystem.
///
/// Two implementations are provided:
/// - `RealPal`: process stdin/stdout and `std::fs`
/// - `MockPal`: in-memory input, captured output and files, for testing
pub trait Pal: std::fmt::Debug + Send + Sync + 'static {
    /// Open standard input for line-oriented reading.
    fn stdin(&self) -> TypeshowResult<Box<dyn BufRead + 'static>>;

    /// Open standard output.
    fn stdout(&self) -> TypeshowResult<Box<dyn Write + 'static>>;

    /// Check if a file exists at the given path.
    fn file_exists(&self, path: &FilePath) -> TypeshowResult<bool>;

    /// Open a file for reading.
    fn read_file(&self, path: &FilePath) -> TypeshowResult<Box<dyn Read + 'static>>;

    /// Read entire file contents as a UTF-8 string.
    fn read_file_to_string(&self, path: &FilePath) -> TypeshowResult<String> {
        let mut reader = self.read_file(path)?;
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents).map_err(|e| {
            Box::new(crate::TypeshowError::new(ErrorKind::FileError {
                path: path.as_path().to_path_buf(),
                source: e,
            }))
        })?;
        String::from_utf8(contents).map_err(|_e| crate::err!("File is not valid UTF-8: {}", path))
    }

    /// Write a string to standard output and flush it.
    fn write_stdout(&self, text: &str) -> TypeshowResult<()> {
        let mut stdout = self.stdout()?;
        stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| {
                Box::new(crate::TypeshowError::new(ErrorKind::Console {
                    stream: "stdout",
                    source: e,
                }))
            })
    }
}

/// Handle to a PAL implementation, enabling shared ownership.
///
/// ```
/// use typeshow_base::{MockPal, PalHandle};
///
/// let pal = PalHandle::new(MockPal::new());
/// let pal_clone = pal.clone();
/// ```
#[derive(Debug, Clone)]
pub struct PalHandle(Arc<dyn Pal>);

impl PalHandle {
    pub fn new(pal: impl Pal + 'static) -> Self {
        Self(Arc::new(pal))
    }
}

impl std::ops::Deref for PalHandle {
    type Target = dyn Pal;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
