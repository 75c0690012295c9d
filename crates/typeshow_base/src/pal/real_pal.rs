use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::{TypeshowError, TypeshowResult, error::ErrorKind};

use super::FilePath;
use super::traits::Pal;

/// Concrete PAL implementation over the process streams and the real filesystem.
///
/// File paths are resolved relative to the configured base directory.
#[derive(Debug)]
pub struct RealPal {
    base_dir: PathBuf,
}

impl RealPal {
    /// Create a new RealPal resolving files against `base_dir`.
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn resolve_path(&self, path: &FilePath) -> PathBuf {
        path.to_path(&self.base_dir)
    }
}

impl Pal for RealPal {
    fn stdin(&self) -> TypeshowResult<Box<dyn BufRead + 'static>> {
        Ok(Box::new(io::stdin().lock()))
    }

    fn stdout(&self) -> TypeshowResult<Box<dyn Write + 'static>> {
        Ok(Box::new(io::stdout()))
    }

    #[instrument(skip(self), fields(path = %path))]
    fn file_exists(&self, path: &FilePath) -> TypeshowResult<bool> {
        let resolved = self.resolve_path(path);
        let exists = resolved.is_file();
        debug!(exists, resolved = %resolved.display(), "checked file existence");
        Ok(exists)
    }

    #[instrument(skip(self), fields(path = %path))]
    fn read_file(&self, path: &FilePath) -> TypeshowResult<Box<dyn Read + 'static>> {
        let resolved = self.resolve_path(path);
        debug!(resolved = %resolved.display(), "opening file for reading");
        let file = fs::File::open(&resolved).map_err(|e| {
            debug!(error = %e, "failed to open file");
            Box::new(TypeshowError::new(ErrorKind::FileError {
                path: resolved,
                source: e,
            }))
        })?;
        Ok(Box::new(file))
    }
}
