use relative_path::RelativePathBuf;
use std::path::Path;

/// Path relative to the base directory of a PAL.
///
/// The config file is the only file typeshow touches, and it is always looked up
/// relative to the working directory the PAL was created with.
///
/// ```
/// use typeshow_base::FilePath;
///
/// let path = FilePath::from("typeshow.toml");
/// assert_eq!(path.to_string(), "typeshow.toml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePath(RelativePathBuf);

impl FilePath {
    /// Converts to a regular Path, without any base directory.
    pub fn as_path(&self) -> &Path {
        Path::new(self.0.as_str())
    }

    /// Resolves the path against a base directory.
    pub fn to_path(&self, base: &Path) -> std::path::PathBuf {
        self.0.to_path(base)
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> Self {
        Self(RelativePathBuf::from(s))
    }
}

impl From<String> for FilePath {
    fn from(s: String) -> Self {
        Self(RelativePathBuf::from(s))
    }
}

impl std::fmt::Display for FilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_path_from_str() {
        let path = FilePath::from("conf/typeshow.toml");
        assert_eq!(path.as_path(), Path::new("conf/typeshow.toml"));
    }

    #[test]
    fn test_file_path_resolves_against_base() {
        let path = FilePath::from(String::from("typeshow.toml"));
        assert_eq!(
            path.to_path(Path::new("/work")),
            Path::new("/work").join("typeshow.toml")
        );
    }

    #[test]
    fn test_file_path_equality() {
        assert_eq!(FilePath::from("a.toml"), FilePath::from("a.toml"));
        assert_ne!(FilePath::from("a.toml"), FilePath::from("b.toml"));
    }
}
