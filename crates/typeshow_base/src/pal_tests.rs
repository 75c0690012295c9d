/* 📖 # PAL behaviour shared by both implementations

These tests run the default trait methods against MockPal, and the file
operations against RealPal in a temporary directory.
*/

#[cfg(test)]
mod pal_trait_tests {
    use crate::error::ErrorKind;
    use crate::pal::{FilePath, MockPal, Pal, PalHandle, RealPal};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_pal_handle_deref() {
        let mock = MockPal::new();
        let handle = PalHandle::new(mock.clone());

        handle.write_stdout("via handle\n").unwrap();
        assert_eq!(mock.stdout_contents(), "via handle\n");
    }

    #[test]
    fn test_read_file_to_string_invalid_utf8() {
        let mock = MockPal::new();
        mock.add_file(FilePath::from("bad.toml"), vec![0xFF_u8, 0xFE]);

        let err = mock
            .read_file_to_string(&FilePath::from("bad.toml"))
            .unwrap_err();
        assert_eq!(err.to_string(), "File is not valid UTF-8: bad.toml");
    }

    #[test]
    fn test_real_pal_reads_file_relative_to_base() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("typeshow.toml"), "prompt = \"Name?\"").unwrap();

        let pal = RealPal::new(temp_dir.path().to_path_buf());
        let path = FilePath::from("typeshow.toml");
        assert!(pal.file_exists(&path).unwrap());
        assert_eq!(pal.read_file_to_string(&path).unwrap(), "prompt = \"Name?\"");
    }

    #[test]
    fn test_real_pal_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let pal = RealPal::new(temp_dir.path().to_path_buf());
        let path = FilePath::from("typeshow-definitely-missing.toml");

        assert!(!pal.file_exists(&path).unwrap());
        let err = pal.read_file(&path).err().expect("missing file must fail");
        assert!(matches!(err.kind(), ErrorKind::FileError { .. }));
    }
}
