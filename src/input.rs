//! Timesheet input.
//!
//! Reads a timesheet file into lines for the engine. Missing and unreadable
//! files are reported as distinct errors.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

/// Reads `path` and returns its lines with trailing whitespace removed.
///
/// # Errors
///
/// - [`PayrollError::FileNotFound`] if the file does not exist
/// - [`PayrollError::FileUnreadable`] for any other read failure, including
///   content that is not UTF-8
pub fn read_input_file<P: AsRef<Path>>(path: P) -> PayrollResult<Vec<String>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => PayrollError::FileNotFound {
            path: path_str.clone(),
        },
        _ => PayrollError::FileUnreadable {
            path: path_str.clone(),
            message: err.to_string(),
        },
    })?;

    let lines = split_lines(&content);
    debug!(path = %path_str, lines = lines.len(), "Read input file");
    Ok(lines)
}

/// Splits text into lines, stripping trailing whitespace (including `\r`).
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(|line| line.trim_end().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_input_file() {
        match read_input_file("file_no_exists.txt").unwrap_err() {
            PayrollError::FileNotFound { path } => assert_eq!(path, "file_no_exists.txt"),
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_input_file(dir.path()),
            Err(PayrollError::FileUnreadable { .. })
        ));
    }

    #[test]
    fn test_non_utf8_file_is_unreadable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();
        assert!(matches!(
            read_input_file(file.path()),
            Err(PayrollError::FileUnreadable { .. })
        ));
    }

    #[test]
    fn test_reads_lines_and_strips_trailing_whitespace() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "RENE=MO10:00-12:00  \r\nASTRID=MO10:00-12:00\n\nKIM=FR10:00-12:00"
        )
        .unwrap();

        let lines = read_input_file(file.path()).unwrap();
        assert_eq!(
            lines,
            vec![
                "RENE=MO10:00-12:00",
                "ASTRID=MO10:00-12:00",
                "",
                "KIM=FR10:00-12:00"
            ]
        );
    }

    #[test]
    fn test_empty_file_has_no_lines() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(read_input_file(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_split_lines_keeps_leading_whitespace() {
        assert_eq!(split_lines("  RENE=MO10:00-12:00\t\n"), vec!["  RENE=MO10:00-12:00"]);
    }
}
