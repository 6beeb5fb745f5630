//! `.env` file lookup and parsing.
//!
//! Responsibilities:
//! - Pick the first existing file among ordered candidate paths.
//! - Hand file contents to the dotenvy parser and collect ordered pairs.
//!
//! Invariants:
//! - Non-existent candidates are skipped; the first existing one is used even
//!   if it is empty.
//! - An existing but unreadable candidate is an error, never skipped.
//! - Contents that are not UTF-8 are a parse error at the first invalid byte.
//! - Parse errors carry only a byte position, never line contents.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LoaderError;

/// Read the first existing candidate, returning its path and contents.
pub(crate) fn read_first_existing<P: AsRef<Path>>(
    candidates: &[P],
) -> Result<(PathBuf, String), LoaderError> {
    for candidate in candidates {
        let path = candidate.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "Skipping missing .env candidate");
            continue;
        }

        let bytes = fs::read(path).map_err(|e| LoaderError::UnreadableFile {
            path: path.to_path_buf(),
            kind: e.kind(),
        })?;
        let contents = String::from_utf8(bytes).map_err(|e| LoaderError::Parse {
            origin: path.display().to_string(),
            error_index: e.utf8_error().valid_up_to(),
        })?;
        debug!(path = %path.display(), bytes = contents.len(), "Using .env file");
        return Ok((path.to_path_buf(), contents));
    }

    Err(LoaderError::EnvFileNotFound {
        candidates: candidates
            .iter()
            .map(|candidate| candidate.as_ref().to_path_buf())
            .collect(),
    })
}

/// Parse `.env` text into ordered key/value pairs.
///
/// `origin` names the source in error messages.
pub(crate) fn parse_contents(
    origin: &str,
    contents: &str,
) -> Result<Vec<(String, String)>, LoaderError> {
    dotenvy::from_read_iter(contents.as_bytes())
        .map(|item| item.map_err(|e| map_dotenv_error(origin, e)))
        .collect()
}

fn map_dotenv_error(origin: &str, error: dotenvy::Error) -> LoaderError {
    match error {
        dotenvy::Error::LineParse(_, error_index) => LoaderError::Parse {
            origin: origin.to_string(),
            error_index,
        },
        dotenvy::Error::Io(io_err) => LoaderError::UnreadableFile {
            path: PathBuf::from(origin),
            kind: io_err.kind(),
        },
        _ => LoaderError::Parse {
            origin: origin.to_string(),
            error_index: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_contents_keeps_order() {
        let pairs = parse_contents("test", "B=2\n# comment\nA=1\nQUOTED=\"x y\"\n").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("B".to_string(), "2".to_string()),
                ("A".to_string(), "1".to_string()),
                ("QUOTED".to_string(), "x y".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_error_hides_line_contents() {
        let secret = "supersecret_token_12345";
        let err = parse_contents(
            "test.env",
            &format!("PASSWORD={}\nINVALID_LINE_WITHOUT_EQUALS", secret),
        )
        .unwrap_err();

        assert!(matches!(err, LoaderError::Parse { .. }));
        let message = err.to_string();
        assert!(!message.contains(secret), "{}", message);
        assert!(!message.contains("INVALID_LINE"), "{}", message);
        assert!(message.contains("test.env"), "{}", message);
    }

    #[test]
    fn test_read_first_existing_skips_missing() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real.env");
        fs::write(&real, "A=1\n").unwrap();

        let (path, contents) =
            read_first_existing(&[temp_dir.path().join("missing.env"), real.clone()]).unwrap();
        assert_eq!(path, real);
        assert_eq!(contents, "A=1\n");
    }

    #[test]
    fn test_read_first_existing_uses_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let empty = temp_dir.path().join("empty.env");
        let full = temp_dir.path().join("full.env");
        fs::write(&empty, "").unwrap();
        fs::write(&full, "A=1\n").unwrap();

        let (path, contents) = read_first_existing(&[&empty, &full]).unwrap();
        assert_eq!(path, empty);
        assert!(contents.is_empty());
    }

    #[test]
    fn test_unreadable_candidate_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let full = temp_dir.path().join("full.env");
        fs::write(&full, "A=1\n").unwrap();

        // A directory exists but cannot be read as a file.
        let err = read_first_existing(&[temp_dir.path(), full.as_path()]).unwrap_err();
        assert!(matches!(err, LoaderError::UnreadableFile { ref path, .. } if path == temp_dir.path()));
    }

    #[test]
    fn test_non_utf8_file_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let latin1 = temp_dir.path().join("latin1.env");
        fs::write(&latin1, b"NAME=caf\xe9\n").unwrap();

        let err = read_first_existing(&[&latin1]).unwrap_err();
        match &err {
            LoaderError::Parse {
                origin,
                error_index,
            } => {
                assert_eq!(origin, &latin1.display().to_string());
                assert_eq!(*error_index, 8);
            }
            other => panic!("expected Parse, got {:?}", other),
        }
        assert!(!err.to_string().contains("not readable"));
    }

    #[test]
    fn test_no_candidate_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = [temp_dir.path().join("a.env"), temp_dir.path().join("b.env")];
        match read_first_existing(&missing) {
            Err(LoaderError::EnvFileNotFound { candidates }) => {
                assert_eq!(candidates, missing.to_vec());
            }
            other => panic!("expected EnvFileNotFound, got {:?}", other),
        }
    }
}
