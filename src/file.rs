//! JSON file utilities for match data, configuration and poster output.

use std::fs::File;
use std::io;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_reader, to_writer_pretty};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("cannot access {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
impl FileError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, FileError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| FileError::io(path, err))?;
    from_reader(BufReader::new(file)).map_err(|err| FileError::json(path, err))
}

// JSON-encodes the `value` in pretty-printed form and writes it to a given `path`.
pub fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> Result<(), FileError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|err| FileError::io(path, err))?;
    to_writer_pretty(BufWriter::new(file), value).map_err(|err| FileError::json(path, err))
}

pub trait ReadJsonFile<D> {
    fn read_json_file(path: impl AsRef<Path>) -> Result<D, FileError>;
}

impl<D: DeserializeOwned> ReadJsonFile<D> for D {
    fn read_json_file(path: impl AsRef<Path>) -> Result<D, FileError> {
        read_json(path)
    }
}

pub trait WriteJsonFile<S: Serialize> {
    fn write_json_file(&self, path: impl AsRef<Path>) -> Result<(), FileError>;
}

impl<S: Serialize> WriteJsonFile<S> for S {
    fn write_json_file(&self, path: impl AsRef<Path>) -> Result<(), FileError> {
        write_json(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::env;

    #[test]
    fn write_then_read() {
        let path = env::temp_dir().join(format!("fixture_poster_file_{}.json", std::process::id()));
        let value = BTreeMap::from([("home".to_string(), 2), ("away".to_string(), 1)]);
        value.write_json_file(&path).unwrap();
        let read = BTreeMap::<String, u32>::read_json_file(&path).unwrap();
        assert_eq!(value, read);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file() {
        let err = Vec::<u32>::read_json_file("/nonexistent/matches.json").unwrap_err();
        assert!(matches!(err, FileError::Io { .. }), "{err:?}");
        assert!(err.to_string().starts_with("cannot access /nonexistent/matches.json"));
    }

    #[test]
    fn malformed_file() {
        let path = env::temp_dir().join(format!("fixture_poster_malformed_{}.json", std::process::id()));
        std::fs::write(&path, "[1, 2,").unwrap();
        let err = Vec::<u32>::read_json_file(&path).unwrap_err();
        assert!(matches!(err, FileError::Json { .. }), "{err:?}");
        std::fs::remove_file(&path).unwrap();
    }
}
