//! Reading `container-v1` archives back into document records.
//!
//! The reader exists for consumers and round-trip tests; the compile path
//! never reads its own output.

use std::io::{Cursor, Read};

use serde::de::DeserializeOwned;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::container::records::{Manifest, FORMAT_VERSION};
use crate::document::Page;

/// Failures while opening or decoding an archive.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("not a valid container archive: {0}")]
    InvalidArchive(#[from] ZipError),
    #[error("archive is missing required entry {0:?}")]
    MissingEntry(String),
    #[error("entry {entry:?} is malformed: {source}")]
    Malformed {
        entry: String,
        source: serde_json::Error,
    },
    #[error("unsupported container format version {0}")]
    UnsupportedVersion(u32),
    #[error("archive i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Decodes the records of one `container-v1` byte buffer.
#[derive(Debug)]
pub struct ContainerReader {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl ContainerReader {
    /// Open an archive from its bytes and check the manifest version.
    pub fn open(bytes: Vec<u8>) -> Result<Self, ReadError> {
        let archive = ZipArchive::new(Cursor::new(bytes))?;
        let mut reader = Self { archive };
        let manifest = reader.manifest()?;
        if manifest.format_version != FORMAT_VERSION {
            return Err(ReadError::UnsupportedVersion(manifest.format_version));
        }
        Ok(reader)
    }

    /// The archive's manifest record.
    pub fn manifest(&mut self) -> Result<Manifest, ReadError> {
        self.read_json("manifest")
    }

    /// The ordered list of page entry names.
    pub fn index(&mut self) -> Result<Vec<String>, ReadError> {
        self.read_json("index")
    }

    /// The page record at position `i`.
    pub fn page(&mut self, i: usize) -> Result<Page, ReadError> {
        self.read_json(&format!("page/{i}"))
    }

    /// Every entry name in the archive, in stored order.
    pub fn entry_names(&self) -> Vec<String> {
        self.archive.file_names().map(String::from).collect()
    }

    fn read_json<T: DeserializeOwned>(&mut self, entry: &str) -> Result<T, ReadError> {
        let mut file = self.archive.by_name(entry).map_err(|err| match err {
            ZipError::FileNotFound => ReadError::MissingEntry(entry.to_string()),
            other => ReadError::InvalidArchive(other),
        })?;
        let mut raw = Vec::new();
        file.read_to_end(&mut raw)?;
        serde_json::from_slice(&raw).map_err(|source| ReadError::Malformed {
            entry: entry.to_string(),
            source,
        })
    }
}
