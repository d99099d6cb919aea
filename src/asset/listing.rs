use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{error::ErrorKind, Error, Result};

/// A single pass over the entries of a directory, in no particular order.
#[derive(Debug)]
pub struct Listing {
    directory: PathBuf,
    entries: fs::ReadDir,
}

impl Listing {
    pub(crate) fn new(directory: PathBuf) -> Result<Self> {
        let metadata = fs::metadata(&directory).map_err(|error| Error::io(&directory, error))?;
        if !metadata.is_dir() {
            return Err(ErrorKind::NotADirectory(directory).into());
        }
        let entries = fs::read_dir(&directory).map_err(|error| Error::io(&directory, error))?;
        Ok(Self { directory, entries })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Iterator for Listing {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        Some(
            entry
                .map(|entry| entry.path())
                .map_err(|error: io::Error| Error::io(&self.directory, error)),
        )
    }
}
