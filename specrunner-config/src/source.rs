// Copyright (c) The specrunner Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Access to the hosting application's configuration store.

use crate::errors::ConfigLoadError;
use camino::{Utf8Path, Utf8PathBuf};
use std::{fs, io};
use tracing::debug;

/// A read-only store of named configuration sections, as kept by the hosting
/// application.
///
/// The rest of the loading pipeline works on in-memory documents, so any
/// store implementation -- on disk, embedded, or a test double -- plugs in
/// here.
pub trait ConfigStore {
    /// Returns the raw document stored under `section`, or `None` if the
    /// store has no entry for it. A missing entry is the expected common
    /// case; only a present-but-unreadable entry is an error.
    fn read(&self, section: &str) -> Result<Option<String>, ConfigLoadError>;
}

/// A [`ConfigStore`] backed by a directory of `<section>.xml` documents.
#[derive(Clone, Debug)]
pub struct FileConfigStore {
    dir: Utf8PathBuf,
}

impl FileConfigStore {
    /// Creates a store rooted at `dir`.
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store reads from.
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    fn section_path(&self, section: &str) -> Utf8PathBuf {
        self.dir.join(format!("{section}.xml"))
    }
}

impl ConfigStore for FileConfigStore {
    fn read(&self, section: &str) -> Result<Option<String>, ConfigLoadError> {
        let path = self.section_path(section);
        match fs::read_to_string(&path) {
            Ok(doc) => Ok(Some(doc)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!("no stored configuration at `{path}`");
                Ok(None)
            }
            Err(error) => Err(ConfigLoadError::StoreRead {
                section: section.to_owned(),
                path,
                error,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino_tempfile::tempdir;

    #[test]
    fn missing_entry_is_not_an_error() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::new(dir.path());
        assert_eq!(store.read("specRunner").unwrap(), None);
    }

    #[test]
    fn stored_document_is_returned_verbatim() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("specRunner.xml"), "<specRunner/>").unwrap();

        let store = FileConfigStore::new(dir.path());
        assert_eq!(
            store.read("specRunner").unwrap().as_deref(),
            Some("<specRunner/>")
        );
    }

    #[test]
    fn unreadable_entry_is_a_store_error() {
        let dir = tempdir().unwrap();
        // A directory where the document should be: present but unreadable.
        std::fs::create_dir(dir.path().join("specRunner.xml")).unwrap();

        let store = FileConfigStore::new(dir.path());
        let err = store.read("specRunner").unwrap_err();
        assert!(
            matches!(&err, crate::errors::ConfigLoadError::StoreRead { section, .. } if section == "specRunner"),
            "{err:?}"
        );
    }
}
