use std::fs;
use std::io;
use std::path::PathBuf;

use log::{debug, info};
use thiserror::Error;

use crate::snapshot::Snapshot;

/// Errors from reading or writing the board file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not access board file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("board file {} is not a flat JSON object: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not serialize the board: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

/// Handle to the board file on disk.
///
/// The whole board is small, so every save rewrites the full file; there
/// is no partial update.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Opens the board file, creating it on first run.
    ///
    /// A missing file is written out with every lane set to the empty
    /// string before returning, so a first launch and a relaunch look
    /// the same to the caller. A file that exists but does not parse is
    /// an error rather than a reset; overwriting it here would lose its
    /// contents on the next save.
    pub fn open(path: PathBuf) -> Result<(Self, Snapshot), StorageError> {
        let storage = Self { path };
        let snapshot = match fs::read_to_string(&storage.path) {
            Ok(content) => {
                let snapshot =
                    serde_json::from_str(&content).map_err(|source| StorageError::Malformed {
                        path: storage.path.clone(),
                        source,
                    })?;
                debug!("loaded board from {}", storage.path.display());
                snapshot
            }
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                let snapshot = Snapshot::default();
                storage.save(&snapshot)?;
                info!("created board file {}", storage.path.display());
                snapshot
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: storage.path.clone(),
                    source,
                });
            }
        };
        Ok((storage, snapshot))
    }

    /// Overwrites the board file with `snapshot`.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let mut content = serde_json::to_string_pretty(snapshot)
            .map_err(|source| StorageError::Serialize { source })?;
        content.push('\n');
        fs::write(&self.path, content).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("saved board to {}", self.path.display());
        Ok(())
    }
}
