use crate::api::FolioApi;
use crate::config::FolioConfig;
use crate::error::{FolioError, Result};
use crate::store::fs_backend::FsBackend;
use crate::store::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct FolioContext {
    pub api: FolioApi<FileStore>,
    pub config: FolioConfig,
}

/// Picks the data directory: an explicit path wins, otherwise the platform data dir.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    ProjectDirs::from("com", "folio", "folio")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            FolioError::StorageUnavailable("could not determine a data directory".to_string())
        })
}

/// Builds the store handle and API for a data directory.
///
/// Nothing is opened here; the store opens itself on first use.
pub fn initialize(data_dir: PathBuf, config: FolioConfig) -> FolioContext {
    let store = FileStore::new(FsBackend::new(data_dir.clone()));
    let api = FolioApi::new(store, data_dir);
    FolioContext { api, config }
}
