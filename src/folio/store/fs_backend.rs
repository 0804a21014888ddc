use super::backend::StorageBackend;
use super::table::PageTable;
use super::StoreInfo;
use crate::error::{FolioError, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const TABLE_FILE: &str = "pages.json";

/// Keeps the page table as one JSON file inside a data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn table_path(&self) -> PathBuf {
        self.root.join(TABLE_FILE)
    }

    fn write_atomic(&self, table: &PageTable) -> std::result::Result<(), String> {
        let content = table.to_json().map_err(|e| e.to_string())?;
        let tmp_path = self.root.join(format!(".pages-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(|e| e.to_string())?;
        if let Err(e) = fs::rename(&tmp_path, self.table_path()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.to_string());
        }
        Ok(())
    }
}

fn unavailable(root: &Path, what: &str, err: impl fmt::Display) -> FolioError {
    FolioError::StorageUnavailable(format!("{} {}: {}", what, root.display(), err))
}

impl StorageBackend for FsBackend {
    fn open(&self) -> Result<StoreInfo> {
        if !self.root.is_dir() {
            fs::create_dir_all(&self.root)
                .map_err(|e| unavailable(&self.root, "cannot create data directory", e))?;
        }

        let table_path = self.table_path();
        let version = if table_path.exists() {
            self.load_table()?.version
        } else {
            let table = PageTable::default();
            self.write_atomic(&table)
                .map_err(|e| unavailable(&self.root, "cannot initialize page table in", e))?;
            debug!(path = %table_path.display(), "created empty page table");
            table.version
        };

        Ok(StoreInfo {
            location: table_path,
            version,
        })
    }

    fn load_table(&self) -> Result<PageTable> {
        let path = self.table_path();
        if !path.exists() {
            return Ok(PageTable::default());
        }
        let text = fs::read_to_string(&path).map_err(|e| {
            FolioError::StorageUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        PageTable::from_json(&text)
    }

    fn save_table(&self, table: &PageTable) -> Result<()> {
        self.write_atomic(table).map_err(FolioError::Write)
    }
}
