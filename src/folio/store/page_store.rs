use super::backend::StorageBackend;
use super::mem_backend::MemBackend;
use super::{PageStore, StoreInfo};
use crate::error::Result;
use crate::model::{Page, PageId};
use once_cell::unsync::OnceCell;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// [`PageStore`] over any [`StorageBackend`], opened on first use.
pub struct LocalPageStore<B: StorageBackend> {
    backend: B,
    opened: OnceCell<StoreInfo>,
}

impl<B: StorageBackend> LocalPageStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            opened: OnceCell::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_open(&self) -> bool {
        self.opened.get().is_some()
    }

    /// Opens the backend once; later calls reuse the result.
    fn open(&self) -> Result<&StoreInfo> {
        self.opened.get_or_try_init(|| {
            let info = self.backend.open().inspect_err(|e| {
                warn!(error = %e, "page store failed to open");
            })?;
            info!(
                location = %info.location.display(),
                version = info.version,
                "page store opened"
            );
            Ok(info)
        })
    }
}

impl Default for LocalPageStore<MemBackend> {
    fn default() -> Self {
        Self::new(MemBackend::new())
    }
}

impl<B: StorageBackend> PageStore for LocalPageStore<B> {
    fn add_page(&mut self, title: String, paragraphs: Vec<String>) -> Result<PageId> {
        self.open()?;
        let mut table = self.backend.load_table()?;
        let id = table.insert(title, paragraphs)?.id;
        self.backend.save_table(&table).inspect_err(|e| {
            warn!(error = %e, "failed to persist new page");
        })?;
        debug!(%id, "page added");
        Ok(id)
    }

    fn list_pages(&self) -> Result<Vec<Page>> {
        self.open()?;
        Ok(self.backend.load_table()?.pages)
    }

    fn get_page(&self, id: PageId) -> Result<Option<Page>> {
        self.open()?;
        let table = self.backend.load_table()?;
        Ok(table.get(id).cloned())
    }

    fn delete_page(&mut self, id: PageId) -> Result<()> {
        self.open()?;
        let mut table = self.backend.load_table()?;
        if table.remove(id).is_none() {
            debug!(%id, "delete of absent page ignored");
            return Ok(());
        }
        self.backend.save_table(&table).inspect_err(|e| {
            warn!(error = %e, %id, "failed to persist page deletion");
        })?;
        debug!(%id, "page deleted");
        Ok(())
    }

    fn location(&self) -> Result<PathBuf> {
        Ok(self.open()?.location.clone())
    }
}
