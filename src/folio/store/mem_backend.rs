use super::backend::StorageBackend;
use super::table::{PageTable, CURRENT_VERSION};
use super::StoreInfo;
use crate::error::{FolioError, Result};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell`/`Cell` for interior mutability since folio is single-threaded,
/// which keeps every `StorageBackend` method on `&self`.
pub struct MemBackend {
    table: RefCell<PageTable>,
    unavailable: Cell<bool>,
    simulate_write_error: Cell<bool>,
    opens: Cell<usize>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self::with_table(PageTable::default())
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: PageTable) -> Self {
        Self {
            table: RefCell::new(table),
            unavailable: Cell::new(false),
            simulate_write_error: Cell::new(false),
            opens: Cell::new(0),
        }
    }

    /// Make every `open` fail, as if the host refused storage.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// How many times `open` has been called.
    pub fn open_count(&self) -> usize {
        self.opens.get()
    }
}

impl StorageBackend for MemBackend {
    fn open(&self) -> Result<StoreInfo> {
        self.opens.set(self.opens.get() + 1);
        if self.unavailable.get() {
            return Err(FolioError::StorageUnavailable(
                "Simulated unavailable store".to_string(),
            ));
        }
        Ok(StoreInfo {
            location: PathBuf::from("memory://pages"),
            version: CURRENT_VERSION,
        })
    }

    fn load_table(&self) -> Result<PageTable> {
        Ok(self.table.borrow().clone())
    }

    fn save_table(&self, table: &PageTable) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(FolioError::Write("Simulated write error".to_string()));
        }
        *self.table.borrow_mut() = table.clone();
        Ok(())
    }
}
