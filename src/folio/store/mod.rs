//! # Storage Layer
//!
//! Pages live in a single record table: a list of `{id, title, paragraphs}`
//! records plus the auto-increment counter that hands out ids.
//!
//! ## Two traits
//!
//! - [`PageStore`] is what the rest of the crate talks to: add, list, get,
//!   delete. It knows nothing about files.
//! - [`backend::StorageBackend`] is raw I/O: open the store, load the table,
//!   save the table. [`page_store::LocalPageStore`] sits between the two and
//!   owns the rules (id assignment, idempotent delete, lazy open).
//!
//! ## Lazy open
//!
//! A store handle is built once by the host (see [`crate::init`]) and passed
//! down. Nothing touches the backend until the first operation needs it; that
//! call opens the store (directory, empty table, schema check) and the result
//! is kept for the life of the handle. A failed open is not remembered, so the
//! next operation tries again.
//!
//! ## Implementations
//!
//! - [`FileStore`]: `LocalPageStore<FsBackend>`, the table lives in
//!   `<data dir>/pages.json` and is replaced atomically on every write.
//! - [`InMemoryStore`]: `LocalPageStore<MemBackend>`, for tests. Can simulate
//!   an unavailable store and failing writes.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── pages.json     # {"version": 1, "next_id": N, "pages": [...]}
//! └── config.json    # FolioConfig
//! ```

use crate::error::Result;
use crate::model::{Page, PageId};
use std::path::PathBuf;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod page_store;
pub mod table;

pub use page_store::LocalPageStore;

pub type FileStore = LocalPageStore<fs_backend::FsBackend>;
pub type InMemoryStore = LocalPageStore<mem_backend::MemBackend>;

/// What a successful open reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreInfo {
    pub location: PathBuf,
    pub version: u32,
}

/// Durable mapping from [`PageId`] to [`Page`].
pub trait PageStore {
    /// Insert a new page; the store picks the id.
    fn add_page(&mut self, title: String, paragraphs: Vec<String>) -> Result<PageId>;

    /// All pages, oldest first.
    fn list_pages(&self) -> Result<Vec<Page>>;

    /// `Ok(None)` when no page has this id.
    fn get_page(&self, id: PageId) -> Result<Option<Page>>;

    /// Remove a page. Removing an unknown id succeeds.
    fn delete_page(&mut self, id: PageId) -> Result<()>;

    /// Where the store lives (a `memory://` path for in-memory stores).
    fn location(&self) -> Result<PathBuf>;
}
