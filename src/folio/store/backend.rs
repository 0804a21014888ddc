use super::table::PageTable;
use super::StoreInfo;
use crate::error::Result;

/// Raw storage I/O.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// `LocalPageStore` handles the "what" (id assignment, lazy open, deletes).
pub trait StorageBackend {
    /// Make the store usable: create whatever is missing and check the schema.
    /// Fails with `StorageUnavailable`.
    fn open(&self) -> Result<StoreInfo>;

    /// Read the whole record table. A store with no table yet yields an empty one.
    fn load_table(&self) -> Result<PageTable>;

    /// Replace the record table.
    /// MUST be atomic: either the old or the new table is visible afterwards.
    /// Fails with `Write`.
    fn save_table(&self, table: &PageTable) -> Result<()>;
}
