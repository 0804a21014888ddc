//! # API Facade
//!
//! The single entry point for every folio operation, whatever the client. It
//! dispatches to `commands/*.rs`, turns raw id strings into [`PageId`]s, and
//! returns structured [`CmdResult`]s. No business logic, no printing.
//!
//! `FolioApi<S: PageStore>` is generic over the store:
//! - Production: `FolioApi<FileStore>`
//! - Testing: `FolioApi<InMemoryStore>`

use crate::commands;
use crate::draft::Draft;
use crate::error::Result;
use crate::model::PageId;
use crate::store::PageStore;
use std::path::{Path, PathBuf};

pub struct FolioApi<S: PageStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: PageStore> FolioApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn create_page(&mut self, draft: &Draft) -> Result<CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn list_pages(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_page(&self, id: impl AsRef<str>) -> Result<CmdResult> {
        let id: PageId = id.as_ref().parse()?;
        commands::view::run(&self.store, id)
    }

    pub fn delete_pages<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        let ids = parse_ids(ids)?;
        commands::delete::run(&mut self.store, &ids)
    }

    pub fn store_location(&self) -> Result<CmdResult> {
        let location = self.store.location()?;
        Ok(CmdResult::default().with_store_location(location))
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// All-or-nothing: one bad id rejects the whole batch before anything is deleted.
fn parse_ids<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<PageId>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use crate::store::InMemoryStore;

    fn api() -> FolioApi<InMemoryStore> {
        FolioApi::new(InMemoryStore::default(), PathBuf::from("unused"))
    }

    #[test]
    fn create_then_view_by_string_id() {
        let mut api = api();
        let mut draft = Draft::new("T");
        draft.append("a");
        api.create_page(&draft).unwrap();

        let result = api.view_page("1").unwrap();
        assert_eq!(result.listed_pages[0].paragraphs, vec!["a"]);
    }

    #[test]
    fn invalid_id_is_an_api_error() {
        let api = api();
        assert!(matches!(api.view_page("one"), Err(FolioError::Api(_))));
    }

    #[test]
    fn bad_id_in_batch_deletes_nothing() {
        let mut api = api();
        api.create_page(&Draft::new("T")).unwrap();

        assert!(api.delete_pages(&["1", "x"]).is_err());
        assert_eq!(api.list_pages().unwrap().listed_pages.len(), 1);
    }

    #[test]
    fn store_location_comes_from_the_store() {
        let api = api();
        let result = api.store_location().unwrap();
        assert_eq!(
            result.store_location,
            Some(PathBuf::from("memory://pages"))
        );
    }
}
