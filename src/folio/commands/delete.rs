use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PageId;
use crate::store::PageStore;

/// Deletes pages permanently. Ids that do not exist are reported and skipped.
pub fn run<S: PageStore>(store: &mut S, ids: &[PageId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let existing = store.get_page(id)?;
        store.delete_page(id)?;
        match existing {
            Some(page) => {
                result.add_message(CmdMessage::success(format!(
                    "Page deleted ({}): {}",
                    id, page.title
                )));
                result.affected_pages.push(page);
            }
            None => {
                result.add_message(CmdMessage::info(format!(
                    "Page {} does not exist, nothing to delete",
                    id
                )));
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, MessageLevel};
    use crate::draft::Draft;
    use crate::error::FolioError;
    use crate::store::InMemoryStore;

    #[test]
    fn removes_pages() {
        let mut store = InMemoryStore::default();
        create::run(&mut store, &Draft::new("A")).unwrap();
        create::run(&mut store, &Draft::new("B")).unwrap();

        let result = run(&mut store, &[PageId(1), PageId(2)]).unwrap();
        assert_eq!(result.affected_pages.len(), 2);
        assert!(store.list_pages().unwrap().is_empty());
    }

    #[test]
    fn absent_ids_succeed_with_info() {
        let mut store = InMemoryStore::default();
        create::run(&mut store, &Draft::new("A")).unwrap();
        run(&mut store, &[PageId(1)]).unwrap();

        let again = run(&mut store, &[PageId(1)]).unwrap();
        assert!(again.affected_pages.is_empty());
        assert_eq!(again.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn write_failure_propagates() {
        let mut store = InMemoryStore::default();
        create::run(&mut store, &Draft::new("A")).unwrap();
        store.backend().set_simulate_write_error(true);

        let err = run(&mut store, &[PageId(1)]).unwrap_err();
        assert!(matches!(err, FolioError::Write(_)));
        store.backend().set_simulate_write_error(false);
        assert_eq!(store.list_pages().unwrap().len(), 1);
    }
}
