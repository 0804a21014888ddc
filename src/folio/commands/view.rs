use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PageId;
use crate::store::PageStore;

/// Looks a page up. A missing page is reported as a warning, not an error.
pub fn run<S: PageStore>(store: &S, id: PageId) -> Result<CmdResult> {
    match store.get_page(id)? {
        Some(page) => Ok(CmdResult::default().with_listed_pages(vec![page])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!("Page {} not found", id)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, MessageLevel};
    use crate::draft::Draft;
    use crate::store::InMemoryStore;

    #[test]
    fn shows_title_and_paragraphs_in_order() {
        let mut store = InMemoryStore::default();
        let mut draft = Draft::new("Test Page");
        draft.append("This is a test paragraph.");
        draft.append("This is another test paragraph.");
        create::run(&mut store, &draft).unwrap();

        let result = run(&store, PageId(1)).unwrap();
        assert_eq!(result.listed_pages.len(), 1);
        let page = &result.listed_pages[0];
        assert_eq!(page.title, "Test Page");
        assert_eq!(
            page.paragraphs,
            vec![
                "This is a test paragraph.",
                "This is another test paragraph."
            ]
        );
    }

    #[test]
    fn missing_page_is_a_warning() {
        let store = InMemoryStore::default();
        let result = run(&store, PageId(9)).unwrap();
        assert!(result.listed_pages.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Page 9 not found");
    }
}
