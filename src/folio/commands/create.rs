use crate::commands::{CmdMessage, CmdResult};
use crate::draft::Draft;
use crate::error::Result;
use crate::model::Page;
use crate::store::PageStore;

/// Saves a draft as a new page.
///
/// The draft is only borrowed: if the store refuses the write, the caller still
/// holds every paragraph and can try again.
pub fn run<S: PageStore>(store: &mut S, draft: &Draft) -> Result<CmdResult> {
    let title = draft.title().to_string();
    let paragraphs = draft.paragraph_contents();
    let id = store.add_page(title.clone(), paragraphs.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Page created ({}): {}",
        id, title
    )));
    result.affected_pages.push(Page::new(id, title, paragraphs));
    Ok(result)
}
