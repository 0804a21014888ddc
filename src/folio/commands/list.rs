use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::PageStore;

pub fn run<S: PageStore>(store: &S) -> Result<CmdResult> {
    let pages = store.list_pages()?;
    Ok(CmdResult::default().with_listed_pages(pages))
}
