//! The persisted record table and its on-disk JSON form.
//!
//! Early tables stored a page body as a single `content` string. Those records
//! are still read: the string becomes the only paragraph (or no paragraph when
//! it is empty). Tables are always written back in the `paragraphs` shape.

use crate::error::{FolioError, Result};
use crate::model::{Page, PageId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageTable {
    pub version: u32,
    pub next_id: u64,
    pub pages: Vec<Page>,
}

impl Default for PageTable {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            next_id: 1,
            pages: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
struct RawTable {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    pages: Vec<RawRecord>,
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

#[derive(Deserialize)]
struct RawRecord {
    id: PageId,
    #[serde(default)]
    title: String,
    paragraphs: Option<Vec<String>>,
    content: Option<String>,
}

impl RawRecord {
    /// Returns the page and whether it had to be converted from the old shape.
    fn into_page(self) -> (Page, bool) {
        match (self.paragraphs, self.content) {
            (Some(paragraphs), _) => (Page::new(self.id, self.title, paragraphs), false),
            (None, Some(content)) => {
                let paragraphs = if content.is_empty() {
                    Vec::new()
                } else {
                    vec![content]
                };
                (Page::new(self.id, self.title, paragraphs), true)
            }
            (None, None) => (Page::new(self.id, self.title, Vec::new()), false),
        }
    }
}

impl PageTable {
    /// Parses a stored table. Anything unreadable, including a schema newer than
    /// this build understands, makes the store unavailable.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawTable = serde_json::from_str(text)
            .map_err(|e| FolioError::StorageUnavailable(format!("corrupt page table: {}", e)))?;

        if raw.version > CURRENT_VERSION {
            return Err(FolioError::StorageUnavailable(format!(
                "page table version {} is newer than supported {}",
                raw.version, CURRENT_VERSION
            )));
        }

        let mut migrated = 0;
        let pages: Vec<Page> = raw
            .pages
            .into_iter()
            .map(|record| {
                let (page, converted) = record.into_page();
                if converted {
                    migrated += 1;
                }
                page
            })
            .collect();
        if migrated > 0 {
            info!(migrated, "converted legacy content records to paragraphs");
        }

        let mut seen = HashSet::with_capacity(pages.len());
        let mut floor = 1;
        for page in &pages {
            if !seen.insert(page.id) {
                return Err(FolioError::StorageUnavailable(format!(
                    "duplicate page id {}",
                    page.id
                )));
            }
            let after = page.id.0.checked_add(1).ok_or_else(|| {
                FolioError::StorageUnavailable(format!("page id {} is out of range", page.id))
            })?;
            floor = floor.max(after);
        }

        // Never hand out an id that is already taken, whatever the file says.
        Ok(Self {
            version: CURRENT_VERSION,
            next_id: raw.next_id.max(floor),
            pages,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(FolioError::Serialization)
    }

    /// Appends a page under the next free id. Fails once the id space is used up.
    pub fn insert(&mut self, title: String, paragraphs: Vec<String>) -> Result<&Page> {
        let id = PageId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| FolioError::Write("no page ids left".to_string()))?;
        self.pages.push(Page::new(id, title, paragraphs));
        Ok(&self.pages[self.pages.len() - 1])
    }

    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn remove(&mut self, id: PageId) -> Option<Page> {
        let index = self.pages.iter().position(|p| p.id == id)?;
        Some(self.pages.remove(index))
    }
}
