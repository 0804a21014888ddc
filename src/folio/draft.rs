//! # Drafts
//!
//! A [`Draft`] is a page that has not been saved yet. Its paragraphs carry
//! [`ParagraphId`]s so a client can point at "that paragraph" while the list
//! is being rearranged; the ids are meaningless outside the draft and are
//! dropped when the draft is flattened for saving.
//!
//! Every operation here is infallible. Unknown ids are ignored: a client only
//! ever refers to ids it was handed, so a stale id is a no-op rather than an
//! error.
//!
//! ## Reordering
//!
//! [`Draft::reorder`] is an array move, not a swap. Moving the first of three
//! paragraphs onto the last shifts the other two up:
//!
//! ```
//! use folio::draft::Draft;
//!
//! let mut draft = Draft::new("Notes");
//! let a = draft.append("a");
//! let _b = draft.append("b");
//! let c = draft.append("c");
//!
//! draft.reorder(a, c);
//! assert_eq!(draft.paragraph_contents(), vec!["b", "c", "a"]);
//! ```

use std::fmt;

/// Draft-local paragraph id. Unique within one draft, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParagraphId(pub u32);

impl fmt::Display for ParagraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftParagraph {
    pub id: ParagraphId,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    title: String,
    paragraphs: Vec<DraftParagraph>,
    next_id: u32,
}

impl Default for Draft {
    fn default() -> Self {
        Self::new("")
    }
}

impl Draft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            paragraphs: Vec::new(),
            next_id: 1,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DraftParagraph> {
        self.paragraphs.iter()
    }

    pub fn get(&self, id: ParagraphId) -> Option<&DraftParagraph> {
        self.paragraphs.iter().find(|p| p.id == id)
    }

    fn position(&self, id: ParagraphId) -> Option<usize> {
        self.paragraphs.iter().position(|p| p.id == id)
    }

    /// Adds a paragraph at the end and returns its id.
    pub fn append(&mut self, content: impl Into<String>) -> ParagraphId {
        let id = ParagraphId(self.next_id);
        self.next_id += 1;
        self.paragraphs.push(DraftParagraph {
            id,
            content: content.into(),
        });
        id
    }

    pub fn update(&mut self, id: ParagraphId, content: impl Into<String>) {
        if let Some(paragraph) = self.paragraphs.iter_mut().find(|p| p.id == id) {
            paragraph.content = content.into();
        }
    }

    pub fn remove(&mut self, id: ParagraphId) {
        self.paragraphs.retain(|p| p.id != id);
    }

    /// Moves `source` into the slot currently held by `target`, shifting the
    /// paragraphs in between by one.
    pub fn reorder(&mut self, source: ParagraphId, target: ParagraphId) {
        if source == target {
            return;
        }
        let (Some(from), Some(to)) = (self.position(source), self.position(target)) else {
            return;
        };
        let moved = self.paragraphs.remove(from);
        self.paragraphs.insert(to, moved);
    }

    /// Paragraph contents in draft order, ids stripped.
    pub fn paragraph_contents(&self) -> Vec<String> {
        self.paragraphs.iter().map(|p| p.content.clone()).collect()
    }

    /// Consumes the draft into the `(title, paragraphs)` pair a store accepts.
    pub fn into_parts(self) -> (String, Vec<String>) {
        let paragraphs = self.paragraphs.into_iter().map(|p| p.content).collect();
        (self.title, paragraphs)
    }
}
