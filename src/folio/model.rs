use crate::error::FolioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned page identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PageId {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(PageId)
            .map_err(|_| FolioError::Api(format!("Invalid page id: {}", s)))
    }
}

/// A saved page. This is also the persisted record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl Page {
    pub fn new(id: PageId, title: String, paragraphs: Vec<String>) -> Self {
        Self {
            id,
            title,
            paragraphs,
        }
    }

    /// First non-blank paragraph, used for list previews.
    pub fn lead(&self) -> Option<&str> {
        self.paragraphs
            .iter()
            .map(|p| p.as_str())
            .find(|p| !p.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_id_parses_plain_integers() {
        assert_eq!("7".parse::<PageId>().unwrap(), PageId(7));
        assert_eq!(" 12 ".parse::<PageId>().unwrap(), PageId(12));
    }

    #[test]
    fn page_id_rejects_garbage() {
        assert!("p1".parse::<PageId>().is_err());
        assert!("-3".parse::<PageId>().is_err());
        assert!("".parse::<PageId>().is_err());
    }

    #[test]
    fn record_shape_is_flat() {
        let page = Page::new(PageId(3), "T".into(), vec!["a".into(), "b".into()]);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "title": "T", "paragraphs": ["a", "b"]})
        );
    }

    #[test]
    fn lead_skips_blank_paragraphs() {
        let page = Page::new(PageId(1), "T".into(), vec!["  ".into(), "body".into()]);
        assert_eq!(page.lead(), Some("body"));

        let empty = Page::new(PageId(2), "T".into(), vec![]);
        assert_eq!(empty.lead(), None);
    }
}
