//! # Command Layer
//!
//! One module per user action. Commands take a store, do the work, and describe the
//! outcome in a [`CmdResult`]: the pages involved plus human-readable messages.
//! Printing those is the client's job.

use crate::config::FolioConfig;
use crate::model::Page;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Pages created or removed by the command.
    pub affected_pages: Vec<Page>,
    /// Pages to display.
    pub listed_pages: Vec<Page>,
    pub store_location: Option<PathBuf>,
    pub config: Option<FolioConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_pages(mut self, pages: Vec<Page>) -> Self {
        self.listed_pages = pages;
        self
    }

    pub fn with_store_location(mut self, location: PathBuf) -> Self {
        self.store_location = Some(location);
        self
    }

    pub fn with_config(mut self, config: FolioConfig) -> Self {
        self.config = Some(config);
        self
    }
}
