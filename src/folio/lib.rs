//! # Folio Architecture
//!
//! Folio keeps **pages**: a title plus an ordered list of paragraphs. The library owns
//! every rule about pages and paragraphs; the `folio` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the compose session, prints       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses raw ids into PageIds                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user action (create, list, view, delete)  │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PageStore trait, LocalPageStore over a StorageBackend    │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Drafts ([`draft`]) live beside this stack: a page being composed is edited purely in
//! memory and only reaches the store, flattened, when it is saved.
//!
//! ## Ids
//!
//! Two kinds of ids exist and never mix:
//! - [`model::PageId`]: assigned by the store on insert, never reused.
//! - [`draft::ParagraphId`]: local to one [`draft::Draft`], gone after save.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every client goes through
//! - [`commands`]: per-action logic
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: `Page` and `PageId`
//! - [`draft`]: paragraph editing before save
//! - [`config`]: `config.json` handling
//! - [`init`]: data directory resolution and context wiring
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
