//! # adr-er Architecture
//!
//! adr-er authors and browses architectural decision records (ADRs): short
//! markdown files with a title, context, decision, status and consequences,
//! ordered by a sequence number in their filename (`0001-use-rust.md`).
//!
//! The crate is a library with a CLI client on top. The UI collects five text
//! fields; everything that decides *where* and *as what* they end up on disk
//! lives here.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, prints results, sets up logging        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + commands (commands/*.rs)                    │
//! │  - Resolve the target directory, run one operation          │
//! │  - Return structured CmdResult values                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pipeline                                                   │
//! │  scan → record → template → document → filesystem           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The pipeline
//!
//! 1. [`scan`] finds the store directory and its highest sequence number.
//! 2. A [`record::Record`] gets the next sequence number and the user's fields.
//! 3. The [`template::TemplateCatalog`] hands out the default template for the
//!    requested [`format::DocumentFormat`].
//! 4. [`record::Record::render`] produces a [`document::RenderableDocument`],
//!    whose filename is the [`slug`] of its sequenced title.
//! 5. The document validates itself once more and writes, refusing to replace
//!    an existing file unless asked to.
//!
//! From `api.rs` inward, code never prints, logs or exits; errors come back as
//! [`error::AdrError`].

pub mod api;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod record;
pub mod scan;
pub mod slug;
pub mod template;
