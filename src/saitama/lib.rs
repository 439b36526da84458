//! # Saitama Architecture
//!
//! Saitama keeps a personal list of coding problems (add, browse, search,
//! randomly pick for practice) in one JSON file under the user's config
//! directory. The library is UI-agnostic; the binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, confirms, prints colored output        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load, change in memory, save once                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, paths.rs, transfer.rs, lookup.rs)   │
//! │  - FileStore: atomic saves, backups, load-time migration    │
//! │  - InMemoryStore for tests                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Durability
//!
//! The canonical file is only ever replaced by renaming a fully written temp
//! file from the same directory over it, so a crash leaves either the old or
//! the new file, never a torn one. The previous file is copied into
//! `.saitama_backups/` before each save and only the newest few snapshots are
//! kept (see [`store::backup`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage trait, file store, backups, in-memory store
//! - [`paths`]: Where the data file and backups live
//! - [`transfer`]: Import/export at arbitrary paths
//! - [`lookup`]: Find a problem by ID
//! - [`model`]: `Problem` and helpers
//! - [`config`]: Store layout and user settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod paths;
pub mod store;
pub mod transfer;
