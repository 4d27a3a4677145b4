//! # Gameshelf Architecture
//!
//! Gameshelf catalogues a personal video-game collection. It is a library that
//! happens to have a CLI client: everything the binary does goes through the
//! same API any other front end would use.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders results, sets up logging       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Turns indexes / ids / titles into selectors              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collection + Storage (store/)                              │
//! │  - Collection owns the in-memory list, persists snapshots   │
//! │  - StorageBackend: FsBackend (production), MemBackend       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr. Diagnostics go
//! through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user-facing operation
//! - [`store`]: Collection state manager and storage backends
//! - [`model`]: `GameRecord`, input fields and the platform catalogue
//! - [`index`]: Display indexes and game selectors
//! - [`config`]: `config.json` handling
//! - [`image_search`]: Cover art lookup
//! - [`init`]: Data directory resolution and start-up
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod image_search;
pub mod index;
pub mod init;
pub mod model;
pub mod store;
