//! # Storage Layer
//!
//! Storage is split in two:
//!
//! 1. A [`backend::StorageBackend`] is a plain key-value store. It knows how to
//!    read and write one string per key and nothing about games.
//! 2. The [`collection::Collection`] owns the in-memory list of games and keeps
//!    the backend in step with it by writing a full snapshot after every change.
//!
//! ## Snapshot Layout
//!
//! The whole collection lives under a single key ([`GAMES_KEY`]) as a JSON array
//! of game records. Every write replaces the previous value wholesale; there are
//! no partial writes or diffs.
//!
//! For [`fs_backend::FsBackend`] each key maps to one file in the data directory:
//!
//! ```text
//! <data dir>/
//! ├── games.json      # Collection snapshot (compact JSON array)
//! └── config.json     # Configuration (see config.rs)
//! ```
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production backend, atomic writes via temp file + rename.
//! - [`mem_backend::MemBackend`]: in-memory backend for tests, can simulate write failures.

pub mod backend;
pub mod collection;
pub mod fs_backend;
pub mod mem_backend;

/// Storage key holding the collection snapshot.
pub const GAMES_KEY: &str = "games";
