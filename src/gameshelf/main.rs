//! # Gameshelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch + context wiring (commands.rs)                  │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! │  - Logging setup (logging.rs)                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!          gameshelf library: api → commands → store
//! ```
//!
//! Everything below the CLI is UI agnostic; see the library docs.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
