//! # CLI Behavior
//!
//! This is **one possible UI client** for gameshelf, not the application
//! itself. It is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Defaults
//!
//! - Running `gameshelf` with no arguments lists the collection.
//! - `gameshelf add` joins its trailing words into the title, so
//!   `gameshelf add -p "Super Nintendo" Chrono Trigger` needs no quotes around
//!   the title.
//! - Anywhere a game is expected, the number from `list`, `id:<id>` or a title
//!   fragment works. Title fragments must match exactly one game.
//!
//! ## Output
//!
//! Results go to stdout. Error messages and logs go to stderr. Logging is
//! quiet by default; `--verbose` or `RUST_LOG` turn it up.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `logging`: `tracing` subscriber setup
//! - `render`: Output formatting (grouped lists, detail view, stats)
//! - `setup`: Argument parsing via clap, grouped help text
//! - `styles`: Platform colours

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
